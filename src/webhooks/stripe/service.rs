use axum::http::HeaderValue;

use crate::{
    app::{env::Envy, models::api_error::ApiError, util::time},
    kajabi::{self, enums::gift_product::GiftProduct, structs::kajabi_order::KajabiOrder},
    stripe::{
        config::DEFAULT_TOLERANCE,
        enums::{checkout_mode::CheckoutMode, stripe_event_type::StripeEventType},
        errors::{SignatureError, UpstreamFetchError},
        signature,
        structs::{checkout_session::CheckoutSession, stripe_event::StripeEvent},
    },
    AppState,
};

use super::errors::StripeWebhookApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountSource {
    Total(i64),
    Subscription(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiftPurchase {
    pub email: String,
    pub product: GiftProduct,
    pub amount: AmountSource,
}

/// Verifies the signature over the raw body and decodes the event envelope.
pub fn construct_event(
    payload: &[u8],
    signature_header: Option<&HeaderValue>,
    envy: &Envy,
) -> Result<StripeEvent, ApiError> {
    let Some(signature_header) = signature_header else {
        tracing::warn!("webhook signature missing");
        return Err(
            StripeWebhookApiError::InvalidSignature(SignatureError::MissingHeader).value(),
        );
    };

    let Ok(signature_header) = signature_header.to_str() else {
        tracing::warn!("webhook signature header is not ascii");
        return Err(
            StripeWebhookApiError::InvalidSignature(SignatureError::MalformedHeader).value(),
        );
    };

    if let Err(e) = signature::verify(
        payload,
        signature_header,
        &envy.stripe_webhook_secret,
        envy.stripe_webhook_tolerance.unwrap_or(DEFAULT_TOLERANCE),
        time::current_time_in_secs(),
    ) {
        tracing::warn!(%e, "webhook signature mismatch");
        return Err(StripeWebhookApiError::InvalidSignature(e).value());
    }

    match serde_json::from_slice::<StripeEvent>(payload) {
        Ok(event) => Ok(event),
        Err(e) => {
            tracing::warn!(%e, "webhook body is not a stripe event");
            Err(StripeWebhookApiError::MalformedEvent(e.to_string()).value())
        }
    }
}

pub async fn handle_event(event: StripeEvent, state: &AppState) -> Result<(), ApiError> {
    tracing::info!(event_id = %event.id, event_type = %event.event_type, "received stripe event");

    if !StripeEventType::CheckoutSessionCompleted.matches(&event.event_type) {
        tracing::debug!("not handling stripe event type: {}", event.event_type);
        return Ok(());
    }

    let session: CheckoutSession = match serde_json::from_value(event.data.object) {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(event_id = %event.id, %e, "checkout session did not decode");
            return Err(StripeWebhookApiError::InvalidSession(e.to_string()).value());
        }
    };

    handle_checkout_session_completed(session, state).await
}

async fn handle_checkout_session_completed(
    session: CheckoutSession,
    state: &AppState,
) -> Result<(), ApiError> {
    let purchase = match gift_purchase_from_session(&session) {
        Ok(purchase) => purchase,
        Err(e) => {
            tracing::warn!(session_id = %session.id, "{}", e.value().message);
            return Err(e.value());
        }
    };

    let amount_cents = match &purchase.amount {
        AmountSource::Total(amount) => *amount,
        AmountSource::Subscription(id) => match subscription_unit_amount(id, state).await {
            Ok(amount) => amount,
            Err(e) => {
                tracing::error!(session_id = %session.id, subscription_id = %id, %e);
                return Err(StripeWebhookApiError::SubscriptionFetchFailed(e).value());
            }
        },
    };

    let order = KajabiOrder::new(
        &state.envy.kajabi_site_id,
        &purchase.email,
        amount_cents,
        &purchase.product,
    );

    kajabi::service::submit_order_best_effort(&state.kajabi, &order).await;

    Ok(())
}

async fn subscription_unit_amount(id: &str, state: &AppState) -> Result<i64, UpstreamFetchError> {
    let subscription = state.stripe.retrieve_subscription(id).await?;

    subscription
        .first_unit_amount()
        .ok_or(UpstreamFetchError::MissingUnitAmount(subscription.id))
}

/// Checks that the session carries everything its mode needs.
pub fn gift_purchase_from_session(
    session: &CheckoutSession,
) -> Result<GiftPurchase, StripeWebhookApiError> {
    let Some(email) = session.customer_email() else {
        return Err(StripeWebhookApiError::InvalidSession(
            "checkout session has no customer email".to_string(),
        ));
    };

    if !validator::validate_email(email) {
        return Err(StripeWebhookApiError::InvalidSession(format!(
            "checkout session customer email is invalid: {}",
            email
        )));
    }

    let amount = match session.mode {
        CheckoutMode::Subscription => {
            let Some(id) = session.subscription.as_deref() else {
                return Err(StripeWebhookApiError::InvalidSession(
                    "subscription checkout session has no subscription".to_string(),
                ));
            };

            if !is_stripe_id(id) {
                return Err(StripeWebhookApiError::InvalidSession(format!(
                    "checkout session subscription id is invalid: {}",
                    id
                )));
            }

            AmountSource::Subscription(id.to_string())
        }
        CheckoutMode::Payment | CheckoutMode::Other(_) => {
            let Some(amount_total) = session.amount_total else {
                return Err(StripeWebhookApiError::InvalidSession(
                    "checkout session has no amount_total".to_string(),
                ));
            };

            AmountSource::Total(amount_total)
        }
    };

    Ok(GiftPurchase {
        email: email.to_string(),
        product: GiftProduct::from_mode(&session.mode),
        amount,
    })
}

// Ids are interpolated into the request path.
fn is_stripe_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
