use axum::http::StatusCode;

use crate::{
    app::models::api_error::ApiError,
    stripe::errors::{SignatureError, UpstreamFetchError},
};

#[derive(Debug)]
pub enum StripeWebhookApiError {
    InvalidSignature(SignatureError),
    MalformedEvent(String),
    InvalidSession(String),
    SubscriptionFetchFailed(UpstreamFetchError),
}

impl StripeWebhookApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::InvalidSignature(e) => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: format!("Webhook Error: {}", e),
            },
            Self::MalformedEvent(e) => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: format!("Webhook Error: {}", e),
            },
            Self::InvalidSession(e) => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: format!("Webhook Error: {}", e),
            },
            // Non-2xx makes Stripe redeliver the event later.
            Self::SubscriptionFetchFailed(e) => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: format!("Failed to retrieve subscription: {}", e),
            },
        }
    }
}
