//! Shared harness for driving the router against mocked Stripe and Kajabi APIs.

#![allow(dead_code)]

use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use checkout_bridge::{app::env::Envy, create_router, stripe::signature, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::MockServer;

pub const WEBHOOK_SECRET: &str = "whsec_test_secret";
pub const STRIPE_SECRET_KEY: &str = "sk_test_123";
pub const KAJABI_API_KEY: &str = "kajabi_test_key";
pub const KAJABI_SITE_ID: &str = "site_42";

pub struct TestApp {
    pub router: Router,
    pub stripe: MockServer,
    pub kajabi: MockServer,
}

impl TestApp {
    pub async fn start() -> Self {
        Self::start_with(|_| {}).await
    }

    /// Starts the app after letting `configure` adjust the environment.
    pub async fn start_with(configure: impl FnOnce(&mut Envy)) -> Self {
        let stripe = MockServer::start().await;
        let kajabi = MockServer::start().await;

        let mut envy = Envy {
            app_env: "test".to_string(),
            port: None,
            stripe_secret_key: STRIPE_SECRET_KEY.to_string(),
            stripe_webhook_secret: WEBHOOK_SECRET.to_string(),
            stripe_api_url: Some(stripe.uri()),
            stripe_webhook_tolerance: None,
            kajabi_site_id: KAJABI_SITE_ID.to_string(),
            kajabi_api_key: KAJABI_API_KEY.to_string(),
            kajabi_api_url: Some(kajabi.uri()),
        };

        configure(&mut envy);

        let state = AppState::new(envy, None).expect("http client should build");

        Self {
            router: create_router(Arc::new(state)),
            stripe,
            kajabi,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = hyper::body::to_bytes(response.into_body())
            .await
            .expect("body should be readable");

        (status, String::from_utf8_lossy(&bytes).to_string())
    }

    pub async fn post_webhook(&self, payload: &str, signature: Option<&str>) -> (StatusCode, String) {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/webhooks/stripe")
            .header("content-type", "application/json");

        if let Some(signature) = signature {
            builder = builder.header("stripe-signature", signature);
        }

        let request = builder
            .body(Body::from(payload.to_string()))
            .expect("request should build");

        self.send(request).await
    }

    /// Posts `payload` signed with the configured secret at the current time.
    pub async fn post_signed_webhook(&self, payload: &str) -> (StatusCode, String) {
        let signature = signature::sign(payload.as_bytes(), WEBHOOK_SECRET, now());
        self.post_webhook(payload, Some(&signature)).await
    }

    pub async fn kajabi_request_count(&self) -> usize {
        self.kajabi
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}

pub fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock is after epoch")
        .as_secs()
}

pub fn event(event_type: &str, object: Value) -> String {
    json!({
        "id": "evt_test_1",
        "object": "event",
        "api_version": "2022-11-15",
        "type": event_type,
        "data": { "object": object },
    })
    .to_string()
}

pub fn payment_session(email: &str, amount_total: i64) -> Value {
    json!({
        "id": "cs_test_payment",
        "object": "checkout.session",
        "mode": "payment",
        "customer_details": { "email": email },
        "amount_total": amount_total,
        "subscription": null,
    })
}

pub fn subscription_session(email: &str, subscription_id: &str) -> Value {
    json!({
        "id": "cs_test_subscription",
        "object": "checkout.session",
        "mode": "subscription",
        "customer_details": { "email": email },
        "amount_total": 1999,
        "subscription": subscription_id,
    })
}

pub fn subscription(id: &str, unit_amount: i64) -> Value {
    json!({
        "id": id,
        "object": "subscription",
        "items": {
            "object": "list",
            "data": [
                {
                    "id": "si_test_1",
                    "object": "subscription_item",
                    "price": { "id": "price_test_1", "object": "price", "unit_amount": unit_amount },
                }
            ],
        },
    })
}

pub fn expected_order(email: &str, total_price: &str, product_title: &str) -> Value {
    json!({
        "order": {
            "site_id": KAJABI_SITE_ID,
            "email": email,
            "total_price": total_price,
            "currency": "USD",
            "product_title": product_title,
        }
    })
}
