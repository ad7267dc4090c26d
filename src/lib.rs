use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{app::env::Envy, kajabi::client::KajabiClient, stripe::client::StripeClient};

pub mod app;
pub mod kajabi;
pub mod stripe;
pub mod webhooks;

pub static MAX_BODY_BYTES: usize = 1024 * 1024;

pub struct AppState {
    pub envy: Envy,
    pub stripe: StripeClient,
    pub kajabi: KajabiClient,
}

impl AppState {
    pub fn new(envy: Envy, http_client: Option<reqwest::Client>) -> reqwest::Result<AppState> {
        let http_client = match http_client {
            Some(client) => client,
            None => app::util::reqwest::build_client()?,
        };

        let stripe = StripeClient::new(
            envy.stripe_secret_key.to_owned(),
            envy.stripe_api_url.to_owned(),
            http_client.clone(),
        );
        let kajabi = KajabiClient::new(
            envy.kajabi_api_key.to_owned(),
            envy.kajabi_api_url.to_owned(),
            http_client,
        );

        Ok(AppState {
            envy,
            stripe,
            kajabi,
        })
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(app::controller::get_root))
        .route(
            "/webhooks/stripe",
            post(webhooks::stripe::controller::receive_webhook),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
