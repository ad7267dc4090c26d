use std::sync::Arc;

use axum::{extract::State, http::HeaderMap};
use axum_macros::debug_handler;
use bytes::Bytes;

use crate::{app::models::api_error::ApiError, stripe::config::SIGNATURE_HEADER, AppState};

use super::service;

// The body is taken as raw bytes: the signature covers the exact payload.
#[debug_handler]
pub async fn receive_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str, ApiError> {
    let event = service::construct_event(&body, headers.get(SIGNATURE_HEADER), &state.envy)?;

    service::handle_event(event, &state).await?;

    Ok("OK")
}
