use super::{client::KajabiClient, structs::kajabi_order::KajabiOrder};

/// Submits `order` once and reports the outcome only through logs.
///
/// The webhook has already been accepted by the time this runs, so a failed
/// order is never surfaced to Stripe and is not retried.
pub async fn submit_order_best_effort(client: &KajabiClient, order: &KajabiOrder) {
    match client.create_order(order).await {
        Ok(_) => tracing::info!(email = %order.email, "created kajabi order"),
        Err(e) => tracing::error!(email = %order.email, %e, "kajabi order error"),
    }
}
