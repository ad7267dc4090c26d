use serde::Serialize;

use crate::kajabi::{config::CURRENCY, enums::gift_product::GiftProduct};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateOrderRequest<'a> {
    pub order: &'a KajabiOrder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KajabiOrder {
    pub site_id: String,
    pub email: String,
    pub total_price: String,
    pub currency: String,
    pub product_title: String,
}

impl KajabiOrder {
    pub fn new(site_id: &str, email: &str, amount_cents: i64, product: &GiftProduct) -> Self {
        Self {
            site_id: site_id.to_string(),
            email: email.to_string(),
            total_price: format_total_price(amount_cents),
            currency: CURRENCY.to_string(),
            product_title: product.value().to_string(),
        }
    }
}

/// Formats an amount in cents as a decimal string with two places.
pub fn format_total_price(amount_cents: i64) -> String {
    let sign = if amount_cents < 0 { "-" } else { "" };
    let cents = amount_cents.unsigned_abs();

    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}
