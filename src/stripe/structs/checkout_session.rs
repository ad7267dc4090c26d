use serde::Deserialize;

use crate::stripe::enums::checkout_mode::CheckoutMode;

// https://stripe.com/docs/api/checkout/sessions/object
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub mode: CheckoutMode,
    pub customer_details: Option<CustomerDetails>,
    pub amount_total: Option<i64>,
    pub subscription: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerDetails {
    pub email: Option<String>,
}

impl CheckoutSession {
    pub fn customer_email(&self) -> Option<&str> {
        self.customer_details
            .as_ref()
            .and_then(|details| details.email.as_deref())
    }
}
