use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum CheckoutMode {
    Payment,
    Subscription,
    // "setup" and anything Stripe adds later are billed like a payment.
    Other(String),
}

impl CheckoutMode {
    pub fn is_subscription(&self) -> bool {
        matches!(self, Self::Subscription)
    }
}

impl From<String> for CheckoutMode {
    fn from(mode: String) -> Self {
        match mode.as_str() {
            "payment" => Self::Payment,
            "subscription" => Self::Subscription,
            _ => Self::Other(mode),
        }
    }
}
