use crate::stripe::enums::checkout_mode::CheckoutMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GiftProduct {
    MonthlySubscription,
    OneTime,
}

impl GiftProduct {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::MonthlySubscription => "Monthly Gift Subscription",
            Self::OneTime => "One-Time Gift",
        }
    }

    pub fn from_mode(mode: &CheckoutMode) -> GiftProduct {
        match mode.is_subscription() {
            true => Self::MonthlySubscription,
            false => Self::OneTime,
        }
    }
}
