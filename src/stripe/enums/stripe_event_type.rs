pub enum StripeEventType {
    CheckoutSessionCompleted,
}

impl StripeEventType {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::CheckoutSessionCompleted => "checkout.session.completed",
        }
    }

    pub fn matches(&self, event_type: &str) -> bool {
        self.value() == event_type
    }
}
