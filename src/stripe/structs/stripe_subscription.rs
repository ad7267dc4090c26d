use serde::Deserialize;

// https://stripe.com/docs/api/subscriptions/object
#[derive(Debug, Clone, Deserialize)]
pub struct StripeSubscription {
    pub id: String,
    pub items: StripeList<StripeSubscriptionItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripeList<T> {
    pub data: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripeSubscriptionItem {
    pub id: String,
    pub price: StripePrice,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripePrice {
    pub id: String,
    pub unit_amount: Option<i64>,
}

impl StripeSubscription {
    /// Unit amount in cents of the first line item's price.
    pub fn first_unit_amount(&self) -> Option<i64> {
        self.items.data.first().and_then(|item| item.price.unit_amount)
    }
}
