use serde::Deserialize;
use serde_json::Value;

// https://stripe.com/docs/api/events/object
#[derive(Debug, Clone, Deserialize)]
pub struct StripeEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: StripeEventData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripeEventData {
    // Decoded once the event type is known.
    pub object: Value,
}
