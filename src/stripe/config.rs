pub static API_URL: &str = "https://api.stripe.com";
pub static API_VERSION: &str = "2022-11-15";

pub static SIGNATURE_HEADER: &str = "stripe-signature";
pub static SIGNATURE_SCHEME: &str = "v1";

// seconds, matches the Stripe SDKs
pub static DEFAULT_TOLERANCE: u64 = 300;
