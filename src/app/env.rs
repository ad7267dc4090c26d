use serde::Deserialize;

pub static DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    pub stripe_secret_key: String,
    pub stripe_webhook_secret: String,
    pub stripe_api_url: Option<String>,
    // seconds, 0 disables the replay window
    pub stripe_webhook_tolerance: Option<u64>,

    pub kajabi_site_id: String,
    pub kajabi_api_key: String,
    pub kajabi_api_url: Option<String>,
}

fn default_app_env() -> String {
    "development".to_string()
}
