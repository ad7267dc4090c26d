use std::time::Duration;

pub static REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn build_client() -> reqwest::Result<reqwest::Client> {
    reqwest::ClientBuilder::new()
        .timeout(REQUEST_TIMEOUT)
        .build()
}
