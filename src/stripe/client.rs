use reqwest::header;

use super::{
    config::{API_URL, API_VERSION},
    errors::UpstreamFetchError,
    structs::stripe_subscription::StripeSubscription,
};

#[derive(Clone, Debug)]
pub struct StripeClient {
    pub http_client: reqwest::Client,
    pub api_url: String,
    secret_key: String,
}

impl StripeClient {
    pub fn new(
        secret_key: String,
        api_url: Option<String>,
        http_client: reqwest::Client,
    ) -> StripeClient {
        StripeClient {
            http_client,
            api_url: api_url
                .unwrap_or(API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            secret_key,
        }
    }

    /// Retrieves a subscription with its line item prices expanded.
    pub async fn retrieve_subscription(
        &self,
        id: &str,
    ) -> Result<StripeSubscription, UpstreamFetchError> {
        let result = self
            .http_client
            .get(format!("{}/v1/subscriptions/{}", self.api_url, id))
            .bearer_auth(&self.secret_key)
            .header("Stripe-Version", API_VERSION)
            .header(header::ACCEPT, "application/json")
            .query(&[("expand[]", "items.data.price")])
            .send()
            .await;

        let res = match result {
            Ok(res) => res,
            Err(e) => {
                tracing::error!(%e);
                return Err(UpstreamFetchError::Request(e.to_string()));
            }
        };

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::error!(%status, %body, "retrieve_subscription failed");
            return Err(UpstreamFetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        match res.json::<StripeSubscription>().await {
            Ok(subscription) => Ok(subscription),
            Err(e) => {
                tracing::error!(%e);
                Err(UpstreamFetchError::Decode(e.to_string()))
            }
        }
    }
}
