use super::{
    config::{API_URL, ORDERS_PATH},
    errors::DownstreamOrderError,
    structs::kajabi_order::{CreateOrderRequest, KajabiOrder},
};

#[derive(Clone, Debug)]
pub struct KajabiClient {
    pub http_client: reqwest::Client,
    pub api_url: String,
    api_key: String,
}

impl KajabiClient {
    pub fn new(api_key: String, api_url: Option<String>, http_client: reqwest::Client) -> KajabiClient {
        KajabiClient {
            http_client,
            api_url: api_url
                .unwrap_or(API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key,
        }
    }

    pub async fn create_order(&self, order: &KajabiOrder) -> Result<(), DownstreamOrderError> {
        let result = self
            .http_client
            .post(format!("{}{}", self.api_url, ORDERS_PATH))
            .bearer_auth(&self.api_key)
            .json(&CreateOrderRequest { order })
            .send()
            .await;

        match result {
            Ok(res) => {
                let status = res.status();
                if status.is_success() {
                    return Ok(());
                }

                Err(DownstreamOrderError::Status {
                    status: status.as_u16(),
                    body: res.text().await.unwrap_or_default(),
                })
            }
            Err(e) => Err(DownstreamOrderError::Request(e.to_string())),
        }
    }
}
