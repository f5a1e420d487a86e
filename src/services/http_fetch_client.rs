use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use crate::errors::FetchError;
use crate::traits::fetch_client::FetchClient;

/// Plain GET over reqwest. No retries and no timeout; a request that never
/// completes leaves its screen loading.
#[derive(Clone, Default)]
pub struct HttpFetchClient {
    client: Client,
}

impl HttpFetchClient {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

#[async_trait]
impl FetchClient for HttpFetchClient {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::new(format!("malformed JSON from {}: {}", url, e)))
    }
}
