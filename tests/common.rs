use async_trait::async_trait;
use serde_json::Value;
use usage_dashboard::{FetchClient, FetchError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Serves one fixed payload for every URL.
pub struct StaticFetchClient {
    pub payload: Value,
}

#[async_trait]
impl FetchClient for StaticFetchClient {
    async fn fetch(&self, _url: &str) -> Result<Value, FetchError> {
        Ok(self.payload.clone())
    }
}

pub async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
