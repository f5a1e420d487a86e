use async_trait::async_trait;
use serde_json::Value;
use crate::errors::FetchError;

/// Fetches one JSON document. Implementations collapse every failure
/// (transport, status, body) into a single `FetchError`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FetchClient: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError>;
}
