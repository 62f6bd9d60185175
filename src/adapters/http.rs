use crate::domain::ports::JsonSource;
use crate::utils::error::{AggregateError, Result};
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::Client;

/// 基於 reqwest 的 JSON 來源
///
/// Requests carry no extra headers or query parameters.
#[derive(Debug, Clone, Default)]
pub struct HttpJsonSource {
    client: Client,
}

impl HttpJsonSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl JsonSource for HttpJsonSource {
    fn fetch_value(&self, url: String) -> BoxFuture<'static, Result<serde_json::Value>> {
        let client = self.client.clone();
        async move {
            tracing::debug!("Making API request to: {}", url);
            let response = client
                .get(&url)
                .send()
                .await
                .map_err(|source| AggregateError::Http {
                    url: url.clone(),
                    source,
                })?;

            let status = response.status();
            tracing::debug!("API response status for {}: {}", url, status);
            if !status.is_success() {
                return Err(AggregateError::Status { url, status });
            }

            let body = response
                .bytes()
                .await
                .map_err(|source| AggregateError::Http {
                    url: url.clone(),
                    source,
                })?;

            serde_json::from_slice(&body).map_err(|source| AggregateError::Decode { url, source })
        }
        .boxed()
    }
}
