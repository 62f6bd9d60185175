use crate::domain::model::PersonInfo;
use crate::utils::error::{AggregateError, Result};
use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::stream::{self, BoxStream};
use futures::{FutureExt, StreamExt};
use serde::de::DeserializeOwned;

/// 以 URL 取得 JSON 的傳輸層
///
/// Every returned future owns its inputs, so fetches can be composed and
/// joined freely. Implementations must fail on non-2xx status, connection
/// errors and malformed bodies instead of returning a default.
pub trait JsonSource: Send + Sync {
    fn fetch_value(&self, url: String) -> BoxFuture<'static, Result<serde_json::Value>>;

    fn fetch_json<T>(&self, url: String) -> BoxFuture<'static, Result<T>>
    where
        Self: Sized,
        T: DeserializeOwned + Send + 'static,
    {
        let decode_url = url.clone();
        self.fetch_value(url)
            .map(move |result| result.and_then(|value| decode(&decode_url, value)))
            .boxed()
    }

    /// Single-item stream over [`JsonSource::fetch_json`]. Nothing is
    /// requested until the stream is polled.
    fn fetch_json_stream<T>(&self, url: String) -> BoxStream<'static, Result<T>>
    where
        Self: Sized,
        T: DeserializeOwned + Send + 'static,
    {
        stream::once(self.fetch_json(url)).boxed()
    }
}

fn decode<T: DeserializeOwned>(url: &str, value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value).map_err(|source| AggregateError::Decode {
        url: url.to_string(),
        source,
    })
}

#[async_trait]
pub trait Aggregator: Send + Sync {
    fn name(&self) -> &'static str;

    async fn aggregate(&self) -> Result<PersonInfo>;
}
