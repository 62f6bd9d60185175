pub mod pipelines;

use crate::adapters::HttpJsonSource;
use crate::domain::model::PersonInfo;
use crate::utils::error::Result;
use futures::future::BoxFuture;
use futures::stream::BoxStream;
use pipelines::{AsyncPipeline, DeferredPipeline, StreamPipeline};

/// Luke Skywalker on the public Star Wars API.
pub const LUKE_SKYWALKER_URL: &str = "https://swapi.dev/api/people/1";

/// Future-combinator variant.
pub fn get_luke_skywalker_info() -> BoxFuture<'static, Result<PersonInfo>> {
    DeferredPipeline::new(HttpJsonSource::new(), LUKE_SKYWALKER_URL).person_info()
}

/// async/await variant.
pub async fn get_luke_skywalker_info_async() -> Result<PersonInfo> {
    AsyncPipeline::new(HttpJsonSource::new(), LUKE_SKYWALKER_URL)
        .person_info()
        .await
}

/// Stream variant. Each call returns a fresh cold stream.
pub fn get_luke_skywalker_info_stream() -> BoxStream<'static, Result<PersonInfo>> {
    StreamPipeline::new(HttpJsonSource::new(), LUKE_SKYWALKER_URL).person_info()
}
