pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::HttpJsonSource;
pub use app::pipelines::{AsyncPipeline, DeferredPipeline, StreamPipeline};
pub use app::{
    get_luke_skywalker_info, get_luke_skywalker_info_async, get_luke_skywalker_info_stream,
    LUKE_SKYWALKER_URL,
};
pub use crate::core::engine::AggregationEngine;
pub use domain::model::{Film, Gender, Height, Person, PersonInfo, Planet};
pub use utils::error::{AggregateError, Result, Stage};
