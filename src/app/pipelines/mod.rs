pub mod deferred;
pub mod reactive;
pub mod suspend;

pub use deferred::DeferredPipeline;
pub use reactive::StreamPipeline;
pub use suspend::AsyncPipeline;

use crate::config::Variant;
use crate::domain::ports::{Aggregator, JsonSource};

/// 依照選擇的變體建立對應的管道
pub fn build_aggregators<S>(variant: Variant, source: S, root_url: &str) -> Vec<Box<dyn Aggregator>>
where
    S: JsonSource + Clone + 'static,
{
    let deferred = || Box::new(DeferredPipeline::new(source.clone(), root_url)) as Box<dyn Aggregator>;
    let suspend = || Box::new(AsyncPipeline::new(source.clone(), root_url)) as Box<dyn Aggregator>;
    let stream = || Box::new(StreamPipeline::new(source.clone(), root_url)) as Box<dyn Aggregator>;

    match variant {
        Variant::Deferred => vec![deferred()],
        Variant::Async => vec![suspend()],
        Variant::Stream => vec![stream()],
        Variant::All => vec![deferred(), suspend(), stream()],
    }
}
