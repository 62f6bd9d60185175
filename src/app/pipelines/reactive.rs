use crate::core::join::{expand, join, IndexedSlots};
use crate::domain::model::{Film, Person, PersonInfo, Planet};
use crate::domain::ports::{Aggregator, JsonSource};
use crate::utils::error::{AggregateError, Result, Stage};
use futures::future;
use futures::stream::{self, BoxStream, Stream, StreamExt, TryStreamExt};

/// Stream 版本的管道
///
/// [`StreamPipeline::person_info`] returns a cold stream: nothing is fetched
/// until it is polled, and every new stream runs the whole pipeline again.
#[derive(Debug, Clone)]
pub struct StreamPipeline<S: JsonSource> {
    source: S,
    root_url: String,
}

impl<S: JsonSource + Clone + 'static> StreamPipeline<S> {
    pub fn new(source: S, root_url: impl Into<String>) -> Self {
        Self {
            source,
            root_url: root_url.into(),
        }
    }

    /// Emits exactly one [`PersonInfo`], or a single error.
    pub fn person_info(&self) -> BoxStream<'static, Result<PersonInfo>> {
        let source = self.source.clone();

        self.source
            .fetch_json_stream::<Person>(self.root_url.clone())
            .map_err(|e| e.at(Stage::Subject))
            .map_ok(move |person| {
                let deps = expand(&person);
                tracing::debug!(
                    "Fan-out for {}: homeworld + {} films",
                    person.name,
                    deps.films.len()
                );

                let homeworld = source
                    .fetch_json_stream::<Planet>(deps.homeworld)
                    .map_err(|e| e.at(Stage::Location));

                let films = fork_join_ordered(
                    deps.films
                        .into_iter()
                        .enumerate()
                        .map(|(index, url)| {
                            source
                                .fetch_json_stream::<Film>(url)
                                .map_err(move |e| e.at(Stage::Film(index)))
                                .boxed()
                        })
                        .collect(),
                );

                fork_join_pair((homeworld, Stage::Location), (films, Stage::Films))
                    .map_ok(move |(planet, films)| join(&person, planet, films))
            })
            .try_flatten()
            .boxed()
    }
}

/// 取得單值 stream 的第一個元素
async fn first<T, St>(stream: St, stage: Stage) -> Result<T>
where
    St: Stream<Item = Result<T>> + Unpin,
{
    match stream.into_future().await {
        (Some(item), _) => item,
        (None, _) => Err(AggregateError::EmptyStream { stage }),
    }
}

/// Waits for both single-item streams and emits the pair. The first error
/// from either side is emitted at once.
fn fork_join_pair<A, B, SA, SB>(
    (left, left_stage): (SA, Stage),
    (right, right_stage): (SB, Stage),
) -> impl Stream<Item = Result<(A, B)>>
where
    SA: Stream<Item = Result<A>> + Unpin,
    SB: Stream<Item = Result<B>> + Unpin,
{
    stream::once(future::try_join(
        first(left, left_stage),
        first(right, right_stage),
    ))
}

/// Merges single-item streams, polling all of them concurrently, and emits
/// their values once in input order. Stops at the first error.
fn fork_join_ordered<T>(
    streams: Vec<BoxStream<'static, Result<T>>>,
) -> BoxStream<'static, Result<Vec<T>>>
where
    T: Send + 'static,
{
    let count = streams.len();
    let tagged = stream::select_all(
        streams
            .into_iter()
            .enumerate()
            .map(|(index, stream)| stream.map_ok(move |value| (index, value)).boxed()),
    );

    stream::once(tagged.try_fold(IndexedSlots::new(count), |mut slots, (index, value)| {
        slots.fill(index, value);
        future::ready(Ok(slots))
    }))
    .map(|folded| folded.and_then(|slots| slots.into_vec(Stage::Film)))
    .boxed()
}

#[async_trait::async_trait]
impl<S: JsonSource + Clone + 'static> Aggregator for StreamPipeline<S> {
    fn name(&self) -> &'static str {
        "stream"
    }

    async fn aggregate(&self) -> Result<PersonInfo> {
        first(self.person_info(), Stage::Subject).await
    }
}
