use crate::core::join::{expand, join};
use crate::domain::model::{Film, Person, PersonInfo, Planet};
use crate::domain::ports::{Aggregator, JsonSource};
use crate::utils::error::{Result, Stage};
use futures::future::{self, BoxFuture};
use futures::{FutureExt, TryFutureExt};

/// 以 future 組合子串接的管道
///
/// No step is sequenced with `async` blocks: the root fetch is chained with
/// `and_then`, and the homeworld and film fetches are merged with
/// `try_join`/`try_join_all`, which fail fast and keep input order.
#[derive(Debug, Clone)]
pub struct DeferredPipeline<S: JsonSource> {
    source: S,
    root_url: String,
}

impl<S: JsonSource + Clone + 'static> DeferredPipeline<S> {
    pub fn new(source: S, root_url: impl Into<String>) -> Self {
        Self {
            source,
            root_url: root_url.into(),
        }
    }

    pub fn person_info(&self) -> BoxFuture<'static, Result<PersonInfo>> {
        let source = self.source.clone();

        self.source
            .fetch_json::<Person>(self.root_url.clone())
            .map_err(|e| e.at(Stage::Subject))
            .and_then(move |person| {
                let deps = expand(&person);
                tracing::debug!(
                    "Fan-out for {}: homeworld + {} films",
                    person.name,
                    deps.films.len()
                );

                let homeworld = source
                    .fetch_json::<Planet>(deps.homeworld)
                    .map_err(|e| e.at(Stage::Location));

                let films = future::try_join_all(deps.films.into_iter().enumerate().map(
                    |(index, url)| {
                        source
                            .fetch_json::<Film>(url)
                            .map_err(move |e| e.at(Stage::Film(index)))
                    },
                ));

                future::try_join(homeworld, films)
                    .map_ok(move |(planet, films)| join(&person, planet, films))
            })
            .boxed()
    }
}

#[async_trait::async_trait]
impl<S: JsonSource + Clone + 'static> Aggregator for DeferredPipeline<S> {
    fn name(&self) -> &'static str {
        "deferred"
    }

    async fn aggregate(&self) -> Result<PersonInfo> {
        self.person_info().await
    }
}
