use crate::core::join::{expand, join, IndexedSlots};
use crate::domain::model::{Film, Person, PersonInfo, Planet};
use crate::domain::ports::{Aggregator, JsonSource};
use crate::utils::error::{Result, Stage};
use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;
use std::future::Future;

/// async/await 版本的管道
#[derive(Debug, Clone)]
pub struct AsyncPipeline<S: JsonSource> {
    source: S,
    root_url: String,
}

impl<S: JsonSource> AsyncPipeline<S> {
    pub fn new(source: S, root_url: impl Into<String>) -> Self {
        Self {
            source,
            root_url: root_url.into(),
        }
    }

    pub async fn person_info(&self) -> Result<PersonInfo> {
        let person: Person = self
            .source
            .fetch_json(self.root_url.clone())
            .await
            .map_err(|e| e.at(Stage::Subject))?;

        let deps = expand(&person);
        tracing::debug!(
            "Fan-out for {}: homeworld + {} films",
            person.name,
            deps.films.len()
        );

        let homeworld = async {
            self.source
                .fetch_json::<Planet>(deps.homeworld)
                .await
                .map_err(|e| e.at(Stage::Location))
        };

        let films = join_indexed(deps.films.into_iter().enumerate().map(|(index, url)| {
            let fetch = self.source.fetch_json::<Film>(url);
            async move { fetch.await.map_err(|e| e.at(Stage::Film(index))) }
        }));

        let (planet, films) = tokio::try_join!(homeworld, films)?;
        Ok(join(&person, planet, films))
    }
}

/// 同時執行所有 future，依索引填入結果；任一失敗立即返回
async fn join_indexed<F, T>(futures: impl IntoIterator<Item = F>) -> Result<Vec<T>>
where
    F: Future<Output = Result<T>>,
{
    let mut pending: FuturesUnordered<_> = futures
        .into_iter()
        .enumerate()
        .map(|(index, fut)| fut.map(move |result| (index, result)))
        .collect();

    let mut slots = IndexedSlots::new(pending.len());
    while let Some((index, result)) = pending.next().await {
        slots.fill(index, result?);
    }
    slots.into_vec(Stage::Film)
}

#[async_trait::async_trait]
impl<S: JsonSource> Aggregator for AsyncPipeline<S> {
    fn name(&self) -> &'static str {
        "async"
    }

    async fn aggregate(&self) -> Result<PersonInfo> {
        self.person_info().await
    }
}
