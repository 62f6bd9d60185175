//! In-memory [`JsonSource`] for pipeline unit tests.

use crate::domain::ports::JsonSource;
use crate::utils::error::{AggregateError, Result};
use futures::future::BoxFuture;
use futures::FutureExt;
use serde_json::json;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Semaphore;

pub const ROOT_URL: &str = "mem://people/1/";
pub const HOMEWORLD_URL: &str = "mem://planets/1/";

pub fn film_url(index: usize) -> String {
    format!("mem://films/{}/", index + 1)
}

/// Serves canned JSON. The root URL answers immediately; every other URL is
/// held until [`GatedSource::release`] is called for it.
#[derive(Clone, Default)]
pub struct GatedSource {
    responses: Arc<HashMap<String, serde_json::Value>>,
    gates: Arc<HashMap<String, Arc<Semaphore>>>,
    issued: Arc<Mutex<Vec<String>>>,
    resolved: Arc<Mutex<Vec<String>>>,
}

impl GatedSource {
    /// Luke Skywalker with `film_count` films.
    pub fn luke(film_count: usize) -> Self {
        let mut responses = HashMap::new();
        let films: Vec<String> = (0..film_count).map(film_url).collect();

        responses.insert(
            ROOT_URL.to_string(),
            json!({
                "name": "Luke Skywalker",
                "height": "172",
                "gender": "male",
                "homeworld": HOMEWORLD_URL,
                "films": films,
            }),
        );
        responses.insert(HOMEWORLD_URL.to_string(), json!({"name": "Tatooine"}));
        for (index, url) in films.iter().enumerate() {
            responses.insert(
                url.clone(),
                json!({
                    "title": format!("Episode {}", index + 1),
                    "director": "George Lucas",
                    "release_date": "1977-05-25",
                }),
            );
        }

        let gates = std::iter::once(HOMEWORLD_URL.to_string())
            .chain(films)
            .map(|url| (url, Arc::new(Semaphore::new(0))))
            .collect();

        Self {
            responses: Arc::new(responses),
            gates: Arc::new(gates),
            ..Default::default()
        }
    }

    /// Drops the canned response for `url`, which then answers with status 500.
    pub fn failing(mut self, url: &str) -> Self {
        Arc::make_mut(&mut self.responses).remove(url);
        self
    }

    pub fn release(&self, url: &str) {
        if let Some(gate) = self.gates.get(url) {
            gate.add_permits(1);
        }
    }

    pub fn release_all(&self) {
        for gate in self.gates.values() {
            gate.add_permits(1);
        }
    }

    pub fn issued(&self) -> Vec<String> {
        self.issued.lock().unwrap().clone()
    }

    pub fn resolved(&self) -> Vec<String> {
        self.resolved.lock().unwrap().clone()
    }

    /// Yields until `condition` holds, failing the test after two seconds.
    pub async fn wait_until(&self, condition: impl Fn(&Self) -> bool) {
        tokio::time::timeout(Duration::from_secs(2), async {
            while !condition(self) {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("condition not reached; fetches were not issued concurrently");
    }
}

impl JsonSource for GatedSource {
    fn fetch_value(&self, url: String) -> BoxFuture<'static, Result<serde_json::Value>> {
        let this = self.clone();
        async move {
            this.issued.lock().unwrap().push(url.clone());

            if let Some(gate) = this.gates.get(&url) {
                let permit = gate.acquire().await.expect("gate closed");
                permit.forget();
            }

            this.resolved.lock().unwrap().push(url.clone());
            this.responses
                .get(&url)
                .cloned()
                .ok_or(AggregateError::Status {
                    url,
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                })
        }
        .boxed()
    }
}

/// Drives `pipeline` and `controller` on the same task.
pub async fn drive<P, C, T>(pipeline: P, controller: C) -> T
where
    P: Future<Output = T>,
    C: Future<Output = ()>,
{
    let (output, ()) = tokio::join!(pipeline, controller);
    output
}
