use crate::core::{Aggregator, PersonInfo};
use crate::utils::error::{AggregateError, Result};
use std::time::Instant;

/// Runs one or more aggregators in turn. With several aggregators every
/// result must be identical, otherwise the run fails.
pub struct AggregationEngine {
    aggregators: Vec<Box<dyn Aggregator>>,
}

impl AggregationEngine {
    pub fn new(aggregators: Vec<Box<dyn Aggregator>>) -> Self {
        Self { aggregators }
    }

    pub async fn run(&self) -> Result<PersonInfo> {
        let mut baseline: Option<(&'static str, PersonInfo)> = None;

        for aggregator in &self.aggregators {
            let started = Instant::now();
            tracing::info!("🚀 Running {} pipeline", aggregator.name());

            let info = aggregator.aggregate().await.map_err(|e| {
                tracing::error!("❌ {} pipeline failed: {}", aggregator.name(), e);
                e
            })?;

            tracing::info!(
                "✅ {} pipeline finished in {:?} ({} films)",
                aggregator.name(),
                started.elapsed(),
                info.films.len()
            );

            if let Some((name, expected)) = &baseline {
                if *expected != info {
                    return Err(AggregateError::VariantMismatch {
                        left: format!("{}: {:?}", name, expected),
                        right: format!("{}: {:?}", aggregator.name(), info),
                    });
                }
            } else {
                baseline = Some((aggregator.name(), info));
            }
        }

        baseline
            .map(|(_, info)| info)
            .ok_or_else(|| AggregateError::ConfigError {
                message: "no pipeline variant selected".to_string(),
            })
    }
}
