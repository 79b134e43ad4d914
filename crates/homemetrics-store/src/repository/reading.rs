//! In-memory implementation of [`ReadingRepository`].

use chrono::Utc;
use homemetrics_core::error::HomeResult;
use homemetrics_core::models::reading::{AddReading, MetricReading};
use homemetrics_core::repository::ReadingRepository;
use tracing::debug;
use uuid::Uuid;

use crate::error::StoreError;
use crate::graph::ResourceGraph;

#[derive(Clone)]
pub struct GraphReadingRepository {
    graph: ResourceGraph,
}

impl GraphReadingRepository {
    pub fn new(graph: ResourceGraph) -> Self {
        Self { graph }
    }
}

fn metric_not_found(id: Uuid) -> StoreError {
    StoreError::NotFound {
        entity: "metric",
        id: id.to_string(),
    }
}

impl ReadingRepository for GraphReadingRepository {
    async fn add(&self, metric_id: Uuid, input: AddReading) -> HomeResult<MetricReading> {
        let mut state = self.graph.write().await;

        if !state.metrics.contains_key(&metric_id) {
            return Err(metric_not_found(metric_id).into());
        }

        let now = Utc::now();
        let reading = MetricReading {
            id: Uuid::new_v4(),
            metric_id,
            value: input.value,
            timestamp: input.timestamp.unwrap_or(now),
            created_at: now,
        };
        state
            .readings
            .entry(metric_id)
            .or_default()
            .push(reading.clone());
        drop(state);

        debug!(
            metric_id = %metric_id,
            reading_id = %reading.id,
            value = reading.value,
            "Reading recorded"
        );
        Ok(reading)
    }

    async fn list(&self, metric_id: Uuid) -> HomeResult<Vec<MetricReading>> {
        let state = self.graph.read().await;
        if !state.metrics.contains_key(&metric_id) {
            return Err(metric_not_found(metric_id).into());
        }
        Ok(state.readings.get(&metric_id).cloned().unwrap_or_default())
    }
}
