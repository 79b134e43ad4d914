//! In-memory implementation of [`MetricRepository`].

use chrono::Utc;
use homemetrics_core::error::HomeResult;
use homemetrics_core::models::metric::{CreateMetric, Metric, MetricWithReadings};
use homemetrics_core::repository::MetricRepository;
use tracing::info;
use uuid::Uuid;

use crate::error::StoreError;
use crate::graph::ResourceGraph;

#[derive(Clone)]
pub struct GraphMetricRepository {
    graph: ResourceGraph,
}

impl GraphMetricRepository {
    pub fn new(graph: ResourceGraph) -> Self {
        Self { graph }
    }
}

impl MetricRepository for GraphMetricRepository {
    async fn create(&self, input: CreateMetric) -> HomeResult<Metric> {
        let mut state = self.graph.write().await;

        // The owning room must exist while the metric is inserted.
        if !state.rooms.contains_key(&input.room_id) {
            return Err(StoreError::NotFound {
                entity: "room",
                id: input.room_id.to_string(),
            }
            .into());
        }

        let now = Utc::now();
        let metric = Metric {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            unit: input.unit,
            room_id: input.room_id,
            created_at: now,
            updated_at: now,
        };
        state.metrics.insert(metric.id, metric.clone());
        state.readings.insert(metric.id, Vec::new());
        drop(state);

        info!(
            metric_id = %metric.id,
            room_id = %metric.room_id,
            name = %metric.name,
            unit = %metric.unit,
            "Metric created"
        );
        Ok(metric)
    }

    async fn get_by_id(&self, id: Uuid) -> HomeResult<MetricWithReadings> {
        let state = self.graph.read().await;
        let metric = state.metrics.get(&id).cloned().ok_or_else(|| StoreError::NotFound {
            entity: "metric",
            id: id.to_string(),
        })?;
        let readings = state.readings.get(&id).cloned().unwrap_or_default();
        Ok(MetricWithReadings { metric, readings })
    }

    async fn list(&self) -> HomeResult<Vec<Metric>> {
        let state = self.graph.read().await;
        Ok(state.metrics.values().cloned().collect())
    }

    async fn delete(&self, id: Uuid) -> HomeResult<()> {
        let removed = self
            .graph
            .write()
            .await
            .remove_metric(id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "metric",
                id: id.to_string(),
            })?;

        info!(metric_id = %id, readings = removed.readings, "Metric deleted");
        Ok(())
    }
}
