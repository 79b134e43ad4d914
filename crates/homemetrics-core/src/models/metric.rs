//! Metric domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{HomeError, HomeResult};
use crate::models::reading::MetricReading;

/// A measured quantity owned by a room.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metric {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Unit label (e.g. `kWh`, `m³`).
    pub unit: String,
    pub room_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMetric {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub unit: String,
    pub room_id: Uuid,
}

impl CreateMetric {
    pub fn validate(&self) -> HomeResult<()> {
        if self.name.trim().is_empty() {
            return Err(HomeError::validation("metric name is required"));
        }
        if self.unit.trim().is_empty() {
            return Err(HomeError::validation("metric unit is required"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricWithReadings {
    pub metric: Metric,
    pub readings: Vec<MetricReading>,
}

/// Listing envelope: the items plus their count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricListResponse {
    pub metrics: Vec<Metric>,
    pub total: usize,
}

impl From<Vec<Metric>> for MetricListResponse {
    fn from(metrics: Vec<Metric>) -> Self {
        Self {
            total: metrics.len(),
            metrics,
        }
    }
}
