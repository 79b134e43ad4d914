//! Metric reading domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{HomeError, HomeResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricReading {
    pub id: Uuid,
    pub metric_id: Uuid,
    pub value: f64,
    /// When the value was observed.
    pub timestamp: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddReading {
    pub value: f64,
    /// Observation time; `None` means "now".
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl AddReading {
    pub fn validate(&self) -> HomeResult<()> {
        if !self.value.is_finite() {
            return Err(HomeError::validation(format!(
                "reading value must be finite, got {}",
                self.value
            )));
        }
        Ok(())
    }
}

/// Listing envelope: the items plus their count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingListResponse {
    pub readings: Vec<MetricReading>,
    pub total: usize,
}

impl From<Vec<MetricReading>> for ReadingListResponse {
    fn from(readings: Vec<MetricReading>) -> Self {
        Self {
            total: readings.len(),
            readings,
        }
    }
}
