// src/types/chart.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sample of a synthetic price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// The timestamp as a UTC datetime, if it is in chrono's representable range.
    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp)
    }
}

/// True when timestamps are strictly increasing.
pub fn is_time_ordered(points: &[ChartPoint]) -> bool {
    points.windows(2).all(|w| w[0].timestamp < w[1].timestamp)
}

/// Just the values, in order, for plotting.
pub fn values(points: &[ChartPoint]) -> Vec<f64> {
    points.iter().map(|p| p.value).collect()
}
