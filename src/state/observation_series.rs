use serde::{Deserialize, Serialize};

use crate::state::stat_catalog::StatCode;

/// Per-game values of one statistic for one player-season, in game order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationSeries {
    pub season: String,
    pub stat: StatCode,
    values: Vec<f64>,
}

impl ObservationSeries {
    /// Build a series, dropping non-finite values (missing cells in the log).
    pub fn new(season: impl Into<String>, stat: StatCode, values: Vec<f64>) -> Self {
        let total = values.len();
        let values: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        let season = season.into();
        if values.len() < total {
            tracing::debug!(
                "Dropped {} non-finite {} value(s) for {}",
                total - values.len(),
                stat.code(),
                season
            );
        }
        Self { season, stat, values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
