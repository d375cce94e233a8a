use serde::{Deserialize, Serialize};

use crate::error::StatsError;
use crate::state::observation_series::ObservationSeries;

/// Descriptive statistics for one observation series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

impl Summary {
    /// Compute statistics from raw values, filtering out NaN and infinities.
    pub fn compute(values: &[f64]) -> Result<Self, StatsError> {
        let mut vals: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if vals.is_empty() {
            return Err(StatsError::InsufficientData);
        }

        let count = vals.len();
        let min = vals.iter().copied().fold(f64::INFINITY, f64::min);
        let max = vals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // Summation error can land the mean a hair outside [min, max].
        let mean = (vals.iter().sum::<f64>() / count as f64).clamp(min, max);

        vals.sort_by(|a, b| a.total_cmp(b));
        let median = if count % 2 == 0 {
            (vals[count / 2 - 1] + vals[count / 2]) / 2.0
        } else {
            vals[count / 2]
        };

        Ok(Summary {
            count,
            mean,
            median,
            min,
            max,
            range: max - min,
        })
    }

    /// Format as a multi-line table.
    pub fn report(&self, label: &str) -> String {
        format!(
            "{}:\n  Games Played: {}\n  Mean: {:.1}\n  Median: {:.1}\n  Min: {}\n  Max: {}\n  Range: {}\n",
            label, self.count, self.mean, self.median, self.min, self.max, self.range
        )
    }
}

pub fn summarize(series: &ObservationSeries) -> Result<Summary, StatsError> {
    Summary::compute(series.values())
}

pub fn mean(values: &[f64]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::InsufficientData);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Standard deviation with Bessel's correction (divides by `n - 1`).
pub fn sample_std_dev(values: &[f64]) -> Result<f64, StatsError> {
    let n = values.len();
    if n == 0 {
        return Err(StatsError::InsufficientData);
    }
    if n < 2 {
        return Err(StatsError::DegenerateSample { count: n });
    }
    let m = mean(values)?;
    let ss = values.iter().map(|v| (v - m).powi(2)).sum::<f64>();
    Ok((ss / (n - 1) as f64).sqrt())
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
