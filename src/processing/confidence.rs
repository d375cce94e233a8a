use serde::{Deserialize, Serialize};

use crate::error::StatsError;
use crate::processing::distribution::student_t_quantile;
use crate::processing::statistics::{mean, round_to, sample_std_dev};
use crate::state::observation_series::ObservationSeries;

/// When and how to build a confidence interval for the mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidencePolicy {
    /// Two-sided confidence level in (0, 1).
    pub level: f64,
    /// Series shorter than this get `NotApplicable` instead of an interval.
    pub min_sample_size: usize,
    /// Decimal places for the rounded bounds.
    pub decimals: u32,
}

impl Default for ConfidencePolicy {
    fn default() -> Self {
        Self {
            level: 0.95,
            min_sample_size: 20,
            decimals: 1,
        }
    }
}

/// Student-t interval for the population mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub level: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub degrees_of_freedom: usize,
    pub critical_value: f64,
    pub margin: f64,
    pub lower: f64,
    pub upper: f64,
    pub rounded_lower: f64,
    pub rounded_upper: f64,
}

impl ConfidenceInterval {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ConfidenceOutcome {
    Interval(ConfidenceInterval),
    /// Too few games for the configured policy; no number is reported.
    NotApplicable { count: usize, required: usize },
}

impl ConfidenceOutcome {
    pub fn interval(&self) -> Option<&ConfidenceInterval> {
        match self {
            ConfidenceOutcome::Interval(ci) => Some(ci),
            ConfidenceOutcome::NotApplicable { .. } => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, ConfidenceOutcome::Interval(_))
    }
}

/// Two-sided t interval for the mean of `series`.
///
/// Fails on an empty series or one with a single observation (no degrees of
/// freedom). Otherwise a series below `policy.min_sample_size` yields
/// `NotApplicable`.
pub fn confidence_interval(
    series: &ObservationSeries,
    policy: &ConfidencePolicy,
) -> Result<ConfidenceOutcome, StatsError> {
    if !(policy.level > 0.0 && policy.level < 1.0) {
        return Err(StatsError::InvalidConfidenceLevel(policy.level));
    }

    let values = series.values();
    let count = values.len();
    if count == 0 {
        return Err(StatsError::InsufficientData);
    }
    if count < 2 {
        return Err(StatsError::DegenerateSample { count });
    }
    if count < policy.min_sample_size {
        tracing::debug!(
            "Skipping {} interval: {} game(s), policy requires {}",
            series.stat.code(),
            count,
            policy.min_sample_size
        );
        return Ok(ConfidenceOutcome::NotApplicable {
            count,
            required: policy.min_sample_size,
        });
    }

    let degrees_of_freedom = count - 1;
    let alpha = 1.0 - policy.level;
    let critical_value = student_t_quantile(1.0 - alpha / 2.0, degrees_of_freedom as f64)
        .ok_or(StatsError::InvalidConfidenceLevel(policy.level))?;

    let mean = mean(values)?;
    let std_dev = sample_std_dev(values)?;
    let margin = critical_value * std_dev / (count as f64).sqrt();
    let lower = mean - margin;
    let upper = mean + margin;

    Ok(ConfidenceOutcome::Interval(ConfidenceInterval {
        level: policy.level,
        mean,
        std_dev,
        degrees_of_freedom,
        critical_value,
        margin,
        lower,
        upper,
        rounded_lower: round_to(lower, policy.decimals),
        rounded_upper: round_to(upper, policy.decimals),
    }))
}
