use crate::error::StatsError;
use crate::state::observation_series::ObservationSeries;

fn check_query(series: &ObservationSeries, threshold: f64) -> Result<&[f64], StatsError> {
    if threshold.is_nan() {
        return Err(StatsError::InvalidThreshold(threshold));
    }
    let values = series.values();
    if values.is_empty() {
        return Err(StatsError::InsufficientData);
    }
    Ok(values)
}

/// Fraction of observations strictly below `threshold`, in [0, 1].
pub fn strict_percentile_rank(series: &ObservationSeries, threshold: f64) -> Result<f64, StatsError> {
    let values = check_query(series, threshold)?;
    let below = values.iter().filter(|&&v| v < threshold).count();
    Ok(below as f64 / values.len() as f64)
}

/// Percentage of games with a value of at least `threshold`.
///
/// Equal to `100 * (1 - strict_percentile_rank)`: a game landing exactly on the
/// threshold counts as meeting it. Counted directly so the extremes come out as
/// exactly 0 and 100.
pub fn probability_at_least(series: &ObservationSeries, threshold: f64) -> Result<f64, StatsError> {
    let values = check_query(series, threshold)?;
    let at_least = values.iter().filter(|&&v| v >= threshold).count();
    Ok(100.0 * at_least as f64 / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::statistics::round_to;
    use crate::state::stat_catalog::StatCode;

    fn reference() -> ObservationSeries {
        ObservationSeries::new("2024-25", StatCode::Points, vec![10.0, 10.0, 20.0, 20.0, 20.0, 30.0])
    }

    #[test]
    fn ties_count_as_success() {
        let s = reference();
        assert_eq!(round_to(probability_at_least(&s, 20.0).unwrap(), 1), 66.7);
        assert!((strict_percentile_rank(&s, 20.0).unwrap() - 2.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn extremes() {
        let s = reference();
        assert_eq!(probability_at_least(&s, 10.0).unwrap(), 100.0);
        assert_eq!(probability_at_least(&s, 0.0).unwrap(), 100.0);
        assert_eq!(probability_at_least(&s, 30.0).unwrap(), 100.0 / 6.0);
        assert_eq!(probability_at_least(&s, 31.0).unwrap(), 0.0);
        assert_eq!(probability_at_least(&s, f64::NEG_INFINITY).unwrap(), 100.0);
        assert_eq!(probability_at_least(&s, f64::INFINITY).unwrap(), 0.0);
    }

    #[test]
    fn fractional_threshold() {
        let s = reference();
        assert_eq!(probability_at_least(&s, 19.5).unwrap(), 400.0 / 6.0);
    }

    #[test]
    fn rejects_nan_and_empty() {
        let s = reference();
        assert!(matches!(probability_at_least(&s, f64::NAN), Err(StatsError::InvalidThreshold(_))));
        let empty = ObservationSeries::new("2024-25", StatCode::Points, vec![]);
        assert_eq!(probability_at_least(&empty, 5.0), Err(StatsError::InsufficientData));
        assert_eq!(strict_percentile_rank(&empty, 5.0), Err(StatsError::InsufficientData));
    }
}
