use serde::{Deserialize, Serialize};

use crate::error::StatsError;
use crate::state::observation_series::ObservationSeries;

/// Half-open bin `[lower, upper)`; the last bin of a histogram also holds `upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub bins: Vec<Bin>,
}

impl Histogram {
    /// Number of games across all bins.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Bin holding the most games; the first one wins ties.
    pub fn modal_bin(&self) -> Option<&Bin> {
        self.bins
            .iter()
            .fold(None, |best: Option<&Bin>, b| match best {
                Some(cur) if cur.count >= b.count => Some(cur),
                _ => Some(b),
            })
    }
}

/// Equal-width histogram over [min, max] with `bins` buckets.
///
/// A constant series gets a single unit-wide bin centered on its value.
pub fn histogram(series: &ObservationSeries, bins: usize) -> Result<Histogram, StatsError> {
    if bins == 0 {
        return Err(StatsError::InvalidBinCount);
    }
    let values = series.values();
    if values.is_empty() {
        return Err(StatsError::InsufficientData);
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max <= min {
        return Ok(Histogram {
            bins: vec![Bin {
                lower: min - 0.5,
                upper: min + 0.5,
                count: values.len(),
            }],
        });
    }

    let width = (max - min) / bins as f64;
    let mut out: Vec<Bin> = (0..bins)
        .map(|i| Bin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins { max } else { min + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();

    for &v in values {
        let idx = (((v - min) / width).floor() as usize).min(bins - 1);
        out[idx].count += 1;
    }

    Ok(Histogram { bins: out })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::stat_catalog::StatCode;

    fn series(values: Vec<f64>) -> ObservationSeries {
        ObservationSeries::new("2024-25", StatCode::Points, values)
    }

    #[test]
    fn counts_sum_to_series_length() {
        let s = series(vec![10.0, 10.0, 20.0, 20.0, 20.0, 30.0]);
        let h = histogram(&s, 10).unwrap();
        assert_eq!(h.bins.len(), 10);
        assert_eq!(h.total(), 6);
        assert_eq!(h.bins[0].count, 2);
        assert_eq!(h.bins[5].count, 3);
        assert_eq!(h.bins[9].count, 1);
        assert_eq!(h.bins[9].upper, 30.0);
    }

    #[test]
    fn modal_bin_prefers_first_on_tie() {
        let s = series(vec![0.0, 0.0, 10.0, 10.0]);
        let h = histogram(&s, 2).unwrap();
        assert_eq!(h.modal_bin().unwrap().lower, 0.0);
    }

    #[test]
    fn constant_series_gets_one_bin() {
        let h = histogram(&series(vec![7.0; 4]), 10).unwrap();
        assert_eq!(h.bins, vec![Bin { lower: 6.5, upper: 7.5, count: 4 }]);
    }

    #[test]
    fn rejects_zero_bins_and_empty_series() {
        assert_eq!(histogram(&series(vec![1.0]), 0), Err(StatsError::InvalidBinCount));
        assert_eq!(histogram(&series(vec![]), 10), Err(StatsError::InsufficientData));
    }
}
