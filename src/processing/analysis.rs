use std::fmt::Write as _;

use serde::Serialize;

use crate::config::EngineConfig;
use crate::error::StatsError;
use crate::processing::confidence::{confidence_interval, ConfidenceOutcome};
use crate::processing::histogram::{histogram, Histogram};
use crate::processing::probability::probability_at_least;
use crate::processing::statistics::{round_to, summarize, Summary};
use crate::state::observation_series::ObservationSeries;
use crate::state::stat_catalog::StatCode;

/// Everything shown for one player/statistic selection.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesAnalysis {
    pub season: String,
    pub stat: StatCode,
    pub summary: Summary,
    pub confidence: ConfidenceOutcome,
    pub histogram: Histogram,
    /// Set when the season has fewer games than the configured warning level.
    pub low_sample: bool,
    #[serde(skip)]
    series: ObservationSeries,
    #[serde(skip)]
    decimals: u32,
}

/// Likelihood of meeting a threshold in a single game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub threshold: f64,
    /// Percentage in [0, 100].
    pub probability: f64,
}

impl Prediction {
    pub fn describe(&self, player: &str, stat: StatCode, decimals: u32) -> String {
        format!(
            "The likelihood of {} getting {} {} or more in a game is {:.*}%.",
            player,
            self.threshold,
            stat.label(),
            decimals as usize,
            round_to(self.probability, decimals)
        )
    }
}

pub fn analyze(series: &ObservationSeries, config: &EngineConfig) -> Result<SeriesAnalysis, StatsError> {
    let summary = summarize(series)?;
    let confidence = match confidence_interval(series, &config.confidence_policy()) {
        Ok(outcome) => outcome,
        // A single game is reported the same way as any sample below the gate.
        Err(StatsError::DegenerateSample { count }) => ConfidenceOutcome::NotApplicable {
            count,
            required: config.min_sample_size.max(2),
        },
        Err(e) => return Err(e),
    };
    let histogram = histogram(series, config.histogram_bins)?;
    let low_sample = summary.count < config.low_sample_warning;

    tracing::debug!(
        "Analyzed {} {} game(s) for {}",
        summary.count,
        series.stat.code(),
        series.season
    );

    Ok(SeriesAnalysis {
        season: series.season.clone(),
        stat: series.stat,
        summary,
        confidence,
        histogram,
        low_sample,
        series: series.clone(),
        decimals: config.display_decimals,
    })
}

impl SeriesAnalysis {
    pub fn series(&self) -> &ObservationSeries {
        &self.series
    }

    pub fn predict(&self, threshold: f64) -> Result<Prediction, StatsError> {
        let probability = probability_at_least(&self.series, threshold)?;
        Ok(Prediction { threshold, probability })
    }

    /// Multi-line plain-text report for `player`.
    pub fn report(&self, player: &str) -> String {
        let stat_label = self.stat.label();
        let mut out = self
            .summary
            .report(&format!("{} - {} ({} Regular Season)", player, stat_label, self.season));

        if self.low_sample {
            let _ = writeln!(out, "  Warning: only {} games in dataset.", self.summary.count);
        }

        match &self.confidence {
            ConfidenceOutcome::Interval(ci) => {
                let _ = writeln!(
                    out,
                    "  Over the next 2-3 games, {} is expected to average between {:.*} and {:.*} {} per game with {}% statistical confidence.",
                    player,
                    self.decimals as usize,
                    ci.rounded_lower,
                    self.decimals as usize,
                    ci.rounded_upper,
                    stat_label.to_lowercase(),
                    round_to(ci.level * 100.0, 2)
                );
            }
            ConfidenceOutcome::NotApplicable { count, required } => {
                let _ = writeln!(
                    out,
                    "  Not enough games for a confidence interval ({} of {} required).",
                    count, required
                );
            }
        }
        out
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }
}
