//! Per-game statistics for NBA players: descriptive summary, a Student-t
//! confidence interval for the short-term average, and the empirical chance of
//! reaching a threshold in a single game.

pub mod config;
pub mod data;
pub mod error;
pub mod processing;
pub mod state;

pub use config::EngineConfig;
pub use error::{ConfigError, DataError, StatsError};
pub use processing::analysis::{analyze, Prediction, SeriesAnalysis};
pub use processing::confidence::{confidence_interval, ConfidenceInterval, ConfidenceOutcome, ConfidencePolicy};
pub use processing::probability::{probability_at_least, strict_percentile_rank};
pub use processing::statistics::{summarize, Summary};
pub use state::observation_series::ObservationSeries;
pub use state::stat_catalog::StatCode;
