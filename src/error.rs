use thiserror::Error;

/// Errors raised by the statistics engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("No data available: the series has no observations")]
    InsufficientData,

    #[error("Sample of {count} observation(s) is too small: at least 2 are needed")]
    DegenerateSample { count: usize },

    #[error("Confidence level must be strictly between 0 and 1, got {0}")]
    InvalidConfidenceLevel(f64),

    #[error("Threshold must be a number, got {0}")]
    InvalidThreshold(f64),

    #[error("Histogram needs at least one bin")]
    InvalidBinCount,
}

/// Errors raised while turning a game-log table into an observation series.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Cannot read game log: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Column not found in game log: {0}")]
    MissingColumn(String),

    #[error("Game log has no rows")]
    NoRows,

    #[error("Unknown statistic: {0}")]
    UnknownStat(String),
}

/// Errors raised while loading or validating the engine configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}
