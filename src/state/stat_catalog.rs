use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// Per-game box-score statistics a series can be built from.
/// Variants map one-to-one onto game-log column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatCode {
    Points,
    Assists,
    OffensiveRebounds,
    DefensiveRebounds,
    Rebounds,
    Minutes,
    FieldGoalsMade,
    FieldGoalsAttempted,
    FieldGoalPct,
    ThreesMade,
    ThreesAttempted,
    ThreePct,
    FreeThrowsMade,
    FreeThrowsAttempted,
    FreeThrowPct,
    Steals,
    Blocks,
    Turnovers,
    PersonalFouls,
    PlusMinus,
}

impl StatCode {
    pub const ALL: [StatCode; 20] = [
        StatCode::Points,
        StatCode::Assists,
        StatCode::OffensiveRebounds,
        StatCode::DefensiveRebounds,
        StatCode::Rebounds,
        StatCode::Minutes,
        StatCode::FieldGoalsMade,
        StatCode::FieldGoalsAttempted,
        StatCode::FieldGoalPct,
        StatCode::ThreesMade,
        StatCode::ThreesAttempted,
        StatCode::ThreePct,
        StatCode::FreeThrowsMade,
        StatCode::FreeThrowsAttempted,
        StatCode::FreeThrowPct,
        StatCode::Steals,
        StatCode::Blocks,
        StatCode::Turnovers,
        StatCode::PersonalFouls,
        StatCode::PlusMinus,
    ];

    /// Game-log column name.
    pub fn code(&self) -> &'static str {
        match self {
            StatCode::Points => "PTS",
            StatCode::Assists => "AST",
            StatCode::OffensiveRebounds => "OREB",
            StatCode::DefensiveRebounds => "DREB",
            StatCode::Rebounds => "REB",
            StatCode::Minutes => "MIN",
            StatCode::FieldGoalsMade => "FGM",
            StatCode::FieldGoalsAttempted => "FGA",
            StatCode::FieldGoalPct => "FG_PCT",
            StatCode::ThreesMade => "FG3M",
            StatCode::ThreesAttempted => "FG3A",
            StatCode::ThreePct => "FG3_PCT",
            StatCode::FreeThrowsMade => "FTM",
            StatCode::FreeThrowsAttempted => "FTA",
            StatCode::FreeThrowPct => "FT_PCT",
            StatCode::Steals => "STL",
            StatCode::Blocks => "BLK",
            StatCode::Turnovers => "TOV",
            StatCode::PersonalFouls => "PF",
            StatCode::PlusMinus => "PLUS_MINUS",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatCode::Points => "Points",
            StatCode::Assists => "Assists",
            StatCode::OffensiveRebounds => "Offensive Rebounds",
            StatCode::DefensiveRebounds => "Defensive Rebounds",
            StatCode::Rebounds => "Total Rebounds",
            StatCode::Minutes => "Minutes",
            StatCode::FieldGoalsMade => "Field Goals Made",
            StatCode::FieldGoalsAttempted => "Field Goals Attempted",
            StatCode::FieldGoalPct => "Field Goal Percentage",
            StatCode::ThreesMade => "3-Point Field Goals Made",
            StatCode::ThreesAttempted => "3-Point Field Goals Attempted",
            StatCode::ThreePct => "3-Point Field Goal Percentage",
            StatCode::FreeThrowsMade => "Free Throws Made",
            StatCode::FreeThrowsAttempted => "Free Throws Attempted",
            StatCode::FreeThrowPct => "Free Throw Percentage",
            StatCode::Steals => "Steals",
            StatCode::Blocks => "Blocks",
            StatCode::Turnovers => "Turnovers",
            StatCode::PersonalFouls => "Personal Fouls",
            StatCode::PlusMinus => "Plus/Minus",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL.into_iter().find(|s| s.code().eq_ignore_ascii_case(code))
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|s| s.label().eq_ignore_ascii_case(label))
    }
}

impl Default for StatCode {
    fn default() -> Self {
        StatCode::Points
    }
}

impl fmt::Display for StatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts either the column code (`FG3M`) or the readable label.
impl FromStr for StatCode {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
            .or_else(|| Self::from_label(s))
            .ok_or_else(|| DataError::UnknownStat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_labels_are_unique() {
        let mut codes: Vec<_> = StatCode::ALL.iter().map(|s| s.code()).collect();
        let mut labels: Vec<_> = StatCode::ALL.iter().map(|s| s.label()).collect();
        codes.sort();
        codes.dedup();
        labels.sort();
        labels.dedup();
        assert_eq!(codes.len(), 20);
        assert_eq!(labels.len(), 20);
    }

    #[test]
    fn parses_code_or_label() {
        assert_eq!("PTS".parse::<StatCode>().unwrap(), StatCode::Points);
        assert_eq!("fg3_pct".parse::<StatCode>().unwrap(), StatCode::ThreePct);
        assert_eq!("Plus/Minus".parse::<StatCode>().unwrap(), StatCode::PlusMinus);
        assert_eq!(" total rebounds ".parse::<StatCode>().unwrap(), StatCode::Rebounds);
    }

    #[test]
    fn unknown_stat_is_an_error() {
        let err = "DUNKS".parse::<StatCode>().unwrap_err();
        assert!(matches!(err, DataError::UnknownStat(s) if s == "DUNKS"));
    }
}
