use crate::data::datetime::chronological_order;
use crate::data::loader::column_to_f64;
use crate::error::DataError;
use crate::state::observation_series::ObservationSeries;
use crate::state::stat_catalog::StatCode;

pub const GAME_DATE_COLUMN: &str = "GAME_DATE";

/// One player's per-game table: column names and column data as strings.
#[derive(Debug, Clone, Default)]
pub struct GameLog {
    pub columns: Vec<String>,
    pub column_data: Vec<Vec<String>>, // column-major: column_data[col_idx][row_idx]
    pub row_count: usize,
}

impl GameLog {
    /// Cells of the column named `name` (case-insensitive).
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.columns
            .iter()
            .position(|c| c.trim().eq_ignore_ascii_case(name))
            .and_then(|i| self.column_data.get(i))
            .map(|c| c.as_slice())
    }

    /// Observation series for `stat`, oldest game first when the log has
    /// usable game dates. Non-numeric cells are dropped.
    pub fn stat_series(&self, stat: StatCode, season: &str) -> Result<ObservationSeries, DataError> {
        if self.row_count == 0 {
            return Err(DataError::NoRows);
        }
        let cells = self
            .column(stat.code())
            .ok_or_else(|| DataError::MissingColumn(stat.code().to_string()))?;
        let (mut values, frac_valid) = column_to_f64(cells);
        if frac_valid < 1.0 {
            tracing::warn!(
                "{:.0}% of {} cells are not numeric",
                (1.0 - frac_valid) * 100.0,
                stat.code()
            );
        }

        if let Some(order) = self.column(GAME_DATE_COLUMN).and_then(chronological_order) {
            values = order.into_iter().map(|i| values[i]).collect();
        }

        Ok(ObservationSeries::new(season, stat, values))
    }
}
