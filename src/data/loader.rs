use std::io::Read;
use std::path::Path;

use crate::data::game_log::GameLog;
use crate::error::DataError;

/// Load a game-log CSV export from disk.
pub fn load_game_log(path: &Path) -> Result<GameLog, DataError> {
    let file = std::fs::File::open(path)?;
    let log = read_game_log(file)?;
    tracing::info!("Loaded {} game(s) from {:?}", log.row_count, path);
    Ok(log)
}

/// Read a CSV game log whose first row holds the column names.
pub fn read_game_log<R: Read>(reader: R) -> Result<GameLog, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
    let num_cols = columns.len();

    // Convert to column-major format
    let mut column_data: Vec<Vec<String>> = vec![Vec::new(); num_cols];
    let mut row_count = 0usize;
    for result in reader.records() {
        let record = result?;
        for (col_idx, col_data) in column_data.iter_mut().enumerate() {
            col_data.push(record.get(col_idx).unwrap_or_default().to_string());
        }
        row_count += 1;
    }

    Ok(GameLog { columns, column_data, row_count })
}

/// Extract numeric f64 values from a string column.
/// Returns (values, fraction_valid) where invalid entries become NaN.
pub fn column_to_f64(data: &[String]) -> (Vec<f64>, f64) {
    let mut values = Vec::with_capacity(data.len());
    let mut valid = 0usize;
    for s in data {
        match s.trim().parse::<f64>() {
            Ok(v) => {
                values.push(v);
                if v.is_finite() { valid += 1; }
            }
            Err(_) => values.push(f64::NAN),
        }
    }
    let frac = if data.is_empty() { 0.0 } else { valid as f64 / data.len() as f64 };
    (values, frac)
}
