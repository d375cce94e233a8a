use chrono::NaiveDate;

/// Game-date formats seen in game-log exports. The stats API writes
/// `APR 13, 2025`; `%b` matches month names case-insensitively.
pub const GAME_DATE_FORMATS: &[&str] = &[
    "%b %d, %Y",
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y-%m-%dT%H:%M:%S",
];

/// Detect the most likely date format from a slice of string values.
/// Returns the format string with the highest parse success rate.
pub fn detect_date_format(values: &[String]) -> Option<&'static str> {
    let sample: Vec<&str> = values
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .take(100)
        .collect();

    if sample.is_empty() {
        return None;
    }

    let mut best_format: Option<&'static str> = None;
    let mut best_score = 0usize;
    for &fmt in GAME_DATE_FORMATS {
        let valid = sample.iter().filter(|s| parse_with(s, fmt).is_some()).count();
        if valid > best_score {
            best_score = valid;
            best_format = Some(fmt);
        }
    }
    best_format
}

fn parse_with(value: &str, format: &str) -> Option<NaiveDate> {
    if format.contains("%H") {
        chrono::NaiveDateTime::parse_from_str(value, format)
            .ok()
            .map(|dt| dt.date())
    } else {
        NaiveDate::parse_from_str(value, format).ok()
    }
}

/// Parse one game date, trying every known format.
pub fn parse_game_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    GAME_DATE_FORMATS.iter().find_map(|fmt| parse_with(value, fmt))
}

/// Row permutation that puts games in chronological order.
/// Returns `None` unless every date parses with the detected format.
pub fn chronological_order(dates: &[String]) -> Option<Vec<usize>> {
    let format = detect_date_format(dates)?;
    let parsed: Option<Vec<NaiveDate>> = dates.iter().map(|d| parse_with(d.trim(), format)).collect();
    let Some(parsed) = parsed else {
        tracing::debug!("Game dates do not all parse as {format}; keeping file order");
        return None;
    };
    let mut order: Vec<usize> = (0..parsed.len()).collect();
    order.sort_by_key(|&i| parsed[i]);
    Some(order)
}
