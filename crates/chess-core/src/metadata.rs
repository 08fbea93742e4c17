//! Header normalization for dataset records.
//!
//! Archive PGNs mark unknown fields with placeholder tokens ("?", "??",
//! "????.??.??"). Each field normalizes on its own; a broken year never
//! invalidates a good month.

/// Full month name for a zero-padded PGN month token.
pub fn month_name(token: &str) -> Option<&'static str> {
    match token {
        "01" => Some("January"),
        "02" => Some("February"),
        "03" => Some("March"),
        "04" => Some("April"),
        "05" => Some("May"),
        "06" => Some("June"),
        "07" => Some("July"),
        "08" => Some("August"),
        "09" => Some("September"),
        "10" => Some("October"),
        "11" => Some("November"),
        "12" => Some("December"),
        _ => None,
    }
}

/// Year from a "YYYY.MM.DD" date tag. 0 when missing or non-numeric.
pub fn year_of(date: Option<&str>) -> i32 {
    date.and_then(|d| d.split('.').next())
        .and_then(|y| y.trim().parse().ok())
        .unwrap_or(0)
}

/// Month name from the date tag. None when the token is a placeholder
/// ("??") or out of range.
pub fn month_of(date: Option<&str>) -> Option<&'static str> {
    let date = date?;
    let token = date.split('.').nth(1)?;
    month_name(token)
}

/// Round label. Placeholder tokens collapse to None.
pub fn round_of(round: Option<&str>) -> Option<String> {
    let trimmed = round.unwrap_or("?").trim();
    match trimmed {
        "?" | "-" | "" | "0" => None,
        other => Some(other.to_string()),
    }
}

/// Elo rating string. Missing, empty, or literal "?" collapse to the
/// "?" unknown sentinel.
pub fn elo_of(elo: Option<&str>) -> String {
    match elo {
        Some(e) if !e.is_empty() && e != "?" => e.to_string(),
        _ => "?".to_string(),
    }
}

/// Tournament name from the Event tag. Missing or empty is "Unknown".
pub fn tournament_of(event: Option<&str>) -> String {
    match event {
        Some(e) if !e.is_empty() => e.to_string(),
        _ => "Unknown".to_string(),
    }
}
