//! Cell-level parsing of dates and monetary amounts.

use chrono::{NaiveDate, NaiveDateTime};

/// Date formats tried, in order, when no formats are configured.
///
/// Month-first wins over day-first for ambiguous cells such as `03/04/2024`,
/// so a US-style export reads every slash date the same way.
pub const DEFAULT_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y",
    "%d/%m/%Y",
];

/// Parses a date cell against each format in turn.
///
/// Formats carrying a time of day are accepted; the time is discarded.
/// Returns `None` when no format matches.
pub fn parse_date<S: AsRef<str>>(raw: &str, formats: &[S]) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    formats.iter().find_map(|fmt| {
        let fmt = fmt.as_ref();
        NaiveDateTime::parse_from_str(raw, fmt)
            .map(|dt| dt.date())
            .or_else(|_| NaiveDate::parse_from_str(raw, fmt))
            .ok()
    })
}

/// Parses a monetary amount cell.
///
/// Currency symbols, whitespace and `,` thousands separators are stripped
/// before parsing. Returns `None` for blank or non-finite values.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '€' | '$' | '£' | ',') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
