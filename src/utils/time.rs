//! Time utilities: parsing exported timestamps, formatting hours.

use chrono::{DateTime, NaiveDateTime};

/// Layouts seen in Baby Tracker exports (and in files re-saved by spreadsheets).
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%y, %I:%M %p",
    "%m/%d/%Y, %I:%M %p",
    "%m/%d/%Y %I:%M %p",
];

/// Parse a timestamp, keeping the wall-clock value as written.
/// Offsets (RFC 3339) are dropped after reading, no conversion happens.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%:z") {
        return Some(dt.naive_local());
    }

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// `1.25` → `"01:15"`; NaN and negative values keep a readable form.
pub fn hours2readable(hours: f64) -> String {
    if !hours.is_finite() {
        return "--:--".to_string();
    }
    let mins = (hours * 60.0).round() as i64;
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_iso_layouts() {
        let a = parse_timestamp("2025-03-01 08:15:00").unwrap();
        let b = parse_timestamp("2025-03-01T08:15").unwrap();
        let c = parse_timestamp("2025-03-01 08:15").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn parses_us_app_layout() {
        let ts = parse_timestamp("3/1/25, 7:05 PM").unwrap();
        assert_eq!(ts.hour(), 19);
        assert_eq!(ts.minute(), 5);
    }

    #[test]
    fn keeps_wall_clock_of_offset_timestamps() {
        let ts = parse_timestamp("2025-03-01T08:15:00+02:00").unwrap();
        assert_eq!(ts.hour(), 8);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn readable_hours() {
        assert_eq!(hours2readable(1.25), "01:15");
        assert_eq!(hours2readable(-0.5), "-00:30");
        assert_eq!(hours2readable(f64::NAN), "--:--");
    }
}
