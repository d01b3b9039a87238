//! Duration strings as exported by the app: "1 hr 30 min", "2 hrs", "45 min".

use crate::errors::{AppError, AppResult};
use chrono::TimeDelta;

/// Parse a duration expression into fractional hours.
///
/// Tokens alternate magnitude / unit; `hr` and `hrs` are hours, `min` is minutes.
/// Values of repeated units add up (`"1 hr 1 hr"` → 2.0).
pub fn parse_duration_hours(s: &str) -> AppResult<f64> {
    let tokens: Vec<&str> = s.split_whitespace().collect();

    if tokens.is_empty() {
        return Err(AppError::InvalidDuration("empty duration".to_string()));
    }
    if tokens.len() % 2 != 0 {
        return Err(AppError::InvalidDuration(format!(
            "'{s}' is not a sequence of <number> <unit> pairs"
        )));
    }

    let mut hours = 0.0;
    for pair in tokens.chunks(2) {
        let magnitude: f64 = pair[0]
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite() && *v >= 0.0)
            .ok_or_else(|| AppError::InvalidDuration(format!("'{}' in '{s}' is not a number", pair[0])))?;

        hours += match pair[1] {
            "hr" | "hrs" => magnitude,
            "min" => magnitude / 60.0,
            unit => {
                return Err(AppError::InvalidDuration(format!(
                    "'{unit}' does not match 'hr', 'hrs' or 'min'"
                )));
            }
        };
    }

    Ok(hours)
}

/// Same as [`parse_duration_hours`], as a `TimeDelta` with microsecond precision.
pub fn parse_duration(s: &str) -> AppResult<TimeDelta> {
    let hours = parse_duration_hours(s)?;
    let micros = (hours * 3_600_000_000.0).round();
    if !micros.is_finite() || micros >= i64::MAX as f64 {
        return Err(AppError::InvalidDuration(format!("'{s}' is too long")));
    }
    Ok(TimeDelta::microseconds(micros as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_hours_and_minutes() {
        assert_eq!(parse_duration_hours("1 hr 30 min").unwrap(), 1.5);
        assert_eq!(parse_duration_hours("2 hrs 15 min").unwrap(), 2.25);
        assert_eq!(parse_duration_hours("45 min").unwrap(), 0.75);
        assert_eq!(parse_duration_hours("1 hr").unwrap(), 1.0);
        assert_eq!(parse_duration_hours("1.5 hrs").unwrap(), 1.5);
    }

    #[test]
    fn converts_to_time_delta() {
        assert_eq!(parse_duration("1 hr 5 min").unwrap(), TimeDelta::minutes(65));
        assert_eq!(parse_duration("0 min").unwrap(), TimeDelta::zero());
    }

    #[test]
    fn rejects_durations_beyond_time_delta() {
        assert_eq!(parse_duration_hours("10000000000 hrs").unwrap(), 1e10);
        let err = parse_duration("10000000000 hrs").unwrap_err();
        assert!(matches!(err, AppError::InvalidDuration(msg) if msg.contains("too long")));
        assert!(parse_duration("1e300 hrs").is_err());
    }

    #[test]
    fn rejects_unknown_unit() {
        let err = parse_duration_hours("3 sec").unwrap_err();
        assert!(matches!(err, AppError::InvalidDuration(msg) if msg.contains("sec")));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_duration_hours("").is_err());
        assert!(parse_duration_hours("   ").is_err());
        assert!(parse_duration_hours("1 hr 30").is_err());
        assert!(parse_duration_hours("one hr").is_err());
        assert!(parse_duration_hours("-1 hr").is_err());
    }
}
