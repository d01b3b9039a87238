use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, Timelike};

pub const DEFAULT_MORNING_HOUR: u32 = 7;
pub const DEFAULT_NIGHT_HOUR: u32 = 19;

/// Hour window considered "day": `morning <= hour < night`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBoundaries {
    morning: u32,
    night: u32,
}

impl Default for DayBoundaries {
    fn default() -> Self {
        Self {
            morning: DEFAULT_MORNING_HOUR,
            night: DEFAULT_NIGHT_HOUR,
        }
    }
}

impl DayBoundaries {
    pub fn new(morning: u32, night: u32) -> AppResult<Self> {
        if morning >= night || night > 24 {
            return Err(AppError::Config(format!(
                "invalid day boundaries: morning={morning}, night={night} (need morning < night <= 24)"
            )));
        }
        Ok(Self { morning, night })
    }
}

/// Classify a wall-clock timestamp. No timezone conversion is applied.
pub fn is_daytime(ts: &NaiveDateTime, bounds: &DayBoundaries) -> bool {
    (bounds.morning..bounds.night).contains(&ts.hour())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hm: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("2025-05-10 {hm}"), "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn boundaries_are_exact() {
        let b = DayBoundaries::default();
        assert!(is_daytime(&at("07:00"), &b));
        assert!(!is_daytime(&at("06:59"), &b));
        assert!(is_daytime(&at("18:59"), &b));
        assert!(!is_daytime(&at("19:00"), &b));
        assert!(!is_daytime(&at("00:00"), &b));
    }

    #[test]
    fn custom_boundaries() {
        let b = DayBoundaries::new(6, 20).unwrap();
        assert!(is_daytime(&at("06:00"), &b));
        assert!(is_daytime(&at("19:30"), &b));
        assert!(!is_daytime(&at("20:00"), &b));
    }

    #[test]
    fn rejects_inverted_window() {
        assert!(DayBoundaries::new(19, 7).is_err());
        assert!(DayBoundaries::new(7, 7).is_err());
        assert!(DayBoundaries::new(7, 25).is_err());
        assert!(DayBoundaries::new(0, 24).is_ok());
    }
}
