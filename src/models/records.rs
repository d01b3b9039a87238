use super::feed_type::FeedType;
use chrono::{NaiveDateTime, TimeDelta};

/// Sleep row as read from the export, before intervals are derived.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSleepRow {
    pub time: NaiveDateTime,
    pub daytime: bool,
    pub duration: Option<TimeDelta>, // None ⇔ nap still in progress
}

/// Canonical sleep session.
#[derive(Debug, Clone, PartialEq)]
pub struct SleepRecord {
    pub time: NaiveDateTime,
    pub duration: TimeDelta,
    pub sleep_end: NaiveDateTime,
    pub dt_hours: Option<f64>, // None on the first session
    pub daytime: bool,
}

impl SleepRecord {
    pub fn duration_hours(&self) -> f64 {
        self.duration.num_milliseconds() as f64 / 3_600_000.0
    }
}

/// Canonical nursing or pumping event.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedRecord {
    pub time: NaiveDateTime,
    pub feed_type: FeedType,
    pub daytime: bool,
}
