// src/export/model.rs

use crate::models::records::{FeedRecord, SleepRecord};
use crate::utils::time::format_timestamp;
use serde::Serialize;

/// Flat sleep row for CSV / JSON; `dt_hours` is empty / null on the first session.
#[derive(Serialize, Clone, Debug)]
pub struct SleepExport {
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Duration")]
    pub duration_hours: f64,
    pub sleep_end: String,
    pub dt_hours: Option<f64>,
    pub daytime: bool,
}

impl From<&SleepRecord> for SleepExport {
    fn from(r: &SleepRecord) -> Self {
        Self {
            time: format_timestamp(&r.time),
            duration_hours: r.duration_hours(),
            sleep_end: format_timestamp(&r.sleep_end),
            dt_hours: r.dt_hours,
            daytime: r.daytime,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct FeedExport {
    #[serde(rename = "Time")]
    pub time: String,
    pub feed_type: &'static str,
    pub daytime: bool,
}

impl From<&FeedRecord> for FeedExport {
    fn from(r: &FeedRecord) -> Self {
        Self {
            time: format_timestamp(&r.time),
            feed_type: r.feed_type.as_str(),
            daytime: r.daytime,
        }
    }
}

pub fn sleep_rows(records: &[SleepRecord]) -> Vec<SleepExport> {
    records.iter().map(SleepExport::from).collect()
}

pub fn feed_rows(records: &[FeedRecord]) -> Vec<FeedExport> {
    records.iter().map(FeedExport::from).collect()
}
