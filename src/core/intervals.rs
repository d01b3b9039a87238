//! Reconstruction of sleep end times and of the gaps between sessions.

use crate::errors::{AppError, AppResult};
use crate::models::records::{RawSleepRow, SleepRecord};
use chrono::{NaiveDateTime, TimeDelta};

/// Derive `sleep_end` and `dt_hours` for rows already sorted by start time.
///
/// In-progress sessions (no duration) are dropped first, so they never
/// seed the gap of the following session. Fails when a session would end
/// past the last representable timestamp.
pub fn derive_sleep_intervals(rows: Vec<RawSleepRow>) -> AppResult<Vec<SleepRecord>> {
    let mut out = Vec::with_capacity(rows.len());
    let mut previous_end: Option<NaiveDateTime> = None;

    for row in rows {
        let Some(duration) = row.duration else {
            continue;
        };

        let sleep_end = row.time.checked_add_signed(duration).ok_or_else(|| {
            AppError::InvalidDuration(format!("session starting {} ends out of range", row.time))
        })?;
        let dt_hours = previous_end.map(|end| delta_hours(row.time - end));

        out.push(SleepRecord {
            time: row.time,
            duration,
            sleep_end,
            dt_hours,
            daytime: row.daytime,
        });

        previous_end = Some(sleep_end);
    }

    Ok(out)
}

fn delta_hours(delta: TimeDelta) -> f64 {
    delta.num_milliseconds() as f64 / 3_600_000.0
}
