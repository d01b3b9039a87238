//! Turns one exported CSV file into a canonical, time-sorted table.

use crate::core::daytime::{DayBoundaries, is_daytime};
use crate::core::duration::parse_duration;
use crate::core::intervals::derive_sleep_intervals;
use crate::errors::{AppError, AppResult};
use crate::models::baby_stats::CategoryTable;
use crate::models::category::Category;
use crate::models::feed_type::FeedType;
use crate::models::records::{FeedRecord, RawSleepRow};
use crate::utils::time::parse_timestamp;
use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;

pub const TIME_COLUMN: &str = "Time";
pub const DURATION_COLUMN: &str = "Duration";

/// Normalize the CSV content of `file_name` for the given category.
///
/// Fails on the first row whose time (or, for sleep, non-empty duration)
/// cannot be parsed; rows are never dropped silently.
pub fn normalize_records<R: Read>(
    reader: R,
    file_name: &str,
    category: Category,
    bounds: &DayBoundaries,
) -> AppResult<CategoryTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let time_idx = column_index(&headers, TIME_COLUMN, file_name)?;

    let table = match category {
        Category::Sleep => {
            let duration_idx = column_index(&headers, DURATION_COLUMN, file_name)?;
            let mut rows = Vec::new();

            for (i, record) in rdr.records().enumerate() {
                let record = record?;
                let row = i + 1;
                let time = row_time(&record, time_idx, row)?;
                // an empty cell is a nap in progress; a missing cell is a truncated row
                let cell = record.get(duration_idx).ok_or_else(|| AppError::MissingValue {
                    row,
                    column: DURATION_COLUMN.to_string(),
                })?;
                let duration = match cell {
                    "" => None,
                    text => {
                        let duration = parse_duration(text).map_err(|e| with_row(e, row))?;
                        if time.checked_add_signed(duration).is_none() {
                            return Err(AppError::InvalidDuration(format!(
                                "row {row}: '{text}' ends out of the supported date range"
                            )));
                        }
                        Some(duration)
                    }
                };

                rows.push(RawSleepRow {
                    time,
                    daytime: is_daytime(&time, bounds),
                    duration,
                });
            }

            rows.sort_by_key(|r| r.time);
            CategoryTable::Sleep(derive_sleep_intervals(rows)?)
        }
        Category::Nursing | Category::Pumped => {
            let feed_type = match category {
                Category::Nursing => FeedType::Nursing,
                _ => FeedType::Pumped,
            };
            let mut rows = Vec::new();

            for (i, record) in rdr.records().enumerate() {
                let time = row_time(&record?, time_idx, i + 1)?;
                rows.push(FeedRecord {
                    time,
                    feed_type,
                    daytime: is_daytime(&time, bounds),
                });
            }

            rows.sort_by_key(|r| r.time);
            match feed_type {
                FeedType::Nursing => CategoryTable::Nursing(rows),
                FeedType::Pumped => CategoryTable::Pumped(rows),
            }
        }
    };

    if table.is_empty() {
        tracing::warn!(file = file_name, %category, "no records in file");
    }
    tracing::debug!(file = file_name, %category, rows = table.len(), "normalized records");
    Ok(table)
}

/// Position of `name` in the header row; tolerates a UTF-8 BOM on the first column.
fn column_index(headers: &StringRecord, name: &str, file_name: &str) -> AppResult<usize> {
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}') == name)
        .ok_or_else(|| AppError::MissingColumn {
            file: file_name.to_string(),
            column: name.to_string(),
        })
}

fn row_time(record: &StringRecord, idx: usize, row: usize) -> AppResult<NaiveDateTime> {
    let value = record.get(idx).unwrap_or_default();
    parse_timestamp(value).ok_or_else(|| AppError::InvalidTimestamp {
        row,
        value: value.to_string(),
    })
}

fn with_row(err: AppError, row: usize) -> AppError {
    match err {
        AppError::InvalidDuration(msg) => AppError::InvalidDuration(format!("row {row}: {msg}")),
        other => other,
    }
}
