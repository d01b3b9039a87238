// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{feed_rows, sleep_rows};
use crate::export::{ExportFormat, TableKind};
use crate::models::baby_stats::BabyStats;
use crate::models::records::SleepRecord;
use serde::Serialize;
use std::path::Path;

/// High-level export of canonical tables.
pub struct ExportLogic;

impl ExportLogic {
    /// Write one canonical table of `stats` to `file`.
    pub fn export_table(
        stats: &BabyStats,
        table: TableKind,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        match table {
            TableKind::Sleep => write_rows(&sleep_rows(stats.sleep()), format, path),
            TableKind::Nursing => write_rows(&feed_rows(stats.nursing()), format, path),
            TableKind::Pumped => write_rows(&feed_rows(stats.pumped()), format, path),
            TableKind::AllFeeding => write_rows(&feed_rows(stats.all_feeding()), format, path),
        }
    }

    /// Write analyzed sleep rows (the filtered table of `analyze`).
    pub fn export_sleep(
        rows: &[SleepRecord],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;
        write_rows(&sleep_rows(rows), format, path)
    }
}

fn write_rows<T: Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
    }
}
