//! Reads an exported zip bundle and dispatches each entry to the normalizer.

use crate::core::daytime::DayBoundaries;
use crate::core::normalize::normalize_records;
use crate::errors::AppResult;
use crate::models::baby_stats::{BabyStats, LoadedTables};
use crate::models::category::Category;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Folder macOS adds to zips it creates; its `._*` files are not CSV.
const MACOS_METADATA_DIR: &str = "__MACOSX/";

pub fn load_archive<R: Read + Seek>(reader: R, bounds: &DayBoundaries) -> AppResult<BabyStats> {
    let mut archive = ZipArchive::new(reader)?;
    let mut tables = LoadedTables::default();

    for i in 0..archive.len() {
        let entry = archive.by_index(i)?;
        let name = entry.name().to_string();

        if entry.is_dir() || name.starts_with(MACOS_METADATA_DIR) {
            continue;
        }

        let Some(category) = Category::from_file_name(&name)? else {
            tracing::debug!(entry = %name, "skipping archive entry without a known category");
            continue;
        };

        tracing::debug!(entry = %name, %category, "reading archive entry");
        tables.insert(normalize_records(entry, &name, category, bounds)?)?;
    }

    let stats = BabyStats::from_tables(tables)?;
    tracing::info!(
        sleep = stats.sleep().len(),
        nursing = stats.nursing().len(),
        pumped = stats.pumped().len(),
        "archive loaded"
    );
    Ok(stats)
}

pub fn load_archive_bytes(bytes: &[u8], bounds: &DayBoundaries) -> AppResult<BabyStats> {
    load_archive(Cursor::new(bytes), bounds)
}

pub fn load_archive_file(path: &Path, bounds: &DayBoundaries) -> AppResult<BabyStats> {
    let file = File::open(path)?;
    load_archive(BufReader::new(file), bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::models::feed_type::FeedType;
    use std::io::Write;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for (name, content) in entries {
            zip.start_file(*name, options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }

        zip.finish().unwrap().into_inner()
    }

    const SLEEP: &str = "Time,Duration\n2025-03-01 08:00,1 hr\n2025-03-01 10:00,1 hr\n";
    const NURSING: &str = "Time\n2025-03-01 09:00\n2025-03-01 13:00\n";
    const PUMPED: &str = "Time\n2025-03-01 11:00\n";

    #[test]
    fn loads_every_category_and_merges_feeding() {
        let bytes = build_zip(&[
            ("Baby_sleep.csv", SLEEP),
            ("Baby_nursing.csv", NURSING),
            ("Baby_pumped.csv", PUMPED),
            ("Baby_diaper.csv", "Time\n2025-03-01 09:00\n"),
        ]);

        let stats = load_archive_bytes(&bytes, &DayBoundaries::default()).unwrap();

        assert_eq!(stats.sleep().len(), 2);
        assert_eq!(stats.all_feeding().len(), 3);
        let kinds: Vec<FeedType> = stats.all_feeding().iter().map(|r| r.feed_type).collect();
        assert_eq!(kinds, [FeedType::Nursing, FeedType::Pumped, FeedType::Nursing]);
    }

    #[test]
    fn skips_directories_and_macos_metadata() {
        let bytes = build_zip(&[
            ("__MACOSX/._Baby_sleep.csv", "\u{0}\u{5}binary"),
            ("export/Baby_sleep.csv", SLEEP),
            ("export/Baby_nursing.csv", NURSING),
            ("export/Baby_pumped.csv", PUMPED),
        ]);

        let stats = load_archive_bytes(&bytes, &DayBoundaries::default()).unwrap();
        assert_eq!(stats.sleep().len(), 2);
    }

    #[test]
    fn missing_category_fails() {
        let bytes = build_zip(&[("Baby_sleep.csv", SLEEP), ("Baby_nursing.csv", NURSING)]);
        let err = load_archive_bytes(&bytes, &DayBoundaries::default()).unwrap_err();
        assert!(matches!(err, AppError::MissingCategory(Category::Pumped)));
    }

    #[test]
    fn corrupt_archive_fails() {
        let err = load_archive_bytes(b"definitely not a zip", &DayBoundaries::default()).unwrap_err();
        assert!(matches!(err, AppError::Archive(_)));
    }
}
