use babystats::errors::AppError;
use babystats::models::category::Category;
use babystats::{
    AnalysisConfig, DayBoundaries, analyze_daytime_sleep_at, load_archive_bytes,
};
use chrono::{NaiveDate, NaiveDateTime};

mod common;
use common::{feed_csv, sleep_csv, zip_bytes};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

fn now() -> NaiveDateTime {
    day().and_hms_opt(18, 0, 0).unwrap()
}

#[test]
fn two_daytime_naps_end_to_end() {
    let bytes = zip_bytes(&[
        (
            "export/Baby_sleep.csv",
            sleep_csv(day(), &[("10:00", "1 hr"), ("08:00", "1 hr")]),
        ),
        ("export/Baby_nursing.csv", feed_csv(day(), &["09:00"])),
        ("export/Baby_pumped.csv", feed_csv(day(), &[])),
    ]);

    let stats = load_archive_bytes(&bytes, &DayBoundaries::default()).unwrap();
    let out = analyze_daytime_sleep_at(stats.sleep(), 1, now(), &AnalysisConfig::default());

    assert_eq!(out.rows.len(), 1);
    assert_eq!(out.rows[0].time, day().and_hms_opt(10, 0, 0).unwrap());
    assert!((out.rows[0].dt_hours.unwrap() - 1.0).abs() < 1e-9);
    assert_eq!(out.summary(), "Mean +/- 95% confidence interval: 1.00 +/- 0.00");
}

#[test]
fn all_feeding_is_union_of_nursing_and_pumped() {
    let bytes = zip_bytes(&[
        ("Baby_sleep.csv", sleep_csv(day(), &[])),
        ("Baby_nursing.csv", feed_csv(day(), &["12:00", "06:00", "22:00"])),
        ("Baby_pumped.csv", feed_csv(day(), &["09:00", "03:00"])),
    ]);

    let stats = load_archive_bytes(&bytes, &DayBoundaries::default()).unwrap();
    let merged = stats.all_feeding();

    assert_eq!(merged.len(), stats.nursing().len() + stats.pumped().len());
    assert!(merged.windows(2).all(|w| w[0].time <= w[1].time));
    assert!(stats.nursing().windows(2).all(|w| w[0].time <= w[1].time));
}

#[test]
fn analysis_is_repeatable() {
    let bytes = zip_bytes(&[
        (
            "Baby_sleep.csv",
            sleep_csv(
                day(),
                &[("08:00", "45 min"), ("10:30", "1 hr 15 min"), ("14:00", "2 hrs")],
            ),
        ),
        ("Baby_nursing.csv", feed_csv(day(), &[])),
        ("Baby_pumped.csv", feed_csv(day(), &[])),
    ]);

    let stats = load_archive_bytes(&bytes, &DayBoundaries::default()).unwrap();
    let cfg = AnalysisConfig::default();

    let first = analyze_daytime_sleep_at(stats.sleep(), 2, now(), &cfg);
    let second = analyze_daytime_sleep_at(stats.sleep(), 2, now(), &cfg);

    assert_eq!(first, second);
    // gaps: 10:30 - 08:45 = 1.75, 14:00 - 11:45 = 2.25
    assert_eq!(first.dt_hours(), vec![1.75, 2.25]);
}

#[test]
fn ambiguous_file_name_is_rejected() {
    let bytes = zip_bytes(&[
        ("sleep_and_nursing.csv", feed_csv(day(), &[])),
        ("Baby_pumped.csv", feed_csv(day(), &[])),
    ]);

    let err = load_archive_bytes(&bytes, &DayBoundaries::default()).unwrap_err();
    assert!(matches!(err, AppError::AmbiguousCategory(_)));
}

#[test]
fn second_file_for_same_category_is_rejected() {
    let bytes = zip_bytes(&[
        ("a_pumped.csv", feed_csv(day(), &[])),
        ("b_pumped.csv", feed_csv(day(), &[])),
    ]);

    let err = load_archive_bytes(&bytes, &DayBoundaries::default()).unwrap_err();
    assert!(matches!(err, AppError::DuplicateCategory(Category::Pumped)));
}
