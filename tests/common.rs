#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Local, NaiveDate, TimeDelta};
use std::env;
use std::fs;
use std::io::{Cursor, Write};
use std::path::PathBuf;
use zip::ZipWriter;
use zip::write::FileOptions;

pub fn bs() -> Command {
    cargo_bin_cmd!("babystats")
}

/// Run the binary against a config path that never exists, so the user's
/// own configuration cannot leak into the tests.
pub fn bs_isolated(name: &str) -> Command {
    let mut cmd = bs();
    let cfg = temp_out(&format!("{name}_config"), "conf");
    cmd.args(["--config", &cfg]);
    cmd
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_babystats.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Zip `entries` in memory.
pub fn zip_bytes(entries: &[(&str, String)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (name, content) in entries {
        zip.start_file(*name, options).expect("start zip entry");
        zip.write_all(content.as_bytes()).expect("write zip entry");
    }

    zip.finish().expect("finish zip").into_inner()
}

/// Write a zip archive into the temp dir and return its path.
pub fn write_archive(name: &str, entries: &[(&str, String)]) -> String {
    let path = temp_out(name, "zip");
    fs::write(&path, zip_bytes(entries)).expect("write archive");
    path
}

pub fn yesterday() -> NaiveDate {
    Local::now().date_naive() - TimeDelta::days(1)
}

/// `rows` are (HH:MM, duration text); an empty duration means "in progress".
pub fn sleep_csv(day: NaiveDate, rows: &[(&str, &str)]) -> String {
    let mut out = String::from("Time,Duration,Note\n");
    for (hm, duration) in rows {
        out.push_str(&format!("{} {},{},\n", day.format("%Y-%m-%d"), hm, duration));
    }
    out
}

pub fn feed_csv(day: NaiveDate, times: &[&str]) -> String {
    let mut out = String::from("Time,Note\n");
    for hm in times {
        out.push_str(&format!("{} {},\n", day.format("%Y-%m-%d"), hm));
    }
    out
}

/// Two daytime naps (08:00 and 10:00, one hour each) plus small feeding files.
pub fn two_nap_archive(name: &str) -> String {
    let day = yesterday();
    write_archive(
        name,
        &[
            (
                "Baby_sleep.csv",
                sleep_csv(day, &[("08:00", "1 hr"), ("10:00", "1 hr")]),
            ),
            ("Baby_nursing.csv", feed_csv(day, &["07:30", "11:30"])),
            ("Baby_pumped.csv", feed_csv(day, &["09:15"])),
        ],
    )
}
