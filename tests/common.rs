#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bikeshare::config::Config;
use bikeshare::core::loader;
use bikeshare::models::{City, Schema, Trip, TripTable};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, pointed at the fixture data and at a config path that
/// does not exist, so the user's own configuration never leaks in.
pub fn bs() -> Command {
    let mut cmd = cargo_bin_cmd!("bikeshare");
    cmd.env("NO_COLOR", "1")
        .arg("--config")
        .arg(temp_path("no_such_config", "conf"))
        .arg("--data-dir")
        .arg(data_dir());
    cmd
}

pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
}

pub fn fixture_config() -> Config {
    Config {
        data_dir: data_dir().to_string_lossy().to_string(),
        ..Config::default()
    }
}

/// Full, unfiltered fixture table for `city`.
pub fn fixture(city: City) -> TripTable {
    loader::load_table(&fixture_config().source_for(city)).expect("load fixture")
}

/// Unique path inside the system temp dir, removed if it already exists
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bikeshare.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Write `content` to a fresh temp file and return its path
pub fn write_temp_csv(name: &str, content: &str) -> PathBuf {
    let path = temp_path(name, "csv");
    fs::write(&path, content).expect("write temp csv");
    path
}

/// Trip starting at `ts` ("YYYY-MM-DD HH:MM:SS") with no demographics
pub fn trip(ts: &str, start: &str, end: &str, secs: f64) -> Trip {
    let start_time = loader::parse_timestamp(ts).expect("valid timestamp");
    Trip::new(
        start_time,
        None,
        start,
        end,
        secs,
        Some("Subscriber".to_string()),
        None,
        None,
    )
}

pub fn table(trips: Vec<Trip>) -> TripTable {
    TripTable::new(Schema::full(), trips)
}
