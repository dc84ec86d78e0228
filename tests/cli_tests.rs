use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{bs, temp_path};

#[test]
fn test_report_chicago_all() {
    bs().args(["report", "--city", "chicago"])
        .assert()
        .success()
        .stdout(contains("7 trips match Chicago"))
        .stdout(contains("Most common month: June (4 trips)"))
        .stdout(contains("Most common day of week: Monday"))
        .stdout(contains("Most common start hour: 17:00"))
        .stdout(contains("Most common Start Station: Streeter Dr & Grand Ave"))
        .stdout(contains(
            "Most common trip: Streeter Dr & Grand Ave to Lake Shore Dr & Monroe St",
        ))
        .stdout(contains(
            "Total travel time is : 1 hours, 1 minutes, and 1 seconds",
        ))
        .stdout(contains("Most common birth year: 1990"))
        .stdout(contains("This took"));
}

#[test]
fn test_report_washington_marks_demographics_unavailable() {
    bs().args(["report", "--city", "washington"])
        .assert()
        .success()
        .stdout(contains("Mean travel time is : 1 minutes, and 30.5 seconds"))
        .stdout(contains("User type counts:"))
        .stdout(contains("Gender data is not available in the dataset."))
        .stdout(contains("Birth Year data is not available in the dataset."));
}

#[test]
fn test_report_with_no_matching_rows_prints_no_data() {
    bs().args(["report", "--city", "chicago", "--day", "friday"])
        .assert()
        .success()
        .stdout(contains("0 trips match"))
        .stdout(contains("No data available for the selected filters."))
        .stdout(contains("NaN").not());
}

#[test]
fn test_report_json() {
    let output = bs()
        .args([
            "report", "--city", "new_york_city", "--month", "April", "--json",
        ])
        .output()
        .expect("run bikeshare");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["filter"]["city"], "new_york_city");
    assert_eq!(json["filter"]["month"], "April");
    assert_eq!(json["trips"], 2);
    assert_eq!(json["time"]["hour"]["value"], 10);
    assert_eq!(json["durations"]["total_secs"], 900.0);
    assert_eq!(json["users"]["genders"]["status"], "available");
    assert_eq!(json["users"]["birth_years"]["status"], "no_data");
}

#[test]
fn test_report_json_empty_selection_has_null_sections() {
    let output = bs()
        .args(["report", "--city", "washington", "--month", "june", "--json"])
        .output()
        .expect("run bikeshare");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert!(json["time"].is_null());
    assert!(json["durations"].is_null());
    assert_eq!(json["users"]["genders"]["status"], "unavailable");
}

#[test]
fn test_invalid_city_argument_is_rejected() {
    bs().args(["report", "--city", "boston"])
        .assert()
        .failure()
        .stderr(contains("Invalid city"));
}

#[test]
fn test_missing_source_fails_with_clear_message() {
    let empty_dir = std::env::temp_dir().join("bikeshare_no_data_here");
    fs::create_dir_all(&empty_dir).ok();

    bs().args(["--data-dir", empty_dir.to_str().unwrap()])
        .args(["report", "--city", "chicago"])
        .assert()
        .failure()
        .stderr(contains("Cannot read data source"));
}

#[test]
fn test_rows_pages() {
    bs().args(["rows", "--city", "chicago"])
        .assert()
        .success()
        .stdout(contains("Start Station"))
        .stdout(contains("2017-06-05 17:10:00"))
        .stdout(contains("2017-06-10 12:00:00").not());

    bs().args(["rows", "--city", "chicago", "--page", "2"])
        .assert()
        .success()
        .stdout(contains("2017-06-10 12:00:00"))
        .stdout(contains("You've reached the end of the data."));

    bs().args(["rows", "--city", "chicago", "--page", "3"])
        .assert()
        .success()
        .stdout(contains("past the end of the data (7 rows)"));
}

#[test]
fn test_rows_washington_has_no_gender_column() {
    bs().args(["rows", "--city", "washington"])
        .assert()
        .success()
        .stdout(contains("Lincoln Memorial"))
        .stdout(contains("Gender").not());
}

#[test]
fn test_explore_session_reports_and_browses() {
    bs().arg("explore")
        .write_stdin("Chicago\nall\nall\nyes\nyes\nno\n")
        .assert()
        .success()
        .stdout(contains("Hello! Let's explore some US bikeshare data!"))
        .stdout(contains("Calculating The Most Frequent Times of Travel..."))
        .stdout(contains("Calculating User Stats..."))
        .stdout(contains("2017-02-13 17:45:00"))
        .stdout(contains("You've reached the end of the data."))
        .stdout(contains("Would you like to restart?"));
}

#[test]
fn test_explore_reprompts_and_restarts() {
    bs().write_stdin("paris\nwashington\nall\nmonday\nperhaps\nno\nyes\nchicago\njune\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Invalid input. Please enter a valid city name."))
        .stdout(contains("Invalid input. Please enter 'yes' or 'no'."))
        .stdout(contains("0 trips match Washington"))
        .stdout(contains("4 trips match Chicago"));
}

#[test]
fn test_explore_load_failure_aborts_only_the_pass() {
    let empty_dir = std::env::temp_dir().join("bikeshare_no_data_explore");
    fs::create_dir_all(&empty_dir).ok();

    bs().args(["--data-dir", empty_dir.to_str().unwrap(), "explore"])
        .write_stdin("chicago\nall\nall\nno\n")
        .assert()
        .success()
        .stderr(contains("Could not load data for Chicago"))
        .stdout(contains("Would you like to restart?"));
}

#[test]
fn test_init_and_print_config() {
    let conf = temp_path("init_config", "conf");
    let conf_str = conf.to_str().unwrap();

    bs().args(["--config", conf_str, "--data-dir", "/srv/bikeshare", "init"])
        .assert()
        .success()
        .stdout(contains("Config file"));

    let content = fs::read_to_string(&conf).expect("config written");
    assert!(content.contains("data_dir: /srv/bikeshare"));
    assert!(content.contains("page_size: 5"));

    bs().args(["--config", conf_str, "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    bs().args(["--config", conf_str, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("trip_separator"))
        .stdout(contains("washington.csv"));
}

#[test]
fn test_config_page_size_changes_browser() {
    let conf = temp_path("page_size_config", "conf");
    fs::write(&conf, "page_size: 3\ntrip_separator: \" => \"\n").unwrap();

    bs().args(["--config", conf.to_str().unwrap(), "report", "--city", "chicago"])
        .assert()
        .success()
        .stdout(contains(
            "Most common trip: Streeter Dr & Grand Ave => Lake Shore Dr & Monroe St",
        ));

    bs().args(["--config", conf.to_str().unwrap(), "rows", "--city", "chicago", "--page", "3"])
        .assert()
        .success()
        .stdout(contains("2017-02-13 17:45:00"))
        .stdout(contains("You've reached the end of the data."));
}

#[test]
fn test_invalid_config_is_an_error() {
    let conf = temp_path("bad_config", "conf");
    fs::write(&conf, "page_size: 0\n").unwrap();

    bs().args(["--config", conf.to_str().unwrap(), "report", "--city", "chicago"])
        .assert()
        .failure()
        .stderr(contains("page_size must be at least 1"));
}

#[cfg(unix)]
#[test]
fn test_config_edit_fails_when_no_editor_works() {
    let conf = temp_path("edit_fails_config", "conf");
    fs::write(&conf, "page_size: 5\n").unwrap();

    bs().env("EDITOR", "false")
        .env_remove("VISUAL")
        .args([
            "--config",
            conf.to_str().unwrap(),
            "config",
            "--edit",
            "--editor",
            "definitely-not-an-editor",
        ])
        .assert()
        .failure()
        .stdout(contains("falling back to 'false'"))
        .stderr(contains("Failed to edit configuration file using fallback 'false'"));
}

#[cfg(unix)]
#[test]
fn test_config_edit_with_working_editor() {
    let conf = temp_path("edit_ok_config", "conf");
    fs::write(&conf, "page_size: 5\n").unwrap();

    bs().args(["--config", conf.to_str().unwrap(), "config", "--edit", "--editor", "true"])
        .assert()
        .success()
        .stdout(contains("edited successfully using 'true'"));
}

#[test]
fn test_config_edit_requires_existing_file() {
    let conf = temp_path("edit_missing_config", "conf");

    bs().args(["--config", conf.to_str().unwrap(), "config", "--edit", "--editor", "true"])
        .assert()
        .failure()
        .stderr(contains("run `bikeshare init` first"));
}
