mod common;
use bikeshare::core::loader::{self, parse_timestamp};
use bikeshare::errors::AppError;
use bikeshare::models::{City, DayFilter, Filter, Month, MonthFilter, Schema};
use chrono::Weekday;
use common::{fixture, fixture_config, temp_path, write_temp_csv};

#[test]
fn test_load_chicago_full_schema_and_derived_columns() {
    let table = fixture(City::Chicago);

    assert_eq!(table.len(), 7);
    assert_eq!(table.schema, Schema::full());

    let first = &table.trips[0];
    assert_eq!(first.month, 6);
    assert_eq!(first.weekday, Weekday::Mon);
    assert_eq!(first.day_index(), 0);
    assert_eq!(first.hour, 17);
    assert_eq!(first.duration_secs, 600.0);
    assert_eq!(first.gender.as_deref(), Some("Male"));
    assert_eq!(first.birth_year, Some(1990));
    assert!(first.end_time.is_some());

    // blank cells become None
    let customer = &table.trips[2];
    assert_eq!(customer.gender, None);
    assert_eq!(customer.birth_year, None);
    assert_eq!(customer.day_index(), 1);
}

#[test]
fn test_load_washington_has_no_demographic_columns() {
    let table = fixture(City::Washington);

    assert_eq!(table.len(), 2);
    assert!(!table.schema.has_gender);
    assert!(!table.schema.has_birth_year);
    assert!(table.schema.has_end_time);
    assert_eq!(table.trips[0].duration_secs, 90.5);
}

#[test]
fn test_month_filter_keeps_only_that_month() {
    let cfg = fixture_config();
    let filter = Filter::new(City::Chicago, MonthFilter::Only(Month::June), DayFilter::All);
    let table = loader::load(&cfg, &filter).unwrap();

    assert_eq!(table.len(), 4);
    assert!(table.iter().all(|t| t.month == 6));
}

#[test]
fn test_day_filter_uses_monday_zero() {
    let cfg = fixture_config();
    let filter = Filter::new(City::Chicago, MonthFilter::All, DayFilter::Only(Weekday::Mon));
    let table = loader::load(&cfg, &filter).unwrap();

    assert_eq!(table.len(), 4);
    assert!(table.iter().all(|t| t.day_index() == 0));
}

#[test]
fn test_month_and_day_filters_are_conjunctive() {
    let cfg = fixture_config();
    let filter = Filter::new(
        City::Chicago,
        MonthFilter::Only(Month::June),
        DayFilter::Only(Weekday::Mon),
    );
    let table = loader::load(&cfg, &filter).unwrap();

    assert_eq!(table.len(), 2);
    assert!(table.iter().all(|t| t.month == 6 && t.weekday == Weekday::Mon));
}

#[test]
fn test_filter_with_no_match_yields_empty_table() {
    let cfg = fixture_config();
    let filter = Filter::new(City::Chicago, MonthFilter::All, DayFilter::Only(Weekday::Fri));
    let table = loader::load(&cfg, &filter).unwrap();

    assert!(table.is_empty());
    assert_eq!(table.schema, Schema::full());
}

#[test]
fn test_filter_is_idempotent_and_leaves_source_untouched() {
    let full = fixture(City::Chicago);
    let month = MonthFilter::Only(Month::June);
    let day = DayFilter::Only(Weekday::Mon);

    let once = full.filter(month, day);
    let twice = once.filter(month, day);

    assert_eq!(once, twice);
    assert_eq!(full.len(), 7);
}

#[test]
fn test_every_month_and_day_combination_matches() {
    let full = fixture(City::Chicago);

    for m in Month::ALL {
        for d in bikeshare::models::period::DAYS {
            let narrowed = full.filter(MonthFilter::Only(m), DayFilter::Only(d));
            assert!(
                narrowed
                    .iter()
                    .all(|t| t.month == m.number() && t.weekday == d)
            );
        }
    }
}

#[test]
fn test_missing_file_is_a_data_source_error() {
    let path = temp_path("missing_source", "csv");
    let err = loader::load_table(&path).unwrap_err();
    assert!(matches!(err, AppError::DataSource { .. }));
}

#[test]
fn test_missing_required_column_is_reported() {
    let path = write_temp_csv(
        "missing_column",
        "Start Time,Start Station,End Station,User Type\n2017-01-01 00:00:00,A,B,Subscriber\n",
    );
    let err = loader::load_table(&path).unwrap_err();

    match err {
        AppError::MissingColumn { column, .. } => assert_eq!(column, "Trip Duration"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_bad_timestamp_fails_the_whole_load() {
    let path = write_temp_csv(
        "bad_timestamp",
        "Start Time,Trip Duration,Start Station,End Station,User Type\n\
         2017-01-01 00:00:00,10,A,B,Subscriber\n\
         yesterday,10,A,B,Subscriber\n",
    );
    let err = loader::load_table(&path).unwrap_err();

    match err {
        AppError::MalformedRecord { line, reason, .. } => {
            assert_eq!(line, 3);
            assert!(reason.contains("yesterday"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_negative_duration_is_malformed() {
    let path = write_temp_csv(
        "negative_duration",
        "Start Time,Trip Duration,Start Station,End Station,User Type\n\
         2017-01-01 00:00:00,-5,A,B,Subscriber\n",
    );
    let err = loader::load_table(&path).unwrap_err();
    assert!(matches!(err, AppError::MalformedRecord { .. }));
}

#[test]
fn test_blank_birth_years_parse_as_missing() {
    let table = fixture(City::NewYorkCity);

    assert!(table.schema.has_birth_year);
    assert!(table.iter().all(|t| t.birth_year.is_none()));
    assert_eq!(table.trips[2].gender, None);
}

#[test]
fn test_parse_timestamp_formats() {
    assert!(parse_timestamp("2017-06-23 15:09:32").is_some());
    assert!(parse_timestamp("2017-06-23T15:09:32").is_some());
    assert!(parse_timestamp("2017-06-23 15:09:32.123").is_some());
    assert!(parse_timestamp("2017-06-23 15:09").is_some());
    assert!(parse_timestamp("23/06/2017").is_none());
}

#[test]
fn test_read_trips_from_memory_ignores_unknown_columns() {
    let csv = "Trip Id,Start Time,Trip Duration,Start Station,End Station,User Type,Bike\n\
               7,2017-05-01 23:59:59, 120 ,Union Station,Capitol Hill,,B123\n";
    let table =
        loader::read_trips(csv.as_bytes(), std::path::Path::new("memory.csv")).unwrap();

    assert_eq!(table.len(), 1);
    assert!(!table.schema.has_end_time);
    let t = &table.trips[0];
    assert_eq!(t.hour, 23);
    assert_eq!(t.duration_secs, 120.0);
    assert_eq!(t.user_type, None);
    assert_eq!(t.start_station, "Union Station");
}
