use super::period::{DayFilter, MonthFilter};
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

/// One row of bike-share usage data, with the temporal columns derived from
/// `start_time` at load time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub start_station: String,
    pub end_station: String,
    pub duration_secs: f64,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    pub month: u32,       // 1..=12
    pub weekday: Weekday, // Monday=0 .. Sunday=6
    pub hour: u32,        // 0..=23
}

impl Trip {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_time: NaiveDateTime,
        end_time: Option<NaiveDateTime>,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
        duration_secs: f64,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        Self {
            start_time,
            end_time,
            start_station: start_station.into(),
            end_station: end_station.into(),
            duration_secs,
            user_type,
            gender,
            birth_year,
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
        }
    }

    /// Day of week as a number, Monday=0 .. Sunday=6.
    pub fn day_index(&self) -> u32 {
        self.weekday.num_days_from_monday()
    }
}

/// Optional columns present in the source header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub has_end_time: bool,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Schema {
    /// Chicago and New York City files carry every column.
    pub fn full() -> Self {
        Self {
            has_end_time: true,
            has_gender: true,
            has_birth_year: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripTable {
    pub schema: Schema,
    pub trips: Vec<Trip>,
}

impl TripTable {
    pub fn new(schema: Schema, trips: Vec<Trip>) -> Self {
        Self { schema, trips }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    /// Return a new table keeping only trips matching both selections.
    /// `self` is left untouched.
    pub fn filter(&self, month: MonthFilter, day: DayFilter) -> TripTable {
        let trips = self
            .trips
            .iter()
            .filter(|t| month.matches(t.month) && day.matches(t.weekday))
            .cloned()
            .collect();

        TripTable {
            schema: self.schema,
            trips,
        }
    }
}
