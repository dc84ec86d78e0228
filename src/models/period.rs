//! Month and day-of-week selections.
//!
//! The bike-share data only covers January..June, so `Month` is limited to
//! those six. Days use `chrono::Weekday`; its numeric form everywhere in the
//! crate is `num_days_from_monday()` (Monday=0 .. Sunday=6).

use crate::errors::AppError;
use chrono::Weekday;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// Calendar month number (January = 1).
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    pub fn name(&self) -> &'static str {
        month_name(self.number()).unwrap_or("")
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Full English name of a calendar month number (1..=12).
pub fn month_name(number: u32) -> Option<&'static str> {
    u8::try_from(number)
        .ok()
        .and_then(|n| chrono::Month::try_from(n).ok())
        .map(|m| m.name())
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "String")]
pub enum MonthFilter {
    #[default]
    All,
    Only(Month),
}

impl MonthFilter {
    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if s == "all" {
            return Some(MonthFilter::All);
        }
        Month::ALL
            .into_iter()
            .find(|m| m.name().to_lowercase() == s)
            .map(MonthFilter::Only)
    }

    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => m.number() == month,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Only(m) => f.write_str(m.name()),
        }
    }
}

impl From<MonthFilter> for String {
    fn from(value: MonthFilter) -> Self {
        value.to_string()
    }
}

impl FromStr for MonthFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MonthFilter::from_input(s).ok_or_else(|| AppError::InvalidMonth(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "String")]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if s == "all" {
            return Some(DayFilter::All);
        }
        DAYS.into_iter()
            .find(|d| weekday_name(*d).to_lowercase() == s)
            .map(DayFilter::Only)
    }

    pub fn matches(&self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => d.num_days_from_monday() == day.num_days_from_monday(),
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Only(d) => f.write_str(weekday_name(*d)),
        }
    }
}

impl From<DayFilter> for String {
    fn from(value: DayFilter) -> Self {
        value.to_string()
    }
}

impl FromStr for DayFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayFilter::from_input(s).ok_or_else(|| AppError::InvalidDay(s.to_string()))
    }
}
