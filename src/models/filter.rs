use super::{city::City, period::DayFilter, period::MonthFilter};
use serde::Serialize;
use std::fmt;

/// The (city, month, day) triple narrowing which trips are analysed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Filter {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl Filter {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// Whole city, no narrowing.
    pub fn city(city: City) -> Self {
        Self::new(city, MonthFilter::All, DayFilter::All)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | month: {} | day: {}", self.city, self.month, self.day)
    }
}
