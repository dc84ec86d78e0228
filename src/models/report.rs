use super::filter::Filter;
use crate::core::stats::duration::DurationStats;
use crate::core::stats::station::StationStats;
use crate::core::stats::time::TimeStats;
use crate::core::stats::user::UserStats;
use serde::Serialize;
use std::time::Duration;

/// Time spent computing each section, shown as "This took ... seconds."
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SectionTimings {
    pub time: Duration,
    pub stations: Duration,
    pub durations: Duration,
    pub users: Duration,
}

/// All statistics for one filter pass. `None` sections had no rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub filter: Filter,
    pub trips: usize,
    pub time: Option<TimeStats>,
    pub stations: Option<StationStats>,
    pub durations: Option<DurationStats>,
    pub users: UserStats,
    #[serde(skip)]
    pub timings: SectionTimings,
}
