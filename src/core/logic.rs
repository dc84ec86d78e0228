use crate::config::Config;
use crate::core::stats::{duration, station, time, user};
use crate::models::report::{Report, SectionTimings};
use crate::models::{Filter, TripTable};
use std::time::{Duration, Instant};

pub struct Core;

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

impl Core {
    /// Run the four reporters, in their fixed order, over one filtered table.
    pub fn build_report(filter: Filter, table: &TripTable, cfg: &Config) -> Report {
        let (time, t_time) = timed(|| time::compute(table));
        let (stations, t_stations) = timed(|| station::compute(table, &cfg.trip_separator));
        let (durations, t_durations) = timed(|| duration::compute(table));
        let (users, t_users) = timed(|| user::compute(table));

        Report {
            filter,
            trips: table.len(),
            time,
            stations,
            durations,
            users,
            timings: SectionTimings {
                time: t_time,
                stations: t_stations,
                durations: t_durations,
                users: t_users,
            },
        }
    }
}
