use crate::models::TripTable;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoursMinutesSeconds {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MinutesSeconds {
    pub minutes: u64,
    pub seconds: f64,
}

/// Total and mean travel time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DurationStats {
    pub trips: usize,
    pub total_secs: f64,
    pub total: HoursMinutesSeconds,
    pub mean_secs: f64,
    /// Mean is reported without an hours component.
    pub mean: MinutesSeconds,
}

/// 3661 → 1h 1m 1s. Expects a non-negative, finite input.
pub fn split_hours(total_secs: f64) -> HoursMinutesSeconds {
    let hours = total_secs.div_euclid(3600.0);
    let rem = total_secs.rem_euclid(3600.0);
    HoursMinutesSeconds {
        hours: hours as u64,
        minutes: rem.div_euclid(60.0) as u64,
        seconds: rem.rem_euclid(60.0),
    }
}

/// 90.5 → 1m 30.5s
pub fn split_minutes(secs: f64) -> MinutesSeconds {
    MinutesSeconds {
        minutes: secs.div_euclid(60.0) as u64,
        seconds: secs.rem_euclid(60.0),
    }
}

pub fn compute(table: &TripTable) -> Option<DurationStats> {
    if table.is_empty() {
        return None;
    }

    let trips = table.len();
    let total_secs: f64 = table.iter().map(|t| t.duration_secs).sum();
    let mean_secs = total_secs / trips as f64;

    Some(DurationStats {
        trips,
        total_secs,
        total: split_hours(total_secs),
        mean_secs,
        mean: split_minutes(mean_secs),
    })
}
