use super::mode::{Top, mode};
use crate::models::TripTable;
use chrono::{Month, Weekday};
use serde::Serialize;

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeStats {
    pub month: Top<Month>,
    pub weekday: Top<Weekday>,
    pub hour: Top<u32>,
}

pub fn compute(table: &TripTable) -> Option<TimeStats> {
    let month = mode(table.iter().map(|t| t.month))?;
    let weekday = mode(table.iter().map(|t| t.weekday))?;
    let hour = mode(table.iter().map(|t| t.hour))?;

    // derived months are always 1..=12
    let calendar = u8::try_from(month.value)
        .ok()
        .and_then(|m| Month::try_from(m).ok())?;

    Some(TimeStats {
        month: Top {
            value: calendar,
            count: month.count,
        },
        weekday,
        hour,
    })
}
