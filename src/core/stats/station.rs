use super::mode::{Top, mode};
use crate::models::TripTable;
use serde::Serialize;

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStats {
    pub start: Top<String>,
    pub end: Top<String>,
    /// "<start><separator><end>"
    pub trip: Top<String>,
}

pub fn compute(table: &TripTable, separator: &str) -> Option<StationStats> {
    let start = mode(table.iter().map(|t| t.start_station.as_str()))?;
    let end = mode(table.iter().map(|t| t.end_station.as_str()))?;
    let trip = mode(
        table
            .iter()
            .map(|t| format!("{}{}{}", t.start_station, separator, t.end_station)),
    )?;

    Some(StationStats {
        start: owned(start),
        end: owned(end),
        trip,
    })
}

fn owned(top: Top<&str>) -> Top<String> {
    Top {
        value: top.value.to_string(),
        count: top.count,
    }
}
