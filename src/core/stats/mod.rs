//! Stateless reporters over a filtered `TripTable`.
//!
//! Each reporter either returns a value or says explicitly why it cannot:
//! `None` / `Stat::NoData` for an empty selection, `Stat::Unavailable` when
//! the source file has no such column.

pub mod duration;
pub mod mode;
pub mod station;
pub mod time;
pub mod user;

use serde::Serialize;

pub use mode::{Top, mode, value_counts};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Stat<T> {
    Available(T),
    /// Column exists but the selection has no values for it.
    NoData,
    /// Column is absent from the source file.
    Unavailable,
}

impl<T> Stat<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, Stat::Available(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Stat::Available(v) => Some(v),
            _ => None,
        }
    }
}
