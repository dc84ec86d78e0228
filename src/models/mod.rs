pub mod city;
pub mod filter;
pub mod period;
pub mod report;
pub mod trip;

pub use city::City;
pub use filter::Filter;
pub use period::{DayFilter, Month, MonthFilter};
pub use trip::{Schema, Trip, TripTable};
