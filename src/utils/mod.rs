pub mod colors;
pub mod formatting;
pub mod table;

pub use formatting::{fmt_count, fmt_seconds};
