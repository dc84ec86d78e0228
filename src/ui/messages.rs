use crate::utils::colors::{BLUE, BOLD, GREEN, RED, YELLOW, paint};
use std::fmt;
use std::time::Duration;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn icon(icon: &str, color: &str) -> String {
    paint(icon, &format!("{color}{BOLD}"))
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", icon(ICON_INFO, BLUE), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", icon(ICON_OK, GREEN), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", icon(ICON_WARN, YELLOW), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", icon(ICON_ERR, RED), msg);
}

/// Section title, e.g. "Calculating Trip Duration..."
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{}\n", paint(&msg.to_string(), &format!("{BLUE}{BOLD}")));
}

/// Closes a report section with its elapsed time.
pub fn footer(elapsed: Duration) {
    println!("\nThis took {:.6} seconds.", elapsed.as_secs_f64());
    separator();
}

pub fn separator() {
    println!("{}", "-".repeat(40));
}
