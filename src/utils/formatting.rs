//! Formatting utilities used for CLI outputs.

/// Seconds with at most two decimals, trailing zeros dropped: 30.5, 1, 12.25
pub fn fmt_seconds(secs: f64) -> String {
    let s = format!("{:.2}", secs);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// "1 trip" / "3 trips"
pub fn fmt_count(count: usize) -> String {
    if count == 1 {
        "1 trip".to_string()
    } else {
        format!("{count} trips")
    }
}

/// 24h clock hour as "17:00"
pub fn fmt_hour(hour: u32) -> String {
    format!("{:02}:00", hour)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let w = unicode_width::UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}
