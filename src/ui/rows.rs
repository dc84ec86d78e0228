//! Raw trip rows as a text table.

use crate::core::browser::Page;
use crate::models::{Schema, Trip};
use crate::utils::colors::{CYAN, paint};
use crate::utils::fmt_seconds;
use crate::utils::table::Table;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn headers(schema: &Schema) -> Vec<&'static str> {
    let mut h = vec!["#", "Start Time"];
    if schema.has_end_time {
        h.push("End Time");
    }
    h.extend(["Trip Duration", "Start Station", "End Station", "User Type"]);
    if schema.has_gender {
        h.push("Gender");
    }
    if schema.has_birth_year {
        h.push("Birth Year");
    }
    h
}

fn row(index: usize, trip: &Trip, schema: &Schema) -> Vec<String> {
    let opt = |v: Option<String>| v.unwrap_or_else(|| "--".to_string());

    let mut r = vec![
        index.to_string(),
        trip.start_time.format(TIME_FORMAT).to_string(),
    ];
    if schema.has_end_time {
        r.push(opt(trip
            .end_time
            .map(|t| t.format(TIME_FORMAT).to_string())));
    }
    r.push(fmt_seconds(trip.duration_secs));
    r.push(trip.start_station.clone());
    r.push(trip.end_station.clone());
    r.push(opt(trip.user_type.clone()));
    if schema.has_gender {
        r.push(opt(trip.gender.clone()));
    }
    if schema.has_birth_year {
        r.push(opt(trip.birth_year.map(|y| y.to_string())));
    }
    r
}

/// Render `trips`, numbering rows from `first_index`.
pub fn render(trips: &[Trip], first_index: usize, schema: &Schema) -> String {
    let mut table = Table::new(headers(schema));
    for (i, trip) in trips.iter().enumerate() {
        table.add_row(row(first_index + i, trip, schema));
    }
    table.render()
}

pub fn print_page(page: &Page<'_>, schema: &Schema) {
    if page.rows.is_empty() {
        println!("(no rows)");
        return;
    }
    let rendered = render(page.rows, page.start, schema);
    let mut lines = rendered.lines();
    if let Some(head) = lines.next() {
        println!("{}", paint(head, CYAN));
    }
    for line in lines {
        println!("{line}");
    }
}
