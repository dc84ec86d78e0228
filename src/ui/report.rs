//! Console rendering of the four statistics sections.

use crate::core::stats::Stat;
use crate::core::stats::Top;
use crate::core::stats::duration::DurationStats;
use crate::core::stats::station::StationStats;
use crate::core::stats::time::TimeStats;
use crate::core::stats::user::{BirthYearStats, UserStats};
use crate::models::period::weekday_name;
use crate::utils::colors::placeholder;
use crate::utils::formatting::{fmt_hour, pad_right};
use crate::utils::{fmt_count, fmt_seconds};
use unicode_width::UnicodeWidthStr;

pub const NO_DATA: &str = "No data available for the selected filters.";

fn no_data() {
    println!("{}", placeholder(NO_DATA));
}

pub fn print_time(stats: Option<&TimeStats>) {
    let Some(s) = stats else {
        return no_data();
    };

    println!(
        "Most common month: {} ({})",
        s.month.value.name(),
        fmt_count(s.month.count)
    );
    println!(
        "Most common day of week: {} ({})",
        weekday_name(s.weekday.value),
        fmt_count(s.weekday.count)
    );
    println!(
        "Most common start hour: {} ({})",
        fmt_hour(s.hour.value),
        fmt_count(s.hour.count)
    );
}

pub fn print_stations(stats: Option<&StationStats>) {
    let Some(s) = stats else {
        return no_data();
    };

    println!(
        "Most common Start Station: {} ({})",
        s.start.value,
        fmt_count(s.start.count)
    );
    println!(
        "Most common End Station: {} ({})",
        s.end.value,
        fmt_count(s.end.count)
    );
    println!(
        "Most common trip: {} ({})",
        s.trip.value,
        fmt_count(s.trip.count)
    );
}

pub fn print_durations(stats: Option<&DurationStats>) {
    let Some(s) = stats else {
        return no_data();
    };

    println!(
        "Total travel time is : {} hours, {} minutes, and {} seconds",
        s.total.hours,
        s.total.minutes,
        fmt_seconds(s.total.seconds)
    );
    println!(
        "Mean travel time is : {} minutes, and {} seconds",
        s.mean.minutes,
        fmt_seconds(s.mean.seconds)
    );
}

fn print_counts(title: &str, label: &str, stat: &Stat<Vec<Top<String>>>) {
    match stat {
        Stat::Available(counts) => {
            println!("{title} counts:");
            let width = counts.iter().map(|c| c.value.width()).max().unwrap_or(0);
            for c in counts {
                println!("  {}  {}", pad_right(&c.value, width), c.count);
            }
        }
        Stat::NoData => println!("{title} counts: {}", placeholder(NO_DATA)),
        Stat::Unavailable => println!("{label} data is not available in the dataset."),
    }
}

fn print_birth_years(stat: &Stat<BirthYearStats>) {
    match stat {
        Stat::Available(b) => {
            println!("Earliest birth year: {}", b.earliest);
            println!("Most recent birth year: {}", b.most_recent);
            println!("Most common birth year: {}", b.most_common);
        }
        Stat::NoData => println!("Birth year: {}", placeholder(NO_DATA)),
        Stat::Unavailable => println!("Birth Year data is not available in the dataset."),
    }
}

pub fn print_users(stats: &UserStats) {
    print_counts("User type", "User Type", &stats.user_types);
    println!();
    print_counts("Gender", "Gender", &stats.genders);
    println!();
    print_birth_years(&stats.birth_years);
}
