use crate::config::Config;
use crate::core::loader;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::Filter;
use crate::models::report::Report;
use crate::ui::messages::{footer, header, info};
use crate::ui::report;
use std::time::Duration;

fn section(title: &str, elapsed: Duration, body: impl FnOnce()) {
    header(title);
    body();
    footer(elapsed);
}

/// Render the four sections of `r`, in the order they were computed.
pub fn print_sections(r: &Report) {
    section(
        "Calculating The Most Frequent Times of Travel...",
        r.timings.time,
        || report::print_time(r.time.as_ref()),
    );
    section(
        "Calculating The Most Popular Stations and Trip...",
        r.timings.stations,
        || report::print_stations(r.stations.as_ref()),
    );
    section("Calculating Trip Duration...", r.timings.durations, || {
        report::print_durations(r.durations.as_ref())
    });
    section("Calculating User Stats...", r.timings.users, || {
        report::print_users(&r.users)
    });
}

/// Handle the `report` subcommand
pub fn handle(filter: Filter, json: bool, cfg: &Config) -> AppResult<()> {
    let table = loader::load(cfg, &filter)?;
    let report = Core::build_report(filter, &table, cfg);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    info(format!("{} trips match {}", report.trips, filter));
    print_sections(&report);
    Ok(())
}
