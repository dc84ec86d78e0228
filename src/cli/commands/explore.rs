use crate::cli::commands::report::print_sections;
use crate::config::Config;
use crate::core::browser::RowBrowser;
use crate::core::logic::Core;
use crate::core::{loader, selector};
use crate::errors::{AppError, AppResult};
use crate::models::TripTable;
use crate::ui::messages::{error, info, separator};
use crate::ui::prompt::{self, Prompter, parse_yes_no};
use crate::ui::rows::print_page;
use std::io::{self, BufRead};
use tracing::warn;

/// Handle the `explore` subcommand (also the default)
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut p = prompt::stdio();
    run_session(&mut p, cfg)
}

/// Filter → load → report → browse, repeated while the user asks to restart.
/// A source that cannot be loaded aborts only the current pass.
///
/// Reports and raw rows go straight to stdout, so the prompter writes there
/// too and only the input side is pluggable.
pub fn run_session<R: BufRead>(p: &mut Prompter<R, io::Stdout>, cfg: &Config) -> AppResult<()> {
    println!("Hello! Let's explore some US bikeshare data!");

    loop {
        let filter = selector::select_filter(p)?;
        separator();

        match loader::load(cfg, &filter) {
            Ok(table) => {
                info(format!("{} trips match {}", table.len(), filter));
                print_sections(&Core::build_report(filter, &table, cfg));
                browse(p, &table, cfg.page_size)?;
            }
            Err(e) => {
                warn!(city = %filter.city, "load failed: {e}");
                error(format!("Could not load data for {}: {}", filter.city, e));
            }
        }

        let again = match p.ask("\nWould you like to restart? Enter yes or no.\n") {
            Ok(answer) => answer,
            Err(AppError::InputClosed) => break,
            Err(e) => return Err(e),
        };
        if parse_yes_no(&again) != Some(true) {
            break;
        }
    }

    Ok(())
}

/// Page through the table on "yes", stop on "no" or at the end.
pub fn browse<R: BufRead>(
    p: &mut Prompter<R, io::Stdout>,
    table: &TripTable,
    page_size: usize,
) -> AppResult<()> {
    let mut browser = RowBrowser::new(&table.trips, page_size);
    let question = format!("Would you like to see {page_size} lines of raw data? Enter yes or no: ");

    while !browser.is_exhausted() {
        if !p.ask_yes_no(&question)? {
            break;
        }
        if let Some(page) = browser.next_page() {
            print_page(&page, &table.schema);
            if page.at_end {
                info("You've reached the end of the data.");
            }
        }
    }

    Ok(())
}
