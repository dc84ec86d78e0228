use crate::config::Config;
use crate::core::browser::RowBrowser;
use crate::core::loader;
use crate::errors::AppResult;
use crate::models::Filter;
use crate::ui::messages::{info, warning};
use crate::ui::rows::print_page;

/// Handle the `rows` subcommand: show page `page` (1-based) of raw rows.
pub fn handle(filter: Filter, page: u64, cfg: &Config) -> AppResult<()> {
    let table = loader::load(cfg, &filter)?;
    let mut browser = RowBrowser::new(&table.trips, cfg.page_size);

    let mut current = None;
    for _ in 0..page {
        current = browser.next_page();
        if current.is_none() {
            break;
        }
    }

    match current {
        Some(p) => {
            print_page(&p, &table.schema);
            if p.at_end {
                info("You've reached the end of the data.");
            }
        }
        None => warning(format!(
            "Page {page} is past the end of the data ({} rows).",
            table.len()
        )),
    }

    Ok(())
}
