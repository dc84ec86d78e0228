//! Filter selector: asks for city, month and day until each is valid.

use crate::errors::AppResult;
use crate::models::{City, DayFilter, Filter, MonthFilter};
use crate::ui::prompt::Prompter;
use std::io::{BufRead, Write};

pub const CITY_QUESTION: &str = "Please enter a city name (Chicago, New York City, Washington): ";
pub const MONTH_QUESTION: &str =
    "Please enter a month (January, February, ... , June) or 'all' for all months: ";
pub const DAY_QUESTION: &str =
    "Please enter a day of the week (Monday, Tuesday, ... , Sunday) or 'all' for all days: ";

pub fn select_city<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> AppResult<City> {
    p.ask_until(
        CITY_QUESTION,
        "Invalid input. Please enter a valid city name.",
        City::from_input,
    )
}

pub fn select_month<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> AppResult<MonthFilter> {
    p.ask_until(
        MONTH_QUESTION,
        "Invalid input. Please enter a valid month or 'all'.",
        MonthFilter::from_input,
    )
}

pub fn select_day<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> AppResult<DayFilter> {
    p.ask_until(
        DAY_QUESTION,
        "Invalid input. Please enter a valid day or 'all'.",
        DayFilter::from_input,
    )
}

/// Resolve the full (city, month, day) triple. Invalid answers re-prompt;
/// only a closed input ends the selection with an error.
pub fn select_filter<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> AppResult<Filter> {
    let city = select_city(p)?;
    let month = select_month(p)?;
    let day = select_day(p)?;
    Ok(Filter::new(city, month, day))
}
