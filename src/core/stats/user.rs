use super::Stat;
use super::mode::{Top, mode, value_counts};
use crate::models::TripTable;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// User demographics. Blank cells are skipped in every count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub user_types: Stat<Vec<Top<String>>>,
    pub genders: Stat<Vec<Top<String>>>,
    pub birth_years: Stat<BirthYearStats>,
}

fn counts_or_no_data(counts: Vec<Top<&str>>) -> Stat<Vec<Top<String>>> {
    if counts.is_empty() {
        return Stat::NoData;
    }
    Stat::Available(
        counts
            .into_iter()
            .map(|t| Top {
                value: t.value.to_string(),
                count: t.count,
            })
            .collect(),
    )
}

pub fn compute(table: &TripTable) -> UserStats {
    let user_types = counts_or_no_data(value_counts(
        table.iter().filter_map(|t| t.user_type.as_deref()),
    ));

    // column presence comes from the schema, not from the row count
    let genders = if table.schema.has_gender {
        counts_or_no_data(value_counts(
            table.iter().filter_map(|t| t.gender.as_deref()),
        ))
    } else {
        Stat::Unavailable
    };

    let birth_years = if table.schema.has_birth_year {
        birth_year_stats(table)
    } else {
        Stat::Unavailable
    };

    UserStats {
        user_types,
        genders,
        birth_years,
    }
}

fn birth_year_stats(table: &TripTable) -> Stat<BirthYearStats> {
    let years = || table.iter().filter_map(|t| t.birth_year);

    match (years().min(), years().max(), mode(years())) {
        (Some(earliest), Some(most_recent), Some(common)) => Stat::Available(BirthYearStats {
            earliest,
            most_recent,
            most_common: common.value,
        }),
        _ => Stat::NoData,
    }
}
