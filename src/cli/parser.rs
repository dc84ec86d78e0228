use crate::models::{City, DayFilter, Filter, MonthFilter};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for bikeshare
/// Explore US bike-share trip data for Chicago, New York City and Washington
#[derive(Parser)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bike-share data: busiest times, popular stations, trip durations and user stats",
    long_about = None,
    args_override_self = true
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the directory holding the city CSV files
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Defaults to the interactive session
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// City, month and day given on the command line.
#[derive(Args, Clone, Debug)]
pub struct FilterArgs {
    /// City: chicago, "new york city" (or new_york_city), washington
    #[arg(long)]
    pub city: City,

    /// Month: all, january .. june
    #[arg(long, default_value = "all")]
    pub month: MonthFilter,

    /// Day of week: all, monday .. sunday
    #[arg(long, default_value = "all")]
    pub day: DayFilter,
}

impl FilterArgs {
    pub fn to_filter(&self) -> Filter {
        Filter::new(self.city, self.month, self.day)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive session: choose filters, read the statistics, browse raw rows
    Explore,

    /// Print every statistic for a filter without prompting
    Report {
        #[command(flatten)]
        filter: FilterArgs,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one page of raw trip rows
    Rows {
        #[command(flatten)]
        filter: FilterArgs,

        /// Page number, starting at 1
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        page: u64,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show or edit the configuration file
    Config {
        /// Print the active configuration
        #[arg(long = "print", help = "Print the active configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL)
        #[arg(long = "editor", requires = "edit_config")]
        editor: Option<String>,
    },
}
