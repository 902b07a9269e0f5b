//! Command implementations for the bike rental dashboard CLI.
//!
//! Each subcommand loads the record sets, resolves the date interval and
//! runs the aggregation pipeline once.

use bike_rental::date_range::DateRange;
use bike_rental::loader::Datasets;
use bike_utils::dates::parse_record_date;
use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod export;
pub mod heatmap;
pub mod summary;

/// Record set locations and the date interval to filter on.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Path to the daily records CSV (may be gzipped, ending in .gz)
    #[arg(short = 'd', long)]
    pub day_csv: PathBuf,

    /// Path to the hourly records CSV (may be gzipped, ending in .gz)
    #[arg(short = 'H', long)]
    pub hour_csv: PathBuf,

    /// First day to include (YYYY-MM-DD); defaults to the earliest daily record
    #[arg(long, value_parser = parse_cli_date)]
    pub start: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD); defaults to the latest daily record
    #[arg(long, value_parser = parse_cli_date)]
    pub end: Option<NaiveDate>,
}

impl DataArgs {
    pub fn load(&self) -> anyhow::Result<Datasets> {
        Ok(Datasets::load(&self.day_csv, &self.hour_csv)?)
    }
}

/// User class selector for the heatmap command.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassArg {
    Casual,
    Registered,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print headline rental metrics and the season/weather breakdown
    Summary {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Write every chart summary for the interval as JSON
    Export {
        #[command(flatten)]
        data: DataArgs,

        /// Output path for the dashboard JSON
        #[arg(short = 'o', long)]
        output: PathBuf,
    },

    /// Print the default date interval covered by the daily records
    Span {
        /// Path to the daily records CSV (may be gzipped, ending in .gz)
        #[arg(short = 'd', long)]
        day_csv: PathBuf,
    },

    /// Print the weekday x hour rental grid for one user class
    Heatmap {
        #[command(flatten)]
        data: DataArgs,

        /// Which user class to pivot
        #[arg(short = 'c', long, value_enum, default_value_t = ClassArg::Casual)]
        class: ClassArg,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { data } => summary::run_summary(&data),
        Command::Export { data, output } => export::run_export(&data, &output),
        Command::Span { day_csv } => summary::run_span(&day_csv),
        Command::Heatmap { data, class } => heatmap::run_heatmap(&data, class),
    }
}

fn parse_cli_date(value: &str) -> Result<NaiveDate, String> {
    parse_record_date(value).ok_or_else(|| format!("'{}' is not a date of the form YYYY-MM-DD", value))
}

/// Fill missing bounds from the full span of the daily records.
///
/// Fails only when a bound is missing and there is no daily data to take
/// it from. An inverted interval is passed through unchanged.
pub fn resolve_range(
    datasets: &Datasets,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> anyhow::Result<DateRange> {
    if let (Some(start), Some(end)) = (start, end) {
        return Ok(DateRange(start, end));
    }
    let Some(full) = datasets.full_range() else {
        anyhow::bail!("The daily record set is empty; pass both --start and --end");
    };
    Ok(DateRange(
        start.unwrap_or(full.start()),
        end.unwrap_or(full.end()),
    ))
}
