//! CSV loading for the daily and hourly rental record sets.
//!
//! Both sources must carry a header row. Columns are matched by name and
//! extra columns are ignored.
//!
//! # CSV Formats
//!
//! - **Daily**: `date,season,weathersit,casual_users,registered_users[,user_counts]`
//! - **Hourly**: `date,weekday,hour,casual_users,registered_users`
//!
//! A load is all-or-nothing: the first bad row fails the whole source.

use crate::category::{Season, WeatherSituation, Weekday};
use crate::date_range::DateRange;
use crate::error::{DataLoadError, Result};
use crate::record::{RentalRecordDaily, RentalRecordHourly};
use bike_utils::dates::parse_record_date;
use chrono::{Datelike, NaiveDate};
use flate2::read::GzDecoder;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct DailyRow {
    date: String,
    season: String,
    #[serde(alias = "weather_situation")]
    weathersit: String,
    casual_users: u32,
    registered_users: u32,
    #[serde(default)]
    user_counts: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct HourlyRow {
    date: String,
    #[serde(default)]
    weekday: Option<String>,
    hour: u32,
    casual_users: u32,
    registered_users: u32,
}

/// The two immutable record sets backing one dashboard session.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub daily: Vec<RentalRecordDaily>,
    pub hourly: Vec<RentalRecordHourly>,
}

impl Datasets {
    /// Load both record sets from files. Paths ending in `.gz` are gunzipped.
    pub fn load(day_path: &Path, hour_path: &Path) -> Result<Self> {
        let daily = load_daily(day_path)?;
        let hourly = load_hourly(hour_path)?;
        Ok(Self { daily, hourly })
    }

    /// Build both record sets from in-memory CSV text.
    pub fn from_csv(day_csv: &str, hour_csv: &str) -> Result<Self> {
        Ok(Self {
            daily: parse_daily_csv(day_csv)?,
            hourly: parse_hourly_csv(hour_csv)?,
        })
    }

    /// The default filter interval: earliest through latest daily record.
    /// `None` when there are no daily records.
    pub fn full_range(&self) -> Option<DateRange> {
        full_range(&self.daily)
    }
}

/// Earliest through latest date of a daily record set.
pub fn full_range(daily: &[RentalRecordDaily]) -> Option<DateRange> {
    let start = daily.iter().map(|r| r.date).min()?;
    let end = daily.iter().map(|r| r.date).max()?;
    Some(DateRange(start, end))
}

pub fn load_daily(path: &Path) -> Result<Vec<RentalRecordDaily>> {
    let csv_data = read_source(path)?;
    let records = parse_daily_csv(&csv_data)?;
    log::info!("Loaded {} daily records from {}", records.len(), path.display());
    Ok(records)
}

pub fn load_hourly(path: &Path) -> Result<Vec<RentalRecordHourly>> {
    let csv_data = read_source(path)?;
    let records = parse_hourly_csv(&csv_data)?;
    log::info!("Loaded {} hourly records from {}", records.len(), path.display());
    Ok(records)
}

/// Read a source file to a string, decompressing gzip when the path ends in `.gz`.
pub fn read_source(path: &Path) -> Result<String> {
    let io_error = |source: std::io::Error| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::open(path).map_err(io_error)?;
    let mut contents = String::new();
    if path.extension().is_some_and(|ext| ext == "gz") {
        GzDecoder::new(file)
            .read_to_string(&mut contents)
            .map_err(io_error)?;
    } else {
        file.read_to_string(&mut contents).map_err(io_error)?;
    }
    Ok(contents)
}

fn parse_date(row: usize, value: &str) -> Result<NaiveDate> {
    parse_record_date(value).ok_or_else(|| DataLoadError::DateParse {
        row,
        value: value.to_string(),
    })
}

fn invalid_category(row: usize, field: &'static str, value: &str) -> DataLoadError {
    DataLoadError::InvalidCategory {
        row,
        field,
        value: value.to_string(),
    }
}

fn reader(csv_data: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes())
}

/// Parse daily records from CSV text.
///
/// `row` numbers in errors count data rows from 1, not counting the header.
pub fn parse_daily_csv(csv_data: &str) -> Result<Vec<RentalRecordDaily>> {
    let mut rdr = reader(csv_data);
    let mut records = Vec::new();
    for (index, result) in rdr.deserialize::<DailyRow>().enumerate() {
        let row = index + 1;
        let r = result?;
        let date = parse_date(row, &r.date)?;
        let season =
            Season::parse(&r.season).ok_or_else(|| invalid_category(row, "season", &r.season))?;
        let weather_situation = WeatherSituation::parse(&r.weathersit)
            .ok_or_else(|| invalid_category(row, "weathersit", &r.weathersit))?;
        let record = RentalRecordDaily {
            date,
            season,
            weather_situation,
            casual_users: r.casual_users,
            registered_users: r.registered_users,
        };
        if let Some(stored) = r.user_counts {
            if u64::from(stored) != record.total_users() {
                return Err(DataLoadError::CountMismatch {
                    row,
                    casual: r.casual_users,
                    registered: r.registered_users,
                    stored,
                });
            }
        }
        records.push(record);
    }
    log::debug!("Parsed {} daily rows", records.len());
    Ok(records)
}

/// Parse hourly records from CSV text.
///
/// An empty or missing `weekday` is derived from the date.
pub fn parse_hourly_csv(csv_data: &str) -> Result<Vec<RentalRecordHourly>> {
    let mut rdr = reader(csv_data);
    let mut records = Vec::new();
    for (index, result) in rdr.deserialize::<HourlyRow>().enumerate() {
        let row = index + 1;
        let r = result?;
        let date = parse_date(row, &r.date)?;
        let weekday = match r.weekday.as_deref() {
            Some(value) if !value.is_empty() => {
                Weekday::parse(value).ok_or_else(|| invalid_category(row, "weekday", value))?
            }
            _ => Weekday::from(date.weekday()),
        };
        let hour = match u8::try_from(r.hour) {
            Ok(hour) if hour <= 23 => hour,
            _ => return Err(DataLoadError::InvalidHour { row, value: r.hour }),
        };
        records.push(RentalRecordHourly {
            date,
            weekday,
            hour,
            casual_users: r.casual_users,
            registered_users: r.registered_users,
        });
    }
    log::debug!("Parsed {} hourly rows", records.len());
    Ok(records)
}
