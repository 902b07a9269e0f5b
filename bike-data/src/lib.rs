//! Date filtering and aggregation for bike rental records.
//!
//! This crate turns the loaded daily and hourly record sets into the
//! summaries behind each dashboard chart. Every function is pure: inputs
//! are borrowed, outputs are freshly owned.

pub mod dashboard;
pub mod models;
pub mod pivot;

/// Inclusive date range filtering.
pub mod filter {
    use bike_rental::date_range::DateRange;
    use bike_rental::record::Dated;
    use chrono::NaiveDate;

    /// Keep the records whose date falls in `range`, both ends included,
    /// preserving input order.
    ///
    /// An inverted range (start after end) selects nothing.
    pub fn filter_range<T: Dated + Clone>(records: &[T], range: DateRange) -> Vec<T> {
        records
            .iter()
            .filter(|record| range.contains(record.date()))
            .cloned()
            .collect()
    }

    /// Same as [`filter_range`] with the bounds given separately.
    pub fn filter<T: Dated + Clone>(records: &[T], start_date: NaiveDate, end_date: NaiveDate) -> Vec<T> {
        filter_range(records, DateRange(start_date, end_date))
    }

}

/// Daily and category aggregation over daily records.
pub mod aggregate {
    use crate::models::{CategorySummary, DailyUsersSummary};
    use bike_rental::category::{Season, WeatherSituation};
    use bike_rental::date_range::DateRange;
    use bike_rental::record::RentalRecordDaily;
    use chrono::NaiveDate;
    use std::collections::{BTreeMap, BTreeSet};

    /// One summary row per distinct date, ascending by date.
    ///
    /// Dates without records are left out rather than zero-filled.
    pub fn aggregate_daily(records: &[RentalRecordDaily]) -> Vec<DailyUsersSummary> {
        let mut by_date: BTreeMap<NaiveDate, (u64, u64)> = BTreeMap::new();
        for record in records {
            let entry = by_date.entry(record.date).or_default();
            entry.0 += u64::from(record.casual_users);
            entry.1 += u64::from(record.registered_users);
        }
        log::debug!(
            "Aggregated {} daily records into {} days",
            records.len(),
            by_date.len()
        );
        by_date
            .into_iter()
            .map(|(date, (casual, registered))| DailyUsersSummary::new(date, casual, registered))
            .collect()
    }

    /// Total rentals per observed (season, weather) pair, sorted by season
    /// then weather.
    pub fn aggregate_by_category(records: &[RentalRecordDaily]) -> Vec<CategorySummary> {
        let mut groups: BTreeMap<(Season, WeatherSituation), u64> = BTreeMap::new();
        for record in records {
            *groups
                .entry((record.season, record.weather_situation))
                .or_default() += record.total_users();
        }
        log::debug!(
            "Aggregated {} daily records into {} season/weather groups",
            records.len(),
            groups.len()
        );
        groups
            .into_iter()
            .map(|((season, weather_situation), user_counts)| CategorySummary {
                season,
                weather_situation,
                user_counts,
            })
            .collect()
    }

    /// Days in `range` with no daily record, in ascending order.
    ///
    /// These are the gaps the daily line chart skips over.
    pub fn missing_dates(records: &[RentalRecordDaily], range: DateRange) -> Vec<NaiveDate> {
        let present: BTreeSet<NaiveDate> = records.iter().map(|r| r.date).collect();
        range.filter(|date| !present.contains(date)).collect()
    }

}

/// Headline metrics over a daily summary.
pub mod metrics {
    use crate::models::{DailyUsersSummary, UserTotals};

    /// Sum each column of the daily summary.
    pub fn user_totals(daily: &[DailyUsersSummary]) -> UserTotals {
        daily.iter().fold(UserTotals::default(), |totals, row| UserTotals {
            total_casual_users: totals.total_casual_users + row.total_casual_users,
            total_registered_users: totals.total_registered_users + row.total_registered_users,
            total_users: totals.total_users + row.count_users,
        })
    }

}
