//! One full recomputation pass for a chosen date interval.
//!
//! Data flow:
//! 1. Filter the daily and hourly record sets with the same interval.
//! 2. Aggregate the filtered daily records per day and per season/weather.
//! 3. Pivot the filtered hourly records once per user class.
//! 4. Sum the daily summary into the headline metrics.

use crate::aggregate::{aggregate_by_category, aggregate_daily};
use crate::filter::filter_range;
use crate::metrics::user_totals;
use crate::models::{CategorySummary, DailyUsersSummary, UserTotals};
use crate::pivot::{pivot_hourly, HourlyPivot};
use bike_rental::date_range::DateRange;
use bike_rental::loader::Datasets;
use bike_rental::record::UserClass;
use serde::Serialize;

/// Everything the presentation layer needs to draw the dashboard for one
/// interval.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dashboard {
    pub range: DateRange,
    pub totals: UserTotals,
    pub daily: Vec<DailyUsersSummary>,
    pub categories: Vec<CategorySummary>,
    pub casual_heatmap: HourlyPivot,
    pub registered_heatmap: HourlyPivot,
}

impl Dashboard {
    /// Build every chart summary for `range` from the loaded datasets.
    ///
    /// The datasets are only borrowed, so the same loaded data serves any
    /// number of intervals.
    pub fn compute(datasets: &Datasets, range: DateRange) -> Self {
        let day_filtered = filter_range(&datasets.daily, range);
        let hour_filtered = filter_range(&datasets.hourly, range);
        log::info!(
            "Computing dashboard for {} to {}: {} daily and {} hourly records",
            range.start(),
            range.end(),
            day_filtered.len(),
            hour_filtered.len()
        );

        let daily = aggregate_daily(&day_filtered);
        let categories = aggregate_by_category(&day_filtered);
        let casual_heatmap = pivot_hourly(&hour_filtered, UserClass::Casual);
        let registered_heatmap = pivot_hourly(&hour_filtered, UserClass::Registered);
        let totals = user_totals(&daily);

        Self {
            range,
            totals,
            daily,
            categories,
            casual_heatmap,
            registered_heatmap,
        }
    }

    /// True when the interval selected no records at all.
    pub fn is_empty(&self) -> bool {
        self.daily.is_empty()
            && self.categories.is_empty()
            && self.casual_heatmap.is_empty()
            && self.registered_heatmap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bike_rental::category::Weekday;
    use chrono::NaiveDate;

    const DAY_CSV: &str = "\
date,season,weathersit,casual_users,registered_users,user_counts
2024-01-01,Winter,Clear,10,40,50
2024-01-02,Winter,Misty,5,25,30
";

    const HOUR_CSV: &str = "\
date,weekday,hour,casual_users,registered_users
2024-01-01,Mon,8,3,20
2024-01-01,Mon,9,7,20
2024-01-02,Tue,8,5,25
";

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn datasets() -> Datasets {
        Datasets::from_csv(DAY_CSV, HOUR_CSV).unwrap()
    }

    #[test]
    fn full_range_scenario() {
        let data = datasets();
        let range = data.full_range().unwrap();
        let dashboard = Dashboard::compute(&data, range);

        assert_eq!(
            dashboard.daily,
            vec![
                DailyUsersSummary::new(day(1), 10, 40),
                DailyUsersSummary::new(day(2), 5, 25),
            ]
        );
        assert_eq!(dashboard.daily[0].count_users, 50);
        assert_eq!(dashboard.daily[1].count_users, 30);
        assert_eq!(dashboard.totals.total_casual_users, 15);
        assert_eq!(dashboard.totals.total_registered_users, 65);
        assert_eq!(dashboard.totals.total_users, 80);
    }

    #[test]
    fn single_day_scenario() {
        let dashboard = Dashboard::compute(&datasets(), DateRange(day(2), day(2)));
        assert_eq!(dashboard.daily, vec![DailyUsersSummary::new(day(2), 5, 25)]);
        assert_eq!(dashboard.daily[0].count_users, 30);
        assert_eq!(dashboard.categories.len(), 1);
        assert_eq!(dashboard.casual_heatmap.get(Weekday::Tuesday, 8), Some(5));
        assert_eq!(dashboard.casual_heatmap.get(Weekday::Monday, 8), None);
    }

    #[test]
    fn every_row_is_additive() {
        let dashboard = Dashboard::compute(&datasets(), DateRange(day(1), day(2)));
        for row in &dashboard.daily {
            assert_eq!(row.count_users, row.total_casual_users + row.total_registered_users);
        }
    }

    #[test]
    fn full_range_reconstructs_raw_totals() {
        let data = datasets();
        let dashboard = Dashboard::compute(&data, data.full_range().unwrap());
        let summed: u64 = dashboard.daily.iter().map(|r| r.count_users).sum();
        let raw: u64 = data.daily.iter().map(|r| r.total_users()).sum();
        assert_eq!(summed, raw);
        let by_category: u64 = dashboard.categories.iter().map(|c| c.user_counts).sum();
        assert_eq!(by_category, raw);
    }

    #[test]
    fn range_after_all_data_is_empty() {
        let dashboard = Dashboard::compute(&datasets(), DateRange(day(3), day(31)));
        assert!(dashboard.daily.is_empty());
        assert!(dashboard.categories.is_empty());
        assert!(dashboard.casual_heatmap.is_empty());
        assert!(dashboard.registered_heatmap.is_empty());
        assert!(dashboard.is_empty());
        assert_eq!(dashboard.totals, UserTotals::default());
    }

    #[test]
    fn inverted_range_is_empty() {
        let dashboard = Dashboard::compute(&datasets(), DateRange(day(2), day(1)));
        assert!(dashboard.is_empty());
    }

    #[test]
    fn nested_ranges_are_monotonic() {
        let data = datasets();
        let narrow = Dashboard::compute(&data, DateRange(day(2), day(2)));
        let wide = Dashboard::compute(&data, DateRange(day(1), day(2)));
        assert!(narrow.totals.total_casual_users <= wide.totals.total_casual_users);
        assert!(narrow.totals.total_registered_users <= wide.totals.total_registered_users);
        assert!(narrow.totals.total_users <= wide.totals.total_users);

        let narrow_categories: u64 = narrow.categories.iter().map(|c| c.user_counts).sum();
        let wide_categories: u64 = wide.categories.iter().map(|c| c.user_counts).sum();
        assert!(narrow_categories <= wide_categories);
        for category in &narrow.categories {
            let outer = wide
                .categories
                .iter()
                .find(|c| c.season == category.season && c.weather_situation == category.weather_situation)
                .expect("every narrow group is also in the wide range");
            assert!(category.user_counts <= outer.user_counts);
        }

        for hour in 0..24u8 {
            for weekday in Weekday::ALL {
                for (n, w) in [
                    (&narrow.casual_heatmap, &wide.casual_heatmap),
                    (&narrow.registered_heatmap, &wide.registered_heatmap),
                ] {
                    assert!(n.get(weekday, hour).unwrap_or(0) <= w.get(weekday, hour).unwrap_or(0));
                    if n.get(weekday, hour).is_some() {
                        assert!(w.get(weekday, hour).is_some());
                    }
                }
            }
        }
    }

    #[test]
    fn serializes_absent_cells_as_null() {
        let dashboard = Dashboard::compute(&datasets(), DateRange(day(1), day(1)));
        let json = serde_json::to_value(&dashboard).unwrap();
        assert_eq!(json["casual_heatmap"]["cells"][1][8], 3);
        assert!(json["casual_heatmap"]["cells"][0][0].is_null());
        assert_eq!(json["daily"][0]["date"], "2024-01-01");
        assert_eq!(json["range"][0], "2024-01-01");
    }
}
