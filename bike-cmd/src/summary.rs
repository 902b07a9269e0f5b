//! Headline metrics and date span reporting.

use crate::{resolve_range, DataArgs};
use bike_data::aggregate::missing_dates;
use bike_data::dashboard::Dashboard;
use bike_rental::loader::{full_range, load_daily};
use bike_rental::record::RentalRecordDaily;
use bike_utils::dates::format_date;
use bike_utils::numbers::{format_percent, format_thousands};
use log::info;
use std::path::Path;

/// Print the metrics row, the user share and the per season/weather
/// totals for the requested interval.
pub fn run_summary(data: &DataArgs) -> anyhow::Result<()> {
    let datasets = data.load()?;
    let range = resolve_range(&datasets, data.start, data.end)?;
    let dashboard = Dashboard::compute(&datasets, range);
    print!("{}", render_summary(&dashboard));
    Ok(())
}

/// Print the earliest and latest daily record dates and any days
/// in between that have no record.
pub fn run_span(day_csv: &Path) -> anyhow::Result<()> {
    let daily = load_daily(day_csv)?;
    print!("{}", render_span(&daily));
    if daily.is_empty() {
        info!("No daily records in {}", day_csv.display());
    }
    Ok(())
}

pub fn render_span(daily: &[RentalRecordDaily]) -> String {
    let Some(range) = full_range(daily) else {
        return String::new();
    };
    let missing = missing_dates(daily, range);
    let mut out = format!(
        "{} to {} ({} days, {} records)\n",
        format_date(&range.start()),
        format_date(&range.end()),
        range.num_days(),
        daily.len()
    );
    if !missing.is_empty() {
        let dates: Vec<String> = missing.iter().map(format_date).collect();
        out.push_str(&format!("Missing {} days: {}\n", missing.len(), dates.join(", ")));
    }
    out
}

pub fn render_summary(dashboard: &Dashboard) -> String {
    let totals = &dashboard.totals;
    let mut out = String::new();
    out.push_str(&format!(
        "Daily rent {} to {}\n",
        format_date(&dashboard.range.start()),
        format_date(&dashboard.range.end())
    ));
    if dashboard.is_empty() {
        out.push_str("No data in the selected range\n");
        return out;
    }
    out.push_str(&format!(
        "Total Casual Rent:     {}\n",
        format_thousands(totals.total_casual_users)
    ));
    out.push_str(&format!(
        "Total Registered Rent: {}\n",
        format_thousands(totals.total_registered_users)
    ));
    out.push_str(&format!(
        "Total Rent:            {}\n",
        format_thousands(totals.total_users)
    ));
    out.push_str(&format!(
        "Casual / Registered:   {} / {}\n",
        format_percent(totals.casual_share()),
        format_percent(totals.registered_share())
    ));
    out.push_str("By season and weather:\n");
    for category in &dashboard.categories {
        out.push_str(&format!(
            "  {:<8} {:<16} {:>12}\n",
            category.season,
            category.weather_situation,
            format_thousands(category.user_counts)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bike_rental::date_range::DateRange;
    use bike_rental::loader::Datasets;
    use chrono::NaiveDate;

    const DAY_CSV: &str = "\
date,season,weathersit,casual_users,registered_users
2011-06-01,Summer,Clear,1200,3400
2011-06-02,Summer,Misty,800,2600
";

    fn datasets() -> Datasets {
        Datasets::from_csv(DAY_CSV, "date,weekday,hour,casual_users,registered_users\n").unwrap()
    }

    #[test]
    fn summary_lists_metrics_and_categories() {
        let data = datasets();
        let dashboard = Dashboard::compute(&data, data.full_range().unwrap());
        let text = render_summary(&dashboard);
        assert!(text.contains("Daily rent 2011-06-01 to 2011-06-02"));
        assert!(text.contains("Total Casual Rent:     2,000"));
        assert!(text.contains("Total Registered Rent: 6,000"));
        assert!(text.contains("Total Rent:            8,000"));
        assert!(text.contains("25.0% / 75.0%"));
        assert!(text.contains("Summer"));
        assert!(text.contains("4,600"));
        assert!(text.contains("3,400"));
    }

    #[test]
    fn span_reports_bounds_and_gaps() {
        let csv = "\
date,season,weathersit,casual_users,registered_users
2011-06-01,Summer,Clear,1,1
2011-06-04,Summer,Clear,1,1
";
        let data = Datasets::from_csv(csv, "date,weekday,hour,casual_users,registered_users\n").unwrap();
        let text = render_span(&data.daily);
        assert_eq!(
            text,
            "2011-06-01 to 2011-06-04 (4 days, 2 records)\nMissing 2 days: 2011-06-02, 2011-06-03\n"
        );
        assert_eq!(render_span(&datasets().daily).lines().count(), 1);
        assert!(render_span(&[]).is_empty());
    }

    #[test]
    fn summary_reports_empty_range() {
        let start = NaiveDate::from_ymd_opt(2012, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2012, 1, 31).unwrap();
        let dashboard = Dashboard::compute(&datasets(), DateRange(start, end));
        let text = render_summary(&dashboard);
        assert!(text.contains("No data in the selected range"));
        assert!(!text.contains("Total Rent"));
    }
}
