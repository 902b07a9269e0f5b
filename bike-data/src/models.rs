//! Derived, chart-ready structures.
//!
//! All structs derive `Serialize` so a renderer can consume them as JSON.
//! Each is built fresh for one filter interval and owned by the caller.

use bike_rental::category::{Season, WeatherSituation};
use chrono::NaiveDate;
use serde::Serialize;

/// Rentals for one calendar day, feeding the daily line chart.
///
/// `count_users` always equals `total_casual_users + total_registered_users`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DailyUsersSummary {
    pub date: NaiveDate,
    pub total_casual_users: u64,
    pub total_registered_users: u64,
    pub count_users: u64,
}

impl DailyUsersSummary {
    pub fn new(date: NaiveDate, total_casual_users: u64, total_registered_users: u64) -> Self {
        Self {
            date,
            total_casual_users,
            total_registered_users,
            count_users: total_casual_users + total_registered_users,
        }
    }
}

/// Total rentals for one observed (season, weather) pair, feeding the
/// grouped bar chart.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategorySummary {
    pub season: Season,
    pub weather_situation: WeatherSituation,
    pub user_counts: u64,
}

/// Headline metrics and pie chart shares over a daily summary.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct UserTotals {
    pub total_casual_users: u64,
    pub total_registered_users: u64,
    pub total_users: u64,
}

impl UserTotals {
    /// Casual share of all rentals in percent, 0.0 when there are none.
    pub fn casual_share(&self) -> f64 {
        share(self.total_casual_users, self.total_users)
    }

    /// Registered share of all rentals in percent, 0.0 when there are none.
    pub fn registered_share(&self) -> f64 {
        share(self.total_registered_users, self.total_users)
    }
}

fn share(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}
