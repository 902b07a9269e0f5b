use crate::category::{Season, WeatherSituation, Weekday};
use chrono::NaiveDate;
use serde::Serialize;

/// Anything keyed by a calendar date, so both record sets can share
/// one range filter.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// The two user classes counted in every rental record.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
pub enum UserClass {
    Casual,
    Registered,
}

/// One day of rentals.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct RentalRecordDaily {
    pub date: NaiveDate,
    pub season: Season,
    pub weather_situation: WeatherSituation,
    pub casual_users: u32,
    pub registered_users: u32,
}

impl RentalRecordDaily {
    /// Casual plus registered rentals for the day.
    pub fn total_users(&self) -> u64 {
        u64::from(self.casual_users) + u64::from(self.registered_users)
    }
}

/// One hour of rentals.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct RentalRecordHourly {
    pub date: NaiveDate,
    pub weekday: Weekday,
    /// Hour of day, 0-23
    pub hour: u8,
    pub casual_users: u32,
    pub registered_users: u32,
}

impl RentalRecordHourly {
    pub fn total_users(&self) -> u64 {
        u64::from(self.casual_users) + u64::from(self.registered_users)
    }

    /// The count for a single user class.
    pub fn users(&self, class: UserClass) -> u32 {
        match class {
            UserClass::Casual => self.casual_users,
            UserClass::Registered => self.registered_users,
        }
    }
}

impl Dated for RentalRecordDaily {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for RentalRecordHourly {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_users_by_class() {
        let record = RentalRecordHourly {
            date: NaiveDate::from_ymd_opt(2011, 1, 3).unwrap(),
            weekday: Weekday::Monday,
            hour: 8,
            casual_users: 3,
            registered_users: 94,
        };
        assert_eq!(record.users(UserClass::Casual), 3);
        assert_eq!(record.users(UserClass::Registered), 94);
        assert_eq!(record.total_users(), 97);
    }

    #[test]
    fn test_daily_total_does_not_overflow() {
        let record = RentalRecordDaily {
            date: NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
            season: Season::Spring,
            weather_situation: WeatherSituation::Clear,
            casual_users: u32::MAX,
            registered_users: u32::MAX,
        };
        assert_eq!(record.total_users(), 2 * u64::from(u32::MAX));
    }
}
