use chrono::NaiveDate;
use serde::Serialize;

/// An inclusive interval of calendar dates, `start..=end`.
///
/// A range whose start is after its end is valid and simply contains
/// nothing. Iterating yields each date from the start date through the
/// end date (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug, Serialize)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    pub fn start(&self) -> NaiveDate {
        self.0
    }

    pub fn end(&self) -> NaiveDate {
        self.1
    }

    /// True when `date` falls within the range, both ends included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0 <= date && date <= self.1
    }

    pub fn is_empty(&self) -> bool {
        self.0 > self.1
    }

    /// Number of calendar days covered, 0 for an inverted range.
    pub fn num_days(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            (self.1 - self.0).num_days() + 1
        }
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 > self.1 {
            return None;
        }
        let current = self.0;
        match current.succ_opt() {
            Some(next) => self.0 = next,
            // current is NaiveDate::MAX, so close the range from the end instead
            None => self.1 = current.pred_opt()?,
        }
        Some(current)
    }
}
