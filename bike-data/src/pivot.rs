//! Weekday x hour pivot tables behind the peak-hours heatmaps.
//!
//! A cell no source row touched stays `None`. The heatmap draws those as
//! blank, which is different from a cell that summed to zero.

use bike_rental::category::Weekday;
use bike_rental::record::{RentalRecordHourly, UserClass};
use serde::Serialize;

pub const HOURS_PER_DAY: usize = 24;
pub const DAYS_PER_WEEK: usize = 7;

/// Summed counts for one user class, indexed `[weekday][hour]` with
/// weekdays numbered from Sunday.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HourlyPivot {
    pub user_class: UserClass,
    pub cells: [[Option<u64>; HOURS_PER_DAY]; DAYS_PER_WEEK],
}

impl HourlyPivot {
    pub fn new(user_class: UserClass) -> Self {
        Self {
            user_class,
            cells: [[None; HOURS_PER_DAY]; DAYS_PER_WEEK],
        }
    }

    /// The summed count for a cell, `None` when no row fell in it.
    /// Hours past 23 are always `None`.
    pub fn get(&self, weekday: Weekday, hour: u8) -> Option<u64> {
        self.cells[weekday.index()]
            .get(usize::from(hour))
            .copied()
            .flatten()
    }

    fn add(&mut self, weekday: Weekday, hour: u8, value: u64) {
        if let Some(cell) = self.cells[weekday.index()].get_mut(usize::from(hour)) {
            *cell = Some(cell.unwrap_or(0) + value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }

    /// Weekdays with at least one populated cell, in weekday order, with
    /// their full row of 24 hours.
    pub fn rows(&self) -> Vec<(Weekday, &[Option<u64>; HOURS_PER_DAY])> {
        Weekday::ALL
            .iter()
            .map(|weekday| (*weekday, &self.cells[weekday.index()]))
            .filter(|(_, row)| row.iter().any(Option::is_some))
            .collect()
    }

    /// Hours with at least one populated cell across all weekdays.
    pub fn hours(&self) -> Vec<u8> {
        (0..HOURS_PER_DAY as u8)
            .filter(|hour| {
                self.cells
                    .iter()
                    .any(|row| row[usize::from(*hour)].is_some())
            })
            .collect()
    }

    /// Largest populated cell, for scaling the heatmap colors.
    pub fn max(&self) -> Option<u64> {
        self.cells.iter().flatten().flatten().copied().max()
    }
}

/// Group hourly records by (weekday, hour) and sum one user class.
///
/// Call once per class; the two classes are never summed together.
pub fn pivot_hourly(records: &[RentalRecordHourly], user_class: UserClass) -> HourlyPivot {
    let mut pivot = HourlyPivot::new(user_class);
    for record in records {
        pivot.add(
            record.weekday,
            record.hour,
            u64::from(record.users(user_class)),
        );
    }
    log::debug!(
        "Pivoted {} hourly records for {:?} users",
        records.len(),
        user_class
    );
    pivot
}
