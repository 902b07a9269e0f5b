//! Text rendering of the peak-hours pivot.

use crate::{resolve_range, ClassArg, DataArgs};
use bike_data::filter::filter_range;
use bike_data::pivot::{pivot_hourly, HourlyPivot};
use bike_rental::record::UserClass;

impl From<ClassArg> for UserClass {
    fn from(value: ClassArg) -> Self {
        match value {
            ClassArg::Casual => UserClass::Casual,
            ClassArg::Registered => UserClass::Registered,
        }
    }
}

pub fn run_heatmap(data: &DataArgs, class: ClassArg) -> anyhow::Result<()> {
    let datasets = data.load()?;
    let range = resolve_range(&datasets, data.start, data.end)?;
    let hourly = filter_range(&datasets.hourly, range);
    let pivot = pivot_hourly(&hourly, class.into());
    print!("{}", render_grid(&pivot));
    Ok(())
}

/// One line per weekday with data and one column per hour with data,
/// then the peak cell. Absent cells are left blank.
pub fn render_grid(pivot: &HourlyPivot) -> String {
    let hours = pivot.hours();
    let mut out = format!("{:<4}", "");
    for hour in &hours {
        out.push_str(&format!("{:>7}", hour));
    }
    out.push('\n');
    for (weekday, _) in pivot.rows() {
        out.push_str(&format!("{:<4}", weekday));
        for hour in &hours {
            let cell = pivot
                .get(weekday, *hour)
                .map(|value| value.to_string())
                .unwrap_or_default();
            out.push_str(&format!("{:>7}", cell));
        }
        out.push('\n');
    }
    if let Some(peak) = pivot.max() {
        out.push_str(&format!("Peak: {}\n", peak));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bike_rental::category::Weekday;
    use bike_rental::record::RentalRecordHourly;
    use chrono::NaiveDate;

    fn hourly(weekday: Weekday, hour: u8, casual: u32) -> RentalRecordHourly {
        RentalRecordHourly {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            weekday,
            hour,
            casual_users: casual,
            registered_users: 0,
        }
    }

    #[test]
    fn grid_leaves_absent_cells_blank() {
        let records = vec![
            hourly(Weekday::Monday, 8, 3),
            hourly(Weekday::Monday, 8, 2),
            hourly(Weekday::Saturday, 14, 0),
        ];
        let grid = render_grid(&pivot_hourly(&records, UserClass::Casual));
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "          8     14");
        assert_eq!(lines[1], "Mon       5       ");
        assert_eq!(lines[2], "Sat              0");
        assert_eq!(lines[3], "Peak: 5");
    }

    #[test]
    fn empty_grid_has_no_peak() {
        let grid = render_grid(&pivot_hourly(&[], UserClass::Registered));
        assert_eq!(grid, "    \n");
    }

    #[test]
    fn class_arg_maps_to_user_class() {
        assert_eq!(UserClass::from(ClassArg::Casual), UserClass::Casual);
        assert_eq!(UserClass::from(ClassArg::Registered), UserClass::Registered);
    }
}
