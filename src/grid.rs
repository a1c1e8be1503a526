//! Calendar grid construction: 42 classified day cells plus navigation targets.

use std::cmp::Ordering;

use tracing::debug;

use crate::datemath::{add_days, compare, weekday_of_first};
use crate::error::PickerError;
use crate::types::{
    CELLS_PER_GRID, CalendarGridModel, CalendarRequest, DateValue, GridCell, MONTH_NAMES,
    MonthTarget, StyleClass,
};

/// Grid header label, e.g. "March 2024". `month` must be 1-12.
pub fn month_label(year: i32, month: u32) -> String {
    format!("{} {}", MONTH_NAMES[(month - 1) as usize], year)
}

/// One month back, rolling into December of the previous year from January.
pub fn prev_month_target(year: i32, month: u32) -> MonthTarget {
    if month == 1 {
        MonthTarget {
            year: year - 1,
            month: 12,
        }
    } else {
        MonthTarget {
            year,
            month: month - 1,
        }
    }
}

/// One month forward, rolling into January of the next year from December.
pub fn next_month_target(year: i32, month: u32) -> MonthTarget {
    if month == 12 {
        MonthTarget {
            year: year + 1,
            month: 1,
        }
    } else {
        MonthTarget {
            year,
            month: month + 1,
        }
    }
}

/// One year back, month unchanged.
pub fn prev_year_target(year: i32, month: u32) -> MonthTarget {
    MonthTarget {
        year: year - 1,
        month,
    }
}

/// One year forward, month unchanged.
pub fn next_year_target(year: i32, month: u32) -> MonthTarget {
    MonthTarget {
        year: year + 1,
        month,
    }
}

/// Build the 42-cell month view for a request.
///
/// The grid starts on the Sunday of the week containing day 1 of the target
/// month and runs six full weeks, so it always spans the trailing days of
/// the previous month and the leading days of the next. Cells are classified
/// with first-match-wins precedence: Today (against the injected clock
/// date) > Selected > the CurrentMonth/OtherMonth baseline. Today styling is
/// cosmetic and independent of selectability.
///
/// Pure function of its inputs: the request is never mutated and no state
/// survives between calls. An inverted min/max range is not rejected; it
/// simply leaves every cell unselectable.
pub fn build_grid(
    request: &CalendarRequest,
    today: &DateValue,
) -> Result<CalendarGridModel, PickerError> {
    let (year, month) = (request.year, request.month);
    if !(1..=12).contains(&month) {
        return Err(PickerError::InvalidMonth(month));
    }

    let start = weekday_of_first(year, month)? as i64;
    let grid_start = add_days(DateValue::new(year, month, 1), -start)?;

    // Bounds and overrides compared in canonical string form; the fixed
    // width is what makes the lexical comparator chronologically valid.
    let today_str = today.canonical();
    let selected_str = request.selected.map(|d| d.canonical());
    let min_str = request.min.map(|d| d.canonical());
    let max_str = request.max.map(|d| d.canonical());

    let mut cells = Vec::with_capacity(CELLS_PER_GRID);
    for offset in 0..CELLS_PER_GRID {
        let date = add_days(grid_start, offset as i64)?;
        let date_str = date.canonical();
        let selectable = within_bounds(&date_str, min_str.as_deref(), max_str.as_deref());
        let in_month = date.year == year && date.month == month;

        let style = if date_str == today_str {
            StyleClass::Today
        } else if selected_str.as_deref() == Some(date_str.as_str()) {
            StyleClass::Selected
        } else {
            baseline(in_month, selectable)
        };

        cells.push(GridCell {
            day_number: date.day,
            date,
            style,
            selectable,
        });
    }

    debug!(year, month, "built calendar grid");

    Ok(CalendarGridModel {
        year,
        month,
        month_label: month_label(year, month),
        cells,
        prev_month: prev_month_target(year, month),
        next_month: next_month_target(year, month),
        prev_year: prev_year_target(year, month),
        next_year: next_year_target(year, month),
    })
}

fn baseline(in_month: bool, selectable: bool) -> StyleClass {
    match (in_month, selectable) {
        (true, true) => StyleClass::CurrentMonthActive,
        (true, false) => StyleClass::CurrentMonthInactive,
        (false, true) => StyleClass::OtherMonthActive,
        (false, false) => StyleClass::OtherMonthInactive,
    }
}

/// Inclusive min/max window check on canonical strings; an absent bound is
/// unbounded on that side.
fn within_bounds(date: &str, min: Option<&str>, max: Option<&str>) -> bool {
    let after_min = min.map_or(true, |m| compare(date, m) != Ordering::Less);
    let before_max = max.map_or(true, |m| compare(date, m) != Ordering::Greater);
    after_min && before_max
}
