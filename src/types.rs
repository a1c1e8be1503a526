//! Type definitions and constants for the date picker grid model.

use std::fmt;

/// A calendar date with no time component.
///
/// Canonical string form is `YYYY-MM-DD`, zero-padded to 4/2/2 digits.
/// Under that fixed width, lexical string order equals chronological order,
/// which is what makes the string comparator in [`crate::datemath::compare`]
/// valid. Parsing and arithmetic live in [`crate::datemath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateValue {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::datemath::format_date(
            self.year, self.month, self.day,
        ))
    }
}

/// Everything needed to build one month view.
///
/// `min <= max` when both are present is a caller contract, not validated
/// here: an inverted range still renders, with every cell unselectable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRequest {
    /// Target year.
    pub year: i32,
    /// Target month, 1 = January.
    pub month: u32,
    /// Currently selected date, if any.
    pub selected: Option<DateValue>,
    /// Earliest selectable date (inclusive); `None` = unbounded.
    pub min: Option<DateValue>,
    /// Latest selectable date (inclusive); `None` = unbounded.
    pub max: Option<DateValue>,
}

/// Style classification of one grid cell.
///
/// Assigned with first-match-wins precedence: `Today` beats `Selected`,
/// which beats the month-membership baseline. The `Active`/`Inactive`
/// suffix reflects whether the cell is inside the min/max window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleClass {
    Today,
    Selected,
    CurrentMonthActive,
    CurrentMonthInactive,
    OtherMonthActive,
    OtherMonthInactive,
}

/// One of the 42 day slots in a month view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub date: DateValue,
    /// Day of month, 1-31, for display.
    pub day_number: u32,
    pub style: StyleClass,
    /// Whether the date falls inside the inclusive min/max window. Cells
    /// with `selectable == false` must render without a click affordance.
    pub selectable: bool,
}

/// A (year, month) navigation destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthTarget {
    pub year: i32,
    pub month: u32,
}

/// A fully classified month view: exactly 42 cells, Sunday-first, plus the
/// four navigation targets.
///
/// Built fresh on every navigation; nothing persists between builds and the
/// model is owned entirely by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGridModel {
    pub year: i32,
    pub month: u32,
    /// Human-readable header, e.g. "March 2024".
    pub month_label: String,
    pub cells: Vec<GridCell>,
    pub prev_month: MonthTarget,
    pub next_month: MonthTarget,
    pub prev_year: MonthTarget,
    pub next_year: MonthTarget,
}

// Grid geometry
pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS_PER_GRID: usize = 6;
pub const CELLS_PER_GRID: usize = DAYS_PER_WEEK * WEEKS_PER_GRID; // 42

/// Month name table used for grid labels (host may localize further).
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Sunday-first weekday column labels.
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

// Color is enabled by default for better user experience
pub const COLOR_ENABLED_BY_DEFAULT: bool = true;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
pub const COLOR_GRAY: &str = "\x1b[90m";
