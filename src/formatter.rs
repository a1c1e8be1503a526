//! Terminal rendering of a grid model.
//!
//! One concrete rendering sink for [`crate::types::CalendarGridModel`];
//! hosts with their own UI build an equivalent from the model and wire
//! clicks back into the picker. Here, Today renders reverse-video,
//! the selection teal, and dimmed cells mark adjacent-month and
//! out-of-range days.

use unicode_width::UnicodeWidthStr;

use crate::grid::month_label;
use crate::types::{
    COLOR_GRAY, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, CalendarGridModel,
    DAYS_PER_WEEK, GridCell, StyleClass, WEEKDAY_LABELS, WEEKS_PER_GRID,
};

/// Printed width of one grid: seven 2-char cells with single spaces between.
const GRID_WIDTH: usize = 20;

/// Format the month header, centered over the grid.
pub fn format_month_header(label: &str, width: usize, color: bool) -> String {
    let centered = center_text(label, width);
    if color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Format the Sunday-first weekday header row.
pub fn format_weekday_header(color: bool) -> String {
    let row = WEEKDAY_LABELS.join(" ");
    if color {
        format!("{}{}{}", COLOR_SAND_YELLOW, row, COLOR_RESET)
    } else {
        row
    }
}

/// Format one day cell.
///
/// Highlight priority follows the cell's style: today > selected > dimming
/// for adjacent-month or out-of-range days.
fn format_day_cell(cell: &GridCell, color: bool, is_last: bool) -> String {
    let day_str = format!("{:>2}", cell.day_number);

    let formatted = if !color {
        day_str
    } else {
        match cell.style {
            StyleClass::Today => format!("{}{}{}", COLOR_REVERSE, day_str, COLOR_RESET),
            StyleClass::Selected => format!("{}{}{}", COLOR_TEAL, day_str, COLOR_RESET),
            StyleClass::CurrentMonthActive => day_str,
            StyleClass::CurrentMonthInactive
            | StyleClass::OtherMonthActive
            | StyleClass::OtherMonthInactive => {
                format!("{}{}{}", COLOR_GRAY, day_str, COLOR_RESET)
            }
        }
    };

    if is_last {
        formatted
    } else {
        format!("{} ", formatted)
    }
}

/// Format the full picker view as lines: header, weekday row, six weeks.
pub fn format_grid_lines(model: &CalendarGridModel, color: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(WEEKS_PER_GRID + 2);

    lines.push(format_month_header(&model.month_label, GRID_WIDTH, color));
    lines.push(format_weekday_header(color));

    for week in model.cells.chunks(DAYS_PER_WEEK) {
        let mut line = String::new();
        for (day_in_week, cell) in week.iter().enumerate() {
            let is_last = day_in_week + 1 == DAYS_PER_WEEK;
            line.push_str(&format_day_cell(cell, color, is_last));
        }
        lines.push(line);
    }

    lines
}

/// Format the four navigation targets, one per line.
pub fn format_targets(model: &CalendarGridModel) -> Vec<String> {
    vec![
        format!(
            "prev month: {}",
            month_label(model.prev_month.year, model.prev_month.month)
        ),
        format!(
            "next month: {}",
            month_label(model.next_month.year, model.next_month.month)
        ),
        format!(
            "prev year:  {}",
            month_label(model.prev_year.year, model.prev_year.month)
        ),
        format!(
            "next year:  {}",
            month_label(model.next_year.year, model.next_year.month)
        ),
    ]
}

/// Print the grid to stdout, optionally followed by navigation targets.
pub fn print_grid(model: &CalendarGridModel, color: bool, targets: bool) {
    for line in format_grid_lines(model, color) {
        println!("{}", line);
    }
    if targets {
        println!();
        for line in format_targets(model) {
            println!("{}", line);
        }
    }
}
