//! Command-line argument parsing using clap.
//!
//! Arguments follow the convention `[month] [year]`, with picker bounds and
//! selection supplied as options.

use clap::{Parser, ValueHint};
use std::io::IsTerminal;

use crate::picker::{Clock, SystemClock};
use crate::types::{COLOR_ENABLED_BY_DEFAULT, CalendarRequest, DateValue};

#[derive(Parser, Debug)]
#[command(name = "datepick")]
#[command(about = "Displays a date picker grid for the specified month", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Month (1-12 or name) - optional, defaults to the current month.
    #[arg(index = 1, default_value = None, value_name = "month", value_hint = ValueHint::Other)]
    pub month_arg: Option<String>,

    /// Year (1-9999) - optional, defaults to the current year.
    #[arg(index = 2, default_value = None, value_name = "year", value_hint = ValueHint::Other)]
    pub year_arg: Option<String>,

    /// Currently selected date (YYYY-MM-DD).
    #[arg(
        short = 's',
        long,
        value_name = "date",
        help_heading = "Picker options"
    )]
    pub selected: Option<String>,

    /// Earliest selectable date (YYYY-MM-DD).
    #[arg(long, value_name = "date", help_heading = "Picker options")]
    pub min: Option<String>,

    /// Latest selectable date (YYYY-MM-DD).
    #[arg(long, value_name = "date", help_heading = "Picker options")]
    pub max: Option<String>,

    /// Print the four navigation targets under the grid.
    #[arg(short = 't', long, help_heading = "Output options")]
    pub targets: bool,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub color: bool,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display a date picker month grid.

Without any arguments, display the current month.

Examples:
  datepick                              Display current month
  datepick 3 2024                       Display March 2024
  datepick 3 2024 -s 2024-03-15         Highlight a selected date
  datepick --min 2024-03-01 --max 2024-03-31
                                        Dim dates outside the range
  datepick -t                           Also print navigation targets
  datepick --color                      Disable colorized output";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

/// Color only goes to real terminals, and `--color` turns it off.
pub fn use_color(args: &Args) -> bool {
    !args.color && COLOR_ENABLED_BY_DEFAULT && std::io::stdout().is_terminal()
}

/// Today's date from the system clock (honors DATEPICK_TEST_TIME).
pub fn get_today_date() -> DateValue {
    SystemClock.today()
}

/// Parse month from string (numeric 1-12 or English name/abbreviation).
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(n);
    }

    let s_lower = s.to_lowercase();
    let month_names: [(&str, u32); 23] = [
        ("january", 1),
        ("february", 2),
        ("march", 3),
        ("april", 4),
        ("may", 5),
        ("june", 6),
        ("july", 7),
        ("august", 8),
        ("september", 9),
        ("october", 10),
        ("november", 11),
        ("december", 12),
        ("jan", 1),
        ("feb", 2),
        ("mar", 3),
        ("apr", 4),
        ("jun", 6),
        ("jul", 7),
        ("aug", 8),
        ("sep", 9),
        ("oct", 10),
        ("nov", 11),
        ("dec", 12),
    ];
    month_names
        .iter()
        .find(|(name, _)| *name == s_lower)
        .map(|(_, num)| *num)
}

/// Build the grid request and clock date from command-line arguments.
pub fn build_request(args: &Args) -> Result<(CalendarRequest, DateValue), String> {
    let today = get_today_date();

    let month = match &args.month_arg {
        Some(s) => parse_month(s).ok_or_else(|| format!("Invalid month: {}", s))?,
        None => today.month,
    };

    let year = match &args.year_arg {
        Some(s) => {
            let year: i32 = s
                .parse()
                .map_err(|_| format!("Invalid year value: {}", s))?;
            if !(1..=9999).contains(&year) {
                return Err(format!("Invalid year value: {} (must be 1-9999)", year));
            }
            year
        }
        None => today.year,
    };

    let selected = parse_date_arg(args.selected.as_deref())?;
    let min = parse_date_arg(args.min.as_deref())?;
    let max = parse_date_arg(args.max.as_deref())?;

    Ok((
        CalendarRequest {
            year,
            month,
            selected,
            min,
            max,
        },
        today,
    ))
}

fn parse_date_arg(value: Option<&str>) -> Result<Option<DateValue>, String> {
    value
        .map(DateValue::parse)
        .transpose()
        .map_err(|e| e.to_string())
}
