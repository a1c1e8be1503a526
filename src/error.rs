//! Error taxonomy for grid building and picker operations.

use thiserror::Error;

/// Errors surfaced at the `build_grid` / picker operation boundary.
///
/// All failures are synchronous and local; there is no retry or recovery
/// concept anywhere in the crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// A supplied date string is not in canonical zero-padded `YYYY-MM-DD`
    /// form, or names a day that does not exist in its month.
    #[error("invalid date format: {0:?} (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    /// Month outside 1-12. Out-of-range months are never wrapped; rollover
    /// only happens through day arithmetic and navigation targets.
    #[error("invalid month: {0} (must be 1-12)")]
    InvalidMonth(u32),

    /// A selection fell outside the configured min/max bounds.
    #[error("date out of selectable range: {0}")]
    OutOfRange(String),

    /// `navigate` or `select` was called while the picker was closed.
    #[error("picker is not open")]
    NotOpen,

    /// Day arithmetic left the range representable by the calendar backend.
    #[error("date arithmetic overflow: {0} {1:+} days")]
    DateOverflow(String, i64),
}
