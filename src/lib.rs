//! Inline month-grid date picker.
//!
//! Given a target month, a currently selected date, and an allowed date
//! range, builds a 6-week-by-7-day grid model with per-cell classification
//! (today / selected / in-month / adjacent-month / in-range) and navigation
//! targets for month and year steps.
//!
//! Features:
//! - Pure grid construction: no clock or terminal access inside `build_grid`
//! - Strict canonical `YYYY-MM-DD` date handling with lexical comparison
//! - A Closed/Open picker state machine mediating host input updates
//! - A terminal renderer and CLI for inspecting grids

pub mod args;
pub mod datemath;
pub mod error;
pub mod formatter;
pub mod grid;
pub mod picker;
pub mod types;
