//! Picker lifecycle: the Closed/Open state machine between a host text
//! input and the grid model.
//!
//! The picker never touches the host input itself. `open` receives the
//! input's current value and bounds, `select` hands back the canonical
//! string the host should write, and rendering is the host's job.

use std::cmp::Ordering;

use tracing::debug;

use crate::datemath::compare;
use crate::error::PickerError;
use crate::grid::build_grid;
use crate::types::{CalendarGridModel, CalendarRequest, DateValue};

/// Source of "today" for the Today highlight. Injected so grid
/// classification stays a pure function in tests.
pub trait Clock {
    fn today(&self) -> DateValue;
}

/// Local-date clock, respecting the DATEPICK_TEST_TIME environment
/// variable (`YYYY-MM-DD`) for deterministic testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> DateValue {
        if let Ok(test_time) = std::env::var("DATEPICK_TEST_TIME")
            && let Ok(date) = DateValue::parse(&test_time)
        {
            return date;
        }
        DateValue::from_naive(chrono::Local::now().date_naive())
    }
}

enum PickerState {
    Closed,
    Open {
        request: CalendarRequest,
        model: CalendarGridModel,
    },
}

/// An inline date picker bound to one host text input.
///
/// States: Closed -> Open (`open`) -> Open (`navigate`) -> Closed
/// (`select` or `dismiss`). Every navigation replaces the grid model
/// wholesale; nothing from a previous render survives.
pub struct DatePicker<C: Clock = SystemClock> {
    clock: C,
    state: PickerState,
}

impl Default for DatePicker<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> DatePicker<C> {
    pub fn new(clock: C) -> Self {
        DatePicker {
            clock,
            state: PickerState::Closed,
        }
    }

    /// Open the picker from the host input's current state.
    ///
    /// A non-blank `value` becomes the initial selection and decides the
    /// target month; a blank value opens on the clock's current month with
    /// nothing selected. Malformed dates surface as `InvalidDateFormat`.
    pub fn open(
        &mut self,
        value: &str,
        min: Option<&str>,
        max: Option<&str>,
    ) -> Result<&CalendarGridModel, PickerError> {
        let selected = match value.trim() {
            "" => None,
            s => Some(DateValue::parse(s)?),
        };
        let min = min.map(DateValue::parse).transpose()?;
        let max = max.map(DateValue::parse).transpose()?;

        let today = self.clock.today();
        let (year, month) = match selected {
            Some(date) => (date.year, date.month),
            None => (today.year, today.month),
        };

        let request = CalendarRequest {
            year,
            month,
            selected,
            min,
            max,
        };
        let model = build_grid(&request, &today)?;
        debug!(year, month, "picker opened");
        self.state = PickerState::Open { request, model };
        self.current_model()
    }

    /// Re-target the open view to another (year, month), keeping the
    /// selection and bounds. The host input is not altered.
    pub fn navigate(&mut self, year: i32, month: u32) -> Result<&CalendarGridModel, PickerError> {
        let PickerState::Open { request, .. } = &self.state else {
            return Err(PickerError::NotOpen);
        };
        let request = CalendarRequest {
            year,
            month,
            ..request.clone()
        };
        let model = build_grid(&request, &self.clock.today())?;
        debug!(year, month, "picker navigated");
        self.state = PickerState::Open { request, model };
        self.current_model()
    }

    /// Commit a selection and close.
    ///
    /// Returns the canonical string the host writes into its input.
    /// Non-selectable cells carry no click affordance in a conforming
    /// renderer, but the bounds are re-checked here anyway and violations
    /// come back as `OutOfRange`.
    pub fn select(&mut self, date: &str) -> Result<String, PickerError> {
        let PickerState::Open { request, .. } = &self.state else {
            return Err(PickerError::NotOpen);
        };
        let chosen = DateValue::parse(date)?.canonical();

        let after_min = request
            .min
            .map_or(true, |m| compare(&chosen, &m.canonical()) != Ordering::Less);
        let before_max = request
            .max
            .map_or(true, |m| compare(&chosen, &m.canonical()) != Ordering::Greater);
        if !(after_min && before_max) {
            return Err(PickerError::OutOfRange(chosen));
        }

        debug!(date = %chosen, "selection committed");
        self.state = PickerState::Closed;
        Ok(chosen)
    }

    /// Close without changing anything. Idempotent.
    pub fn dismiss(&mut self) {
        if matches!(self.state, PickerState::Open { .. }) {
            debug!("picker dismissed");
        }
        self.state = PickerState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PickerState::Open { .. })
    }

    /// The current grid model, while open.
    pub fn model(&self) -> Option<&CalendarGridModel> {
        match &self.state {
            PickerState::Open { model, .. } => Some(model),
            PickerState::Closed => None,
        }
    }

    fn current_model(&self) -> Result<&CalendarGridModel, PickerError> {
        self.model().ok_or(PickerError::NotOpen)
    }
}
