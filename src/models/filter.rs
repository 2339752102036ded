//! Transient filter selection

use crate::models::period::Period;

/// The user's current filter selection. Both filters start inactive and
/// `clear` restores that state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Selected training period, if any
    pub period: Option<Period>,
    /// Whether closed units are included in the results
    pub show_closed: bool,
}

impl FilterState {
    pub fn new(period: Option<Period>, show_closed: bool) -> Self {
        Self { period, show_closed }
    }

    /// Reset both controls to their initial state
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
