//! The filter engine
//!
//! Pure functions computing the visible subset of the full location list.
//! Every invocation narrows the full list, never the previous result, so
//! filters are not cumulative across toggles.

use crate::models::location::LocationRecord;
use crate::models::period::Period;
use crate::models::schedule::ParsedHours;
use crate::models::FilterState;

/// Compute the visible subset for the given filter selection,
/// order-preserving relative to `all`.
pub fn compute_visible(all: &[LocationRecord], filter: &FilterState) -> Vec<LocationRecord> {
    let mut visible: Vec<LocationRecord> = all.to_vec();

    if let Some(period) = filter.period {
        visible.retain(|record| is_open_in_period(record, period));
    }

    if !filter.show_closed {
        visible.retain(|record| record.is_open());
    }

    visible
}

/// Whether any of the record's schedules overlaps the period window.
/// Closed and malformed hour texts contribute no match; placeholder
/// records have no schedules and never match.
pub fn is_open_in_period(record: &LocationRecord, period: Period) -> bool {
    let (period_start, period_end) = period.window();

    record.schedules().iter().any(|schedule| {
        match schedule.parse_hours() {
            Some(ParsedHours::Range { start, end }) => {
                overlaps(start, end, period_start, period_end)
            }
            Some(ParsedHours::Closed) | None => false,
        }
    })
}

/// Interval overlap in the hundredths-of-hour encoding: the schedule
/// start falls inside `[ps, pe)`, the schedule end inside `(ps, pe]`, or
/// the schedule fully contains the period.
fn overlaps(start: i32, end: i32, period_start: i32, period_end: i32) -> bool {
    (start >= period_start && start < period_end)
        || (end > period_start && end <= period_end)
        || (start <= period_start && end >= period_end)
}
