//! Weekday-group schedules and hour-range parsing
//!
//! Hour ranges arrive as display text ("06h às 23h"). The parsed form keeps
//! the upstream hundredths-of-hour integer encoding: tokens are stripped of
//! a trailing `h` and any `:`, parsed as integers, and multiplied by 100.
//! Minutes therefore concatenate as decimal digits ("12:01" encodes as
//! 1201, not 721); overlap comparisons depend on this exact encoding.

use serde::{Deserialize, Serialize};

/// Separator between the start and end tokens of an hour range
pub const RANGE_SEPARATOR: &str = " às ";

/// Marker text for a closed weekday group
const CLOSED_MARKER: &str = "fechada";

/// One weekday-group's operating hours for a location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Free-text weekday label, e.g. "Segunda a Sábado"
    pub weekdays: String,
    /// Free-text hour range, e.g. "06h às 23h", or "Fechada"
    pub hour: String,
}

/// Parsed form of a schedule's hour text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedHours {
    /// The closed marker; contributes no period match
    Closed,
    /// Operating range in hundredths-of-hour encoding
    Range { start: i32, end: i32 },
}

impl Schedule {
    /// Parse the hour text. Returns `None` for malformed text, which
    /// filtering treats the same as a closed group.
    pub fn parse_hours(&self) -> Option<ParsedHours> {
        if self.hour.trim().eq_ignore_ascii_case(CLOSED_MARKER) {
            return Some(ParsedHours::Closed);
        }

        let (start, end) = self.hour.split_once(RANGE_SEPARATOR)?;
        let start = parse_hour_token(start)?;
        let end = parse_hour_token(end)?;

        Some(ParsedHours::Range {
            start: start * 100,
            end: end * 100,
        })
    }
}

/// Parse one token of an hour range ("06h", "23h") into whole hours
fn parse_hour_token(token: &str) -> Option<i32> {
    token
        .trim()
        .trim_end_matches('h')
        .replace(':', "")
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(hour: &str) -> Schedule {
        Schedule {
            weekdays: "Segunda a Sábado".to_string(),
            hour: hour.to_string(),
        }
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(
            schedule("06h às 23h").parse_hours(),
            Some(ParsedHours::Range { start: 600, end: 2300 })
        );
    }

    #[test]
    fn test_parse_closed_marker_case_insensitive() {
        assert_eq!(schedule("Fechada").parse_hours(), Some(ParsedHours::Closed));
        assert_eq!(schedule("fechada").parse_hours(), Some(ParsedHours::Closed));
        assert_eq!(schedule("FECHADA").parse_hours(), Some(ParsedHours::Closed));
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(schedule("").parse_hours(), None);
        assert_eq!(schedule("06h").parse_hours(), None);
        assert_eq!(schedule("seis às onze").parse_hours(), None);
        assert_eq!(schedule("06h - 23h").parse_hours(), None);
    }
}
