//! The fixed training-period catalog

use serde::{Deserialize, Serialize};

/// One of the three fixed day segments used as a filter axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Manha,
    Tarde,
    Noite,
}

/// All periods, in display order
pub const PERIODS: [Period; 3] = [Period::Manha, Period::Tarde, Period::Noite];

impl Period {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Period::Manha => "Manhã",
            Period::Tarde => "Tarde",
            Period::Noite => "Noite",
        }
    }

    /// Literal time range shown next to the radio control
    pub fn time_range(&self) -> &'static str {
        match self {
            Period::Manha => "06:00 às 12:00",
            Period::Tarde => "12:01 às 18:00",
            Period::Noite => "18:01 às 23:00",
        }
    }

    /// Filter window `[start, end)` in hundredths-of-hour encoding,
    /// derived from the literal time range so the concatenated-digit
    /// encoding is inherited rather than restated.
    pub fn window(&self) -> (i32, i32) {
        let (start, end) = self
            .time_range()
            .split_once(crate::models::schedule::RANGE_SEPARATOR)
            .expect("period time ranges are well-formed literals");
        (encode(start), encode(end))
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Encode an "HH:MM" token by concatenating its digits
fn encode(token: &str) -> i32 {
    token
        .replace(':', "")
        .parse()
        .expect("period time ranges are well-formed literals")
}
