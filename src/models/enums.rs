//! Safety-measure status enums and icon resolution
//!
//! Each unit reports one status per safety-measure category. Unrecognized
//! source strings deserialize to `Unknown` instead of failing the whole
//! document, and resolve to no icon.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Icon
// ---------------------------------------------------------------------------

/// Concrete icon asset keys shown on unit cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    RequiredMask,
    RecommendedMask,
    RequiredTowel,
    RecommendedTowel,
    PartialFountain,
    ForbiddenFountain,
    RequiredLockerRoom,
    PartialLockerRoom,
    ForbiddenLockerRoom,
}

impl Icon {
    /// Asset key, matching the published image file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::RequiredMask => "required-mask",
            Icon::RecommendedMask => "recommended-mask",
            Icon::RequiredTowel => "required-towel",
            Icon::RecommendedTowel => "recommended-towel",
            Icon::PartialFountain => "partial-fountain",
            Icon::ForbiddenFountain => "forbidden-fountain",
            Icon::RequiredLockerRoom => "required-lockerroom",
            Icon::PartialLockerRoom => "partial-lockerroom",
            Icon::ForbiddenLockerRoom => "forbidden-lockerroom",
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MaskPolicy
// ---------------------------------------------------------------------------

/// Mask usage status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskPolicy {
    Required,
    Recommended,
    #[serde(other)]
    Unknown,
}

impl MaskPolicy {
    pub fn icon(&self) -> Option<Icon> {
        match self {
            MaskPolicy::Required => Some(Icon::RequiredMask),
            MaskPolicy::Recommended => Some(Icon::RecommendedMask),
            MaskPolicy::Unknown => None,
        }
    }
}

// ---------------------------------------------------------------------------
// TowelPolicy
// ---------------------------------------------------------------------------

/// Towel usage status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TowelPolicy {
    Required,
    Recommended,
    #[serde(other)]
    Unknown,
}

impl TowelPolicy {
    pub fn icon(&self) -> Option<Icon> {
        match self {
            TowelPolicy::Required => Some(Icon::RequiredTowel),
            TowelPolicy::Recommended => Some(Icon::RecommendedTowel),
            TowelPolicy::Unknown => None,
        }
    }
}

// ---------------------------------------------------------------------------
// FountainPolicy
// ---------------------------------------------------------------------------

/// Drinking fountain status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FountainPolicy {
    Partial,
    NotAllowed,
    #[serde(other)]
    Unknown,
}

impl FountainPolicy {
    pub fn icon(&self) -> Option<Icon> {
        match self {
            FountainPolicy::Partial => Some(Icon::PartialFountain),
            FountainPolicy::NotAllowed => Some(Icon::ForbiddenFountain),
            FountainPolicy::Unknown => None,
        }
    }
}

// ---------------------------------------------------------------------------
// LockerRoomPolicy
// ---------------------------------------------------------------------------

/// Locker room status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockerRoomPolicy {
    Allowed,
    Partial,
    Closed,
    #[serde(other)]
    Unknown,
}

impl LockerRoomPolicy {
    pub fn icon(&self) -> Option<Icon> {
        match self {
            LockerRoomPolicy::Allowed => Some(Icon::RequiredLockerRoom),
            LockerRoomPolicy::Partial => Some(Icon::PartialLockerRoom),
            LockerRoomPolicy::Closed => Some(Icon::ForbiddenLockerRoom),
            LockerRoomPolicy::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fountain_partial_icon() {
        assert_eq!(
            FountainPolicy::Partial.icon().map(|i| i.as_str()),
            Some("partial-fountain")
        );
    }

    #[test]
    fn test_unknown_status_has_no_icon() {
        assert_eq!(FountainPolicy::Unknown.icon(), None);
        assert_eq!(MaskPolicy::Unknown.icon(), None);
        assert_eq!(TowelPolicy::Unknown.icon(), None);
        assert_eq!(LockerRoomPolicy::Unknown.icon(), None);
    }

    #[test]
    fn test_unrecognized_source_string_deserializes_to_unknown() {
        let policy: FountainPolicy = serde_json::from_str("\"sparkling\"").unwrap();
        assert_eq!(policy, FountainPolicy::Unknown);
    }

    #[test]
    fn test_snake_case_values() {
        let policy: FountainPolicy = serde_json::from_str("\"not_allowed\"").unwrap();
        assert_eq!(policy, FountainPolicy::NotAllowed);
        let policy: LockerRoomPolicy = serde_json::from_str("\"allowed\"").unwrap();
        assert_eq!(policy, LockerRoomPolicy::Allowed);
    }
}
