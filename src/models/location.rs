//! Gym unit records
//!
//! The source document mixes two record shapes: operating units carrying
//! schedules and safety-measure statuses, and address-only placeholders.
//! The shape is decided once at parse time through an untagged union
//! keyed on the presence of the `opened` flag.

use serde::{Deserialize, Serialize};

use crate::models::enums::{FountainPolicy, Icon, LockerRoomPolicy, MaskPolicy, TowelPolicy};
use crate::models::schedule::Schedule;

/// Envelope of the remote locations document
#[derive(Debug, Clone, Deserialize)]
pub struct LocationList {
    pub locations: Vec<LocationRecord>,
}

/// One gym unit, in either of the two source shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationRecord {
    Operating(Location),
    Placeholder(PlaceholderLocation),
}

/// An operating unit with schedules and safety-measure statuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub title: String,
    /// Pre-formatted markup, rendered verbatim and never parsed
    pub content: String,
    /// Whether the unit is currently operating; sole authority for the
    /// open/closed badge and default visibility
    pub opened: bool,
    pub mask: MaskPolicy,
    pub towel: TowelPolicy,
    pub fountain: FountainPolicy,
    pub locker_room: LockerRoomPolicy,
    /// Weekday-group hours, insertion order = display order
    #[serde(default)]
    pub schedules: Vec<Schedule>,
}

/// An address-only unit without operational detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderLocation {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub street: Option<String>,
    pub region: Option<String>,
    pub city_name: Option<String>,
    pub state_name: Option<String>,
    pub uf: Option<String>,
}

impl Location {
    /// Safety-measure icons in card order; `None` entries are omitted by
    /// the renderer
    pub fn icons(&self) -> [Option<Icon>; 4] {
        [
            self.mask.icon(),
            self.towel.icon(),
            self.fountain.icon(),
            self.locker_room.icon(),
        ]
    }
}

impl PlaceholderLocation {
    /// Single-line address for rendering
    pub fn address_line(&self) -> String {
        [
            self.street.as_deref(),
            self.region.as_deref(),
            self.city_name.as_deref(),
            self.state_name.as_deref(),
            self.uf.as_deref(),
        ]
        .iter()
        .flatten()
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }
}

impl LocationRecord {
    pub fn id(&self) -> i64 {
        match self {
            LocationRecord::Operating(l) => l.id,
            LocationRecord::Placeholder(p) => p.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            LocationRecord::Operating(l) => &l.title,
            LocationRecord::Placeholder(p) => &p.title,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            LocationRecord::Operating(l) => &l.content,
            LocationRecord::Placeholder(p) => &p.content,
        }
    }

    /// Whether the unit is operating; placeholders are never open
    pub fn is_open(&self) -> bool {
        match self {
            LocationRecord::Operating(l) => l.opened,
            LocationRecord::Placeholder(_) => false,
        }
    }

    /// Weekday-group schedules; placeholders have none
    pub fn schedules(&self) -> &[Schedule] {
        match self {
            LocationRecord::Operating(l) => &l.schedules,
            LocationRecord::Placeholder(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_with_opened_parses_as_operating() {
        let json = r#"{
            "id": 1,
            "title": "Unidade Centro",
            "content": "<p>Rua Principal, 100</p>",
            "opened": true,
            "mask": "required",
            "towel": "recommended",
            "fountain": "partial",
            "locker_room": "allowed",
            "schedules": [
                { "weekdays": "Seg. à Sex.", "hour": "06h às 22h" },
                { "weekdays": "Dom.", "hour": "Fechada" }
            ]
        }"#;

        let record: LocationRecord = serde_json::from_str(json).unwrap();
        match &record {
            LocationRecord::Operating(location) => {
                assert!(location.opened);
                assert_eq!(location.schedules.len(), 2);
                assert_eq!(location.schedules[0].weekdays, "Seg. à Sex.");
            }
            LocationRecord::Placeholder(_) => panic!("expected operating record"),
        }
        assert!(record.is_open());
    }

    #[test]
    fn test_record_without_opened_parses_as_placeholder() {
        let json = r#"{
            "id": 2,
            "title": "Unidade Bairro",
            "street": "Av. Paulista, 1000",
            "region": "Bela Vista",
            "city_name": "São Paulo",
            "state_name": "São Paulo",
            "uf": "SP"
        }"#;

        let record: LocationRecord = serde_json::from_str(json).unwrap();
        match &record {
            LocationRecord::Placeholder(p) => {
                assert_eq!(
                    p.address_line(),
                    "Av. Paulista, 1000 Bela Vista São Paulo São Paulo SP"
                );
            }
            LocationRecord::Operating(_) => panic!("expected placeholder record"),
        }
        assert!(!record.is_open());
        assert!(record.schedules().is_empty());
    }

    #[test]
    fn test_missing_schedules_defaults_to_empty() {
        let json = r#"{
            "id": 3,
            "title": "Unidade Norte",
            "content": "",
            "opened": false,
            "mask": "required",
            "towel": "required",
            "fountain": "not_allowed",
            "locker_room": "closed"
        }"#;

        let record: LocationRecord = serde_json::from_str(json).unwrap();
        assert!(record.schedules().is_empty());
        assert!(!record.is_open());
    }
}
