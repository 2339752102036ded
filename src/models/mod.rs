//! Domain models

pub mod enums;
pub mod filter;
pub mod location;
pub mod period;
pub mod schedule;

pub use enums::{FountainPolicy, Icon, LockerRoomPolicy, MaskPolicy, TowelPolicy};
pub use filter::FilterState;
pub use location::{Location, LocationList, LocationRecord, PlaceholderLocation};
pub use period::Period;
pub use schedule::{ParsedHours, Schedule};
