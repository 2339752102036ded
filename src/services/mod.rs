//! Business logic services

pub mod filter;
pub mod source;
pub mod store;

pub use filter::{compute_visible, is_open_in_period};
pub use source::{HttpLocationSource, LocationSource};
pub use store::LocationStore;
