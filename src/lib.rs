//! Reabertura - gym unit reopening finder
//!
//! Fetches the published list of gym units once, classifies each record as
//! operating or address-only, and filters the list by training period and
//! open/closed status. Rendering is a thin collaborator over the ordered
//! subset this crate computes.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
