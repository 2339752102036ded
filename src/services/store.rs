//! Location store
//!
//! Holds the authoritative, unfiltered location list obtained from a
//! single fetch, and derives the visible subset for a filter selection.

use crate::models::location::LocationRecord;
use crate::models::FilterState;
use crate::services::filter::compute_visible;
use crate::services::source::LocationSource;

/// The full location list, populated once at startup and never mutated.
#[derive(Debug, Clone, Default)]
pub struct LocationStore {
    all: Vec<LocationRecord>,
}

impl LocationStore {
    /// Fetch the list from the source. Failure is caught here, at the
    /// single network boundary: it is logged and the store stays empty,
    /// leaving the renderer with zero results.
    pub async fn load(source: &dyn LocationSource) -> Self {
        match source.fetch_locations().await {
            Ok(all) => {
                tracing::info!("Loaded {} locations", all.len());
                Self { all }
            }
            Err(err) => {
                tracing::error!("Failed to fetch locations: {}", err);
                Self::default()
            }
        }
    }

    /// The authoritative, unfiltered list
    pub fn all(&self) -> &[LocationRecord] {
        &self.all
    }

    /// The visible subset for the given filter selection, recomputed from
    /// the full list on every call
    pub fn visible(&self, filter: &FilterState) -> Vec<LocationRecord> {
        compute_visible(&self.all, filter)
    }

    /// The view after an explicit "clear filter": the full list in
    /// original order, closed units included
    pub fn cleared(&self) -> Vec<LocationRecord> {
        self.all.clone()
    }

    /// Count shown as "Resultados encontrados"
    pub fn results_found(&self, filter: &FilterState) -> usize {
        self.visible(filter).len()
    }
}
