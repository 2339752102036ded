//! Remote location source

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::location::{LocationList, LocationRecord};

/// Provider of the full location list. The store consumes it exactly once
/// per run.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationSource: Send + Sync {
    async fn fetch_locations(&self) -> AppResult<Vec<LocationRecord>>;
}

/// HTTP source reading the `{ "locations": [...] }` document from a
/// single GET endpoint. No retries and no timeout are configured.
#[derive(Clone)]
pub struct HttpLocationSource {
    client: reqwest::Client,
    url: String,
}

impl HttpLocationSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl LocationSource for HttpLocationSource {
    async fn fetch_locations(&self) -> AppResult<Vec<LocationRecord>> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let list: LocationList = serde_json::from_slice(&body)?;
        Ok(list.locations)
    }
}
