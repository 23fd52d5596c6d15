// src/services/place_service.rs
// DOCUMENTATION: Business logic for place search
// PURPOSE: Intermediary between the handler and the places provider

use crate::config::Config;
use crate::errors::SearchError;
use crate::models::PlaceSummary;
use crate::services::{GooglePlace, GooglePlacesClient, PlaceSearch};
use serde_json::Value;
use std::sync::Arc;

/// Upper bound on places sent to the map view
pub const MAX_PLACES: usize = 5;

/// Process-wide handle to the places provider
/// DOCUMENTATION: Built once at startup and never mutated. Empty when no
/// maps key was supplied
#[derive(Clone, Default)]
pub struct PlacesProvider {
    inner: Option<Arc<dyn PlaceSearch>>,
}

impl PlacesProvider {
    pub fn new(provider: Arc<dyn PlaceSearch>) -> Self {
        Self {
            inner: Some(provider),
        }
    }

    pub fn unconfigured() -> Self {
        Self::default()
    }

    /// Google-backed provider when GMAPS_KEY is set
    pub fn from_config(config: &Config) -> Self {
        match &config.gmaps_key {
            Some(key) => Self::new(Arc::new(GooglePlacesClient::new(
                key.clone(),
                config.gmaps_base_url.as_str(),
            ))),
            None => Self::unconfigured(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.inner.is_some()
    }

    pub fn get(&self) -> Option<&dyn PlaceSearch> {
        self.inner.as_deref()
    }
}

pub struct PlaceService;

impl PlaceService {
    /// Run a text search and reshape the leading results
    /// DOCUMENTATION: A missing provider fails before any upstream traffic
    pub async fn search_places(
        provider: &PlacesProvider,
        query: &str,
    ) -> Result<Vec<PlaceSummary>, SearchError> {
        let provider = provider.get().ok_or(SearchError::NotConfigured)?;

        let results = provider.text_search(query).await?;
        Self::summarize(results)
    }

    /// Keep the first `MAX_PLACES` entries, in upstream order
    pub fn summarize(results: Vec<Value>) -> Result<Vec<PlaceSummary>, SearchError> {
        results
            .into_iter()
            .take(MAX_PLACES)
            .map(|raw| GooglePlace::from_value(raw).map(GooglePlace::into_summary))
            .collect()
    }
}
