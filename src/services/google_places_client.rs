// src/services/google_places_client.rs
// DOCUMENTATION: Google Places API client
// PURPOSE: Handle communication with Google Places Text Search

use crate::errors::SearchError;
use crate::models::{LatLng, PlaceSummary, Rating};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

/// Anything able to answer a free-text places query
/// DOCUMENTATION: Results are returned undecoded, in upstream order. Each entry is
/// only decoded when it is projected, so malformed entries past the cut-off are harmless
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    async fn text_search(&self, query: &str) -> Result<Vec<Value>, SearchError>;
}

/// Google Places API client
/// DOCUMENTATION: Handles authentication and API calls to Google Places
pub struct GooglePlacesClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Places API key
    api_key: String,
    /// Base URL for Google Places API
    base_url: String,
}

/// Response from Google Places Text Search
#[derive(Debug, Deserialize)]
pub struct GooglePlacesResponse {
    /// Results array from API
    #[serde(default)]
    pub results: Vec<Value>,
    /// Status of the API call
    pub status: String,
    /// Error message (if status is not OK)
    pub error_message: Option<String>,
}

/// The fields of a Text Search result this service cares about
#[derive(Debug, Clone, Deserialize)]
pub struct GooglePlace {
    pub name: String,
    pub formatted_address: Option<String>,
    pub rating: Option<f64>,
    pub geometry: GoogleGeometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleGeometry {
    pub location: LatLng,
}

impl GooglePlace {
    /// Decode one raw result entry
    pub fn from_value(value: Value) -> Result<Self, SearchError> {
        serde_json::from_value(value).map_err(|e| SearchError::Parse(e.to_string()))
    }

    /// Project onto the four fields sent to the map view
    pub fn into_summary(self) -> PlaceSummary {
        PlaceSummary {
            name: self.name,
            address: self.formatted_address,
            rating: Rating::from(self.rating),
            location: self.geometry.location,
        }
    }
}

impl GooglePlacesClient {
    /// Create new Google Places API client
    pub fn new(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Perform a text search
    /// DOCUMENTATION: GET {base}/textsearch/json?query=..&key=..
    ///
    /// # Returns
    /// Raw result entries; `ZERO_RESULTS` yields an empty list
    pub async fn text_search(&self, query: &str) -> Result<Vec<Value>, SearchError> {
        let url = format!("{}/textsearch/json", self.base_url);

        log::debug!("Google Places text search: query={:?}", query);

        let response = self
            .client
            .get(&url)
            .query(&[("query", query), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                log::error!("Google Places API request failed: {}", e);
                SearchError::Request(e.without_url().to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            log::error!("Google Places API HTTP error {}", status);
            return Err(SearchError::Request(format!(
                "HTTP Error: {}",
                status.as_u16()
            )));
        }

        let api_response: GooglePlacesResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse Google Places response: {}", e);
            SearchError::Parse(e.without_url().to_string())
        })?;

        match api_response.status.as_str() {
            "OK" | "ZERO_RESULTS" => {
                log::info!(
                    "Google Places search returned {} results",
                    api_response.results.len()
                );
                Ok(api_response.results)
            }
            other => {
                log::error!(
                    "Google Places API status {}: {}",
                    other,
                    api_response.error_message.as_deref().unwrap_or("-")
                );
                Err(SearchError::UpstreamStatus {
                    status: other.to_string(),
                    message: api_response.error_message,
                })
            }
        }
    }
}

#[async_trait]
impl PlaceSearch for GooglePlacesClient {
    async fn text_search(&self, query: &str) -> Result<Vec<Value>, SearchError> {
        GooglePlacesClient::text_search(self, query).await
    }
}
