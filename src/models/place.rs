// src/models/place.rs
// DOCUMENTATION: Request and response payloads for place search
// PURPOSE: Wire types shared between handlers and services

use serde::{Deserialize, Serialize, Serializer};

/// Sentinel sent to the front-end for places without a rating
pub const UNRATED: &str = "N/A";

/// Body of POST /api/search-places
/// DOCUMENTATION: `query` may be absent or null, both mean an empty query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    query: Option<String>,
}

impl SearchRequest {
    /// Query text handed to the upstream provider
    pub fn query(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }
}

/// Coordinates as the map widget expects them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Upstream rating, or the lack of one
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rating {
    Score(f64),
    Unrated,
}

impl From<Option<f64>> for Rating {
    fn from(value: Option<f64>) -> Self {
        value.map(Rating::Score).unwrap_or(Rating::Unrated)
    }
}

// Serialized as a bare number or the "N/A" string.
impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Rating::Score(score) => serializer.serialize_f64(*score),
            Rating::Unrated => serializer.serialize_str(UNRATED),
        }
    }
}

/// One entry of the map data list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceSummary {
    pub name: String,
    pub address: Option<String>,
    pub rating: Rating,
    pub location: LatLng,
}

/// Successful search payload: `{"type": "map_data", "data": [...]}`
#[derive(Debug, Serialize)]
pub struct MapDataResponse {
    #[serde(rename = "type")]
    pub type_: &'static str,
    pub data: Vec<PlaceSummary>,
}

impl MapDataResponse {
    pub fn new(data: Vec<PlaceSummary>) -> Self {
        Self {
            type_: "map_data",
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_request_defaults() {
        let missing: SearchRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing.query(), "");

        let null: SearchRequest = serde_json::from_value(json!({ "query": null })).unwrap();
        assert_eq!(null.query(), "");

        let extra: SearchRequest =
            serde_json::from_value(json!({ "query": "tacos", "lang": "es" })).unwrap();
        assert_eq!(extra.query(), "tacos");
    }

    #[test]
    fn test_rating_serialization() {
        assert_eq!(serde_json::to_value(Rating::Score(4.5)).unwrap(), json!(4.5));
        assert_eq!(serde_json::to_value(Rating::Unrated).unwrap(), json!("N/A"));
        assert_eq!(Rating::from(None), Rating::Unrated);
    }

    #[test]
    fn test_map_data_shape() {
        let response = MapDataResponse::new(vec![PlaceSummary {
            name: "Mirador".to_string(),
            address: None,
            rating: Rating::Unrated,
            location: LatLng {
                lat: 19.43,
                lng: -99.13,
            },
        }]);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "type": "map_data",
                "data": [{
                    "name": "Mirador",
                    "address": null,
                    "rating": "N/A",
                    "location": { "lat": 19.43, "lng": -99.13 }
                }]
            })
        );
    }
}
