// src/handlers/places.rs
// DOCUMENTATION: HTTP handler for place search
// PURPOSE: Parse requests, call services, return responses

use crate::errors::SearchError;
use crate::models::{MapDataResponse, SearchRequest};
use crate::services::{PlaceService, PlacesProvider};
use actix_web::{web, HttpResponse, Responder};

/// POST /api/search-places
/// Search places for the map view
pub async fn search_places(
    provider: web::Data<PlacesProvider>,
    body: web::Bytes,
) -> Result<impl Responder, SearchError> {
    // Checked before touching the body so every request gets the same answer
    if !provider.is_configured() {
        log::warn!("Rejecting place search: maps key not configured");
        return Err(SearchError::NotConfigured);
    }

    let request = parse_search_request(&body)?;

    let places = PlaceService::search_places(provider.get_ref(), request.query())
        .await
        .map_err(|e| {
            log::error!("Place search for {:?} failed: {}", request.query(), e);
            e
        })?;

    Ok(HttpResponse::Ok().json(MapDataResponse::new(places)))
}

/// Empty bodies and JSON `null` read as `{}`
fn parse_search_request(body: &[u8]) -> Result<SearchRequest, SearchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SearchRequest::default());
    }

    serde_json::from_slice::<Option<SearchRequest>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| SearchError::InvalidBody(e.to_string()))
}

/// Configuration for place routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").route("/search-places", web::post().to(search_places)));
}
