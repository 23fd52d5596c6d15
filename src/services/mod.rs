// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod google_places_client;
pub mod place_service;

pub use google_places_client::*;
pub use place_service::*;
