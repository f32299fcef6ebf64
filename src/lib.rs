//! Parkland Algo - Park-proximity scoring engine for the Parkland platform
//!
//! This library provides the core scoring engine used by the Parkland
//! real-estate API: geodesic distance between coordinates, a proximity
//! scorer that derives a 0-100 park score for a property against one
//! catalog snapshot, and an Overpass-backed park catalog with
//! identifier-keyed deduplication.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{geodesic_distance, GeoError, ProximityScorer};
pub use crate::models::{
    IngestSummary, NearbyPark, Park, ParkCandidate, Point, Property, ProximityResult,
};
pub use crate::services::{OverpassClient, ParkCatalog};
