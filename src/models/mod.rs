// Model exports
pub mod domain;

pub use domain::{
    IngestSummary, NearbyPark, Park, ParkCandidate, Point, Property, ProximityResult,
};
