// Core algorithm exports
pub mod analysis;
pub mod distance;
pub mod scorer;
pub mod scoring;

pub use analysis::{score_distribution, ScoreDistribution};
pub use distance::{geodesic_distance, validate_point, GeoError};
pub use scorer::ProximityScorer;
pub use scoring::{distance_term, park_score, quantity_bonus};
