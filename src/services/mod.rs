// Service exports
pub mod catalog;
pub mod overpass;

pub use catalog::{ParkCatalog, UpsertOutcome};
pub use overpass::{OverpassClient, OverpassError, OVERPASS_SOURCE};
