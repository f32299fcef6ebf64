use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A geographic coordinate pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True when both coordinates are finite and within valid ranges
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A park record in the catalog
///
/// Identity is the source-qualified `external_id` (e.g. "osm_way_123");
/// name, type, and location may be refreshed by re-ingestion, the
/// identifier never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Park {
    #[serde(rename = "externalId")]
    pub external_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "parkType")]
    pub park_type: String,
    pub source: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Park {
    pub fn location(&self) -> Point {
        Point::new(self.latitude, self.longitude)
    }
}

/// A raw park record from an external geospatial source, before it is
/// upserted into the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkCandidate {
    #[serde(rename = "externalId")]
    pub external_id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "parkType")]
    pub park_type: String,
}

impl ParkCandidate {
    /// Candidate name, falling back to a synthesized placeholder
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Park {}", self.external_id))
    }
}

/// A real-estate listing with derived park-proximity fields
///
/// The five proximity fields are never set independently; they are
/// written together from one `ProximityResult` via `apply_proximity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<f64>,
    #[serde(rename = "squareFeet", default)]
    pub square_feet: Option<u32>,
    #[serde(rename = "propertyType", default)]
    pub property_type: Option<String>,
    #[serde(rename = "listingDate", default)]
    pub listing_date: Option<DateTime<Utc>>,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(rename = "nearestParkName", default)]
    pub nearest_park_name: Option<String>,
    #[serde(rename = "nearestParkDistance", default)]
    pub nearest_park_distance: Option<f64>,
    #[serde(rename = "parkCount500m", default)]
    pub park_count_500m: Option<u32>,
    #[serde(rename = "parkCount1km", default)]
    pub park_count_1km: Option<u32>,
    #[serde(rename = "parkScore", default)]
    pub park_score: Option<f64>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_source() -> String {
    "manual".to_string()
}

impl Property {
    pub fn location(&self) -> Point {
        Point::new(self.latitude, self.longitude)
    }

    /// Write all proximity fields from a single scoring pass
    pub fn apply_proximity(&mut self, result: &ProximityResult) {
        self.nearest_park_name = result.nearest_park_name.clone();
        self.nearest_park_distance = result.nearest_park_distance;
        self.park_count_500m = Some(result.park_count_500m);
        self.park_count_1km = Some(result.park_count_1km);
        self.park_score = Some(result.park_score);
        self.updated_at = Some(Utc::now());
    }

    /// Null out all proximity fields together
    pub fn clear_proximity(&mut self) {
        self.nearest_park_name = None;
        self.nearest_park_distance = None;
        self.park_count_500m = None;
        self.park_count_1km = None;
        self.park_score = None;
        self.updated_at = Some(Utc::now());
    }
}

/// Output of one scoring pass over a catalog snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProximityResult {
    #[serde(rename = "nearestParkName")]
    pub nearest_park_name: Option<String>,
    #[serde(rename = "nearestParkDistance")]
    pub nearest_park_distance: Option<f64>,
    #[serde(rename = "parkCount500m")]
    pub park_count_500m: u32,
    #[serde(rename = "parkCount1km")]
    pub park_count_1km: u32,
    #[serde(rename = "parkScore")]
    pub park_score: f64,
}

impl ProximityResult {
    /// Result for an empty catalog: no nearest park, zero counts, zero score
    pub fn empty() -> Self {
        Self {
            nearest_park_name: None,
            nearest_park_distance: None,
            park_count_500m: 0,
            park_count_1km: 0,
            park_score: 0.0,
        }
    }
}

/// Insert/update counts reported after one ingestion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestSummary {
    pub inserted: usize,
    pub updated: usize,
}

impl IngestSummary {
    pub fn total(&self) -> usize {
        self.inserted + self.updated
    }
}

/// A park together with its distance from a query point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyPark {
    pub park: Park,
    #[serde(rename = "distanceMeters")]
    pub distance_meters: f64,
}
