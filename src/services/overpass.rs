use crate::models::ParkCandidate;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Source tag applied to parks ingested from Overpass
pub const OVERPASS_SOURCE: &str = "openstreetmap";

/// Errors that can occur when fetching park data from the Overpass API
#[derive(Debug, Error)]
pub enum OverpassError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Overpass API client
///
/// Fetches park and green-space candidates from OpenStreetMap around a
/// center point. The request carries a bounded timeout; callers on the
/// scoring path use `fetch_parks_or_empty`, which fails closed instead
/// of propagating fetch errors.
pub struct OverpassClient {
    endpoint: String,
    client: Client,
}

impl OverpassClient {
    /// Create a new Overpass client with a request timeout
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { endpoint, client }
    }

    /// Fetch park candidates around a center point
    ///
    /// Queries `leisure=park` ways and relations and
    /// `landuse=recreation_ground` ways within `radius_km`, using the
    /// element center as the park location. Elements without a resolved
    /// center are skipped.
    pub async fn fetch_parks(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    ) -> Result<Vec<ParkCandidate>, OverpassError> {
        let radius_m = radius_km * 1000.0;
        let query = format!(
            r#"[out:json][timeout:25];
(
  way["leisure"="park"](around:{radius_m},{latitude},{longitude});
  way["landuse"="recreation_ground"](around:{radius_m},{latitude},{longitude});
  relation["leisure"="park"](around:{radius_m},{latitude},{longitude});
);
out center;"#
        );

        tracing::debug!(
            "Fetching parks from Overpass around ({}, {}) within {}km",
            latitude,
            longitude,
            radius_km
        );

        let response = self.client.post(&self.endpoint).body(query).send().await?;

        if !response.status().is_success() {
            return Err(OverpassError::ApiError(format!(
                "Failed to fetch parks: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;
        let candidates = parse_elements(&json)?;

        tracing::info!("Fetched {} park candidates from Overpass", candidates.len());

        Ok(candidates)
    }

    /// Fail-closed variant of `fetch_parks`
    ///
    /// A failed or timed-out fetch is logged and reported as zero new
    /// parks; the error never reaches the scoring path.
    pub async fn fetch_parks_or_empty(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    ) -> Vec<ParkCandidate> {
        match self.fetch_parks(latitude, longitude, radius_km).await {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::error!("Error fetching parks from Overpass API: {}", e);
                Vec::new()
            }
        }
    }
}

/// Parse Overpass `out center` elements into park candidates
fn parse_elements(json: &Value) -> Result<Vec<ParkCandidate>, OverpassError> {
    let elements = json
        .get("elements")
        .and_then(|e| e.as_array())
        .ok_or_else(|| OverpassError::InvalidResponse("Missing elements array".into()))?;

    let mut candidates = Vec::new();

    for element in elements {
        let element_type = element.get("type").and_then(|t| t.as_str());
        if !matches!(element_type, Some("way") | Some("relation")) {
            continue;
        }

        // Ways and relations carry their location under "center"
        let center = element.get("center");
        let latitude = center.and_then(|c| c.get("lat")).and_then(|v| v.as_f64());
        let longitude = center.and_then(|c| c.get("lon")).and_then(|v| v.as_f64());
        let (latitude, longitude) = match (latitude, longitude) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => continue,
        };

        let id = element.get("id").and_then(|v| v.as_u64());
        let id = match id {
            Some(id) => id,
            None => continue,
        };

        let tags = element.get("tags");
        let name = tags
            .and_then(|t| t.get("name"))
            .and_then(|n| n.as_str())
            .map(|n| n.to_string());
        let park_type = tags
            .and_then(|t| t.get("leisure").or_else(|| t.get("landuse")))
            .and_then(|v| v.as_str())
            .unwrap_or("park")
            .to_string();

        candidates.push(ParkCandidate {
            external_id: format!("osm_{}_{}", element_type.unwrap_or("way"), id),
            name,
            latitude,
            longitude,
            park_type,
        });
    }

    Ok(candidates)
}
