use crate::core::distance::{geodesic_distance, GeoError};
use crate::core::scoring::park_score;
use crate::models::{NearbyPark, Park, Point, ProximityResult};

/// Proximity scorer - computes a property's park-proximity facts against
/// one catalog snapshot
///
/// # Pass
/// 1. Geodesic distance to every park (O(n) full scan)
/// 2. Nearest-park selection (first encountered wins on ties)
/// 3. Inclusive radius counts at 500 m and 1 km
/// 4. Score derivation from the piecewise model
///
/// The scorer is pure and reentrant; it holds no lock and never touches
/// storage. Callers persist the result and serialize read-score-write
/// sequences themselves if they need a consistent view.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProximityScorer;

impl ProximityScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score one property location against a catalog snapshot
    ///
    /// An empty catalog is a defined edge case and yields the zero result,
    /// not an error. Any invalid coordinate (the property's or a park's)
    /// aborts the whole call; partial results are never returned.
    pub fn score(&self, location: &Point, parks: &[Park]) -> Result<ProximityResult, GeoError> {
        if parks.is_empty() {
            return Ok(ProximityResult::empty());
        }

        let distances = self.distances(location, parks)?;

        // First encountered wins on ties: strict less-than keeps the
        // earliest catalog entry as nearest.
        let mut nearest_index = 0;
        let mut nearest_distance = distances[0];
        for (index, &distance) in distances.iter().enumerate().skip(1) {
            if distance < nearest_distance {
                nearest_index = index;
                nearest_distance = distance;
            }
        }

        // Independent tallies over the full set, both boundaries inclusive
        let park_count_500m = distances.iter().filter(|&&d| d <= 500.0).count() as u32;
        let park_count_1km = distances.iter().filter(|&&d| d <= 1000.0).count() as u32;

        Ok(ProximityResult {
            nearest_park_name: Some(parks[nearest_index].name.clone()),
            nearest_park_distance: Some(nearest_distance),
            park_count_500m,
            park_count_1km,
            park_score: park_score(nearest_distance, park_count_1km),
        })
    }

    /// Parks within `radius_meters` of a location, sorted by distance
    ///
    /// Distances are rounded to 2 decimal places. Same coordinate-error
    /// semantics as `score`.
    pub fn nearby_parks(
        &self,
        location: &Point,
        parks: &[Park],
        radius_meters: f64,
    ) -> Result<Vec<NearbyPark>, GeoError> {
        let distances = self.distances(location, parks)?;

        let mut nearby: Vec<NearbyPark> = parks
            .iter()
            .zip(distances)
            .filter(|(_, distance)| *distance <= radius_meters)
            .map(|(park, distance)| NearbyPark {
                park: park.clone(),
                distance_meters: (distance * 100.0).round() / 100.0,
            })
            .collect();

        nearby.sort_by(|a, b| {
            a.distance_meters
                .partial_cmp(&b.distance_meters)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(nearby)
    }

    fn distances(&self, location: &Point, parks: &[Park]) -> Result<Vec<f64>, GeoError> {
        parks
            .iter()
            .map(|park| geodesic_distance(location, &park.location()))
            .collect()
    }
}
