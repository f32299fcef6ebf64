use crate::models::Point;
use geo::GeodesicDistance;
use thiserror::Error;

/// Errors raised by the distance engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

/// Validate a point, rejecting non-finite or out-of-range coordinates
///
/// Bad coordinates are rejected rather than clamped so they can never
/// silently corrupt a score.
#[inline]
pub fn validate_point(point: &Point) -> Result<(), GeoError> {
    if point.is_valid() {
        Ok(())
    } else {
        Err(GeoError::InvalidCoordinate {
            latitude: point.latitude,
            longitude: point.longitude,
        })
    }
}

/// Calculate the geodesic distance between two points in meters
///
/// Uses Karney's algorithm on the WGS-84 ellipsoid (via the `geo` crate),
/// not a spherical haversine approximation. Symmetric, and exactly zero
/// for identical points.
///
/// # Arguments
/// * `a` - First point in decimal degrees
/// * `b` - Second point in decimal degrees
///
/// # Returns
/// Distance in meters, or `GeoError::InvalidCoordinate` if either point
/// is outside valid latitude/longitude ranges or non-finite.
pub fn geodesic_distance(a: &Point, b: &Point) -> Result<f64, GeoError> {
    validate_point(a)?;
    validate_point(b)?;

    // geo points are (x, y) = (longitude, latitude)
    let pa = geo::Point::new(a.longitude, a.latitude);
    let pb = geo::Point::new(b.longitude, b.latitude);

    Ok(pa.geodesic_distance(&pb))
}
