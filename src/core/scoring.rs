//! Park score model
//!
//! A two-term, clipped piecewise-linear model:
//!
//! ```text
//! score = round(min((distance_term + quantity_bonus) * 0.83, 100), 2)
//! ```
//!
//! The distance term is a step function on the nearest-park distance with
//! inclusive upper bounds; the quantity bonus rewards parks within 1 km
//! and saturates at 20. The 0.83 compression factor is a compatibility
//! constant and must not change.

/// Compression factor applied to the raw (distance + quantity) sum
pub const SCORE_COMPRESSION: f64 = 0.83;

/// Saturation ceiling for the quantity bonus
pub const MAX_QUANTITY_BONUS: f64 = 20.0;

/// Points awarded per park within 1 km
pub const QUANTITY_BONUS_PER_PARK: f64 = 5.0;

/// Distance term for the nearest park, in score points
///
/// Step boundaries are inclusive on the upper side: a park at exactly
/// 200 m still scores 100.
#[inline]
pub fn distance_term(nearest_meters: f64) -> f64 {
    if nearest_meters <= 200.0 {
        100.0
    } else if nearest_meters <= 500.0 {
        80.0
    } else if nearest_meters <= 1000.0 {
        60.0
    } else if nearest_meters <= 2000.0 {
        40.0
    } else {
        20.0
    }
}

/// Quantity bonus for parks within 1 km, saturating at 20
///
/// Only the 1 km count feeds the score; the 500 m count is reported
/// separately but is advisory only.
#[inline]
pub fn quantity_bonus(park_count_1km: u32) -> f64 {
    (park_count_1km as f64 * QUANTITY_BONUS_PER_PARK).min(MAX_QUANTITY_BONUS)
}

/// Final park score (0-100, rounded to 2 decimal places)
#[inline]
pub fn park_score(nearest_meters: f64, park_count_1km: u32) -> f64 {
    let raw = (distance_term(nearest_meters) + quantity_bonus(park_count_1km)) * SCORE_COMPRESSION;
    round2(raw.min(100.0))
}

#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
