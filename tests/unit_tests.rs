// Unit tests for Parkland Algo

use parkland_algo::core::{
    distance::{geodesic_distance, GeoError},
    scoring::{distance_term, park_score, quantity_bonus},
    ProximityScorer,
};
use parkland_algo::models::{Park, Point, ProximityResult};
use chrono::Utc;

fn create_park(external_id: &str, name: &str, lat: f64, lon: f64) -> Park {
    Park {
        external_id: external_id.to_string(),
        name: name.to_string(),
        latitude: lat,
        longitude: lon,
        park_type: "park".to_string(),
        source: "openstreetmap".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn test_distance_zero_for_identical_points() {
    let point = Point::new(40.7128, -74.0060);
    let distance = geodesic_distance(&point, &point).unwrap();
    assert!(distance.abs() < 1e-9);
}

#[test]
fn test_distance_symmetry() {
    let pairs = [
        (Point::new(40.7128, -74.0060), Point::new(40.7135, -74.0070)),
        (Point::new(51.5074, -0.1278), Point::new(48.8566, 2.3522)),
        (Point::new(-33.8688, 151.2093), Point::new(35.6762, 139.6503)),
    ];

    for (a, b) in pairs {
        let ab = geodesic_distance(&a, &b).unwrap();
        let ba = geodesic_distance(&b, &a).unwrap();
        assert!((ab - ba).abs() < 1e-9, "asymmetric: {} vs {}", ab, ba);
    }
}

#[test]
fn test_distance_manhattan_to_brooklyn() {
    // Manhattan to Brooklyn is approximately 5-10 km
    let manhattan = Point::new(40.7580, -73.9855);
    let brooklyn = Point::new(40.6782, -73.9442);

    let distance = geodesic_distance(&manhattan, &brooklyn).unwrap();
    assert!(distance > 5_000.0 && distance < 15_000.0);
}

#[test]
fn test_invalid_coordinates_rejected() {
    let ok = Point::new(40.0, -74.0);

    for bad in [
        Point::new(90.5, 0.0),
        Point::new(-91.0, 0.0),
        Point::new(0.0, 181.0),
        Point::new(0.0, -180.5),
        Point::new(f64::NAN, 0.0),
        Point::new(0.0, f64::NEG_INFINITY),
    ] {
        let err = geodesic_distance(&ok, &bad).unwrap_err();
        assert!(matches!(err, GeoError::InvalidCoordinate { .. }));
    }
}

#[test]
fn test_distance_term_boundary_inclusivity() {
    // A park at exactly 200m yields 100, not 80; analogous at every step
    assert_eq!(distance_term(200.0), 100.0);
    assert_eq!(distance_term(200.000001), 80.0);
    assert_eq!(distance_term(500.0), 80.0);
    assert_eq!(distance_term(500.000001), 60.0);
    assert_eq!(distance_term(1000.0), 60.0);
    assert_eq!(distance_term(2000.0), 40.0);
    assert_eq!(distance_term(2000.000001), 20.0);
}

#[test]
fn test_quantity_bonus_saturation() {
    // With 4 or more parks within 1km the bonus is always exactly 20
    for count in 4..50 {
        assert_eq!(quantity_bonus(count), 20.0);
    }
    assert_eq!(quantity_bonus(3), 15.0);
}

#[test]
fn test_score_formula_examples() {
    // Nearest within 200m, 1 park within 1km: min(105 * 0.83, 100)
    assert_eq!(park_score(93.0, 1), 87.15);
    // Nearest at exactly 1500m, 3 parks within 1km: 55 * 0.83
    assert_eq!(park_score(1500.0, 3), 45.65);
}

#[test]
fn test_score_always_in_range() {
    let scorer = ProximityScorer::new();
    let location = Point::new(40.7128, -74.0060);

    let catalogs: Vec<Vec<Park>> = vec![
        vec![],
        vec![create_park("osm_way_1", "A", 40.7135, -74.0070)],
        (0..25)
            .map(|i| {
                create_park(
                    &format!("osm_way_{}", i),
                    &format!("Park {}", i),
                    40.7128 + (i as f64) * 0.002,
                    -74.0060,
                )
            })
            .collect(),
    ];

    for parks in catalogs {
        let result = scorer.score(&location, &parks).unwrap();
        assert!(
            (0.0..=100.0).contains(&result.park_score),
            "score {} out of range",
            result.park_score
        );
        assert!(result.park_count_500m <= result.park_count_1km);
    }
}

#[test]
fn test_score_zero_only_for_empty_catalog() {
    let scorer = ProximityScorer::new();
    let location = Point::new(40.7128, -74.0060);

    let empty = scorer.score(&location, &[]).unwrap();
    assert_eq!(empty, ProximityResult::empty());
    assert_eq!(empty.park_score, 0.0);

    // Even a very distant park keeps the score above zero (D=20 floor)
    let far = vec![create_park("osm_way_1", "Remote Park", 41.5, -74.0)];
    let result = scorer.score(&location, &far).unwrap();
    assert!(result.park_score > 0.0);
    assert_eq!(result.park_score, 16.6);
}

#[test]
fn test_deterministic_tie_break() {
    let scorer = ProximityScorer::new();
    let location = Point::new(40.7128, -74.0060);
    let parks = vec![
        create_park("osm_way_1", "Alpha Park", 40.7135, -74.0070),
        create_park("osm_way_2", "Beta Park", 40.7135, -74.0070),
    ];

    for _ in 0..10 {
        let result = scorer.score(&location, &parks).unwrap();
        assert_eq!(result.nearest_park_name.as_deref(), Some("Alpha Park"));
    }

    // Reversing the catalog order reverses the winner
    let reversed: Vec<Park> = parks.iter().rev().cloned().collect();
    let result = scorer.score(&location, &reversed).unwrap();
    assert_eq!(result.nearest_park_name.as_deref(), Some("Beta Park"));
}
