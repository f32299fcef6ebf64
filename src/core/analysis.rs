use crate::models::Property;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bucket labels for the score histogram, in ascending order
pub const SCORE_BUCKETS: [&str; 5] = ["0-20", "21-40", "41-60", "61-80", "81-100"];

/// Summary statistics over properties with a computed park score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDistribution {
    #[serde(rename = "totalProperties")]
    pub total_properties: usize,
    #[serde(rename = "averageScore")]
    pub average_score: f64,
    #[serde(rename = "minScore")]
    pub min_score: f64,
    #[serde(rename = "maxScore")]
    pub max_score: f64,
    pub distribution: BTreeMap<String, usize>,
}

/// Compute the park-score distribution across a set of properties
///
/// Properties without a computed score are skipped. Returns `None` when
/// no property has a score yet. Buckets are upper-inclusive: a score of
/// exactly 20 lands in "0-20".
pub fn score_distribution(properties: &[Property]) -> Option<ScoreDistribution> {
    let scores: Vec<f64> = properties.iter().filter_map(|p| p.park_score).collect();

    if scores.is_empty() {
        return None;
    }

    let mut buckets: BTreeMap<String, usize> = SCORE_BUCKETS
        .iter()
        .map(|label| (label.to_string(), 0))
        .collect();

    for &score in &scores {
        let label = if score <= 20.0 {
            "0-20"
        } else if score <= 40.0 {
            "21-40"
        } else if score <= 60.0 {
            "41-60"
        } else if score <= 80.0 {
            "61-80"
        } else {
            "81-100"
        };
        *buckets.entry(label.to_string()).or_insert(0) += 1;
    }

    let total = scores.len();
    let sum: f64 = scores.iter().sum();
    let min = scores.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    Some(ScoreDistribution {
        total_properties: total,
        average_score: ((sum / total as f64) * 100.0).round() / 100.0,
        min_score: min,
        max_score: max,
        distribution: buckets,
    })
}
