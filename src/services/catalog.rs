use crate::models::{IngestSummary, Park, ParkCandidate};
use chrono::Utc;
use std::collections::HashMap;

/// Outcome of a single upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// In-memory park catalog, keyed by external identifier
///
/// Iteration order is stable insertion order: a scoring pass over a
/// snapshot is reproducible, and nearest-park tie-breaks are
/// deterministic. Identifier-based upsert is the only deduplication
/// mechanism; two near-identical parks from different sources stay
/// separate records.
#[derive(Debug, Clone, Default)]
pub struct ParkCatalog {
    parks: Vec<Park>,
    index: HashMap<String, usize>,
}

impl ParkCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.parks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parks.is_empty()
    }

    /// Parks in insertion order
    pub fn parks(&self) -> &[Park] {
        &self.parks
    }

    /// Clone the current catalog contents as a snapshot for one scoring
    /// pass
    pub fn snapshot(&self) -> Vec<Park> {
        self.parks.clone()
    }

    pub fn get(&self, external_id: &str) -> Option<&Park> {
        self.index.get(external_id).map(|&i| &self.parks[i])
    }

    /// Insert a candidate, or refresh the mutable fields of the park
    /// already stored under its external identifier
    ///
    /// Updates overwrite name, type, and location and refresh
    /// `updated_at`; identity and catalog position never change.
    pub fn upsert(&mut self, candidate: ParkCandidate, source: &str) -> UpsertOutcome {
        let now = Utc::now();

        if let Some(&position) = self.index.get(&candidate.external_id) {
            let park = &mut self.parks[position];
            park.name = candidate.display_name();
            park.latitude = candidate.latitude;
            park.longitude = candidate.longitude;
            park.park_type = candidate.park_type;
            park.updated_at = now;
            return UpsertOutcome::Updated;
        }

        let park = Park {
            external_id: candidate.external_id.clone(),
            name: candidate.display_name(),
            latitude: candidate.latitude,
            longitude: candidate.longitude,
            park_type: candidate.park_type,
            source: source.to_string(),
            created_at: now,
            updated_at: now,
        };

        self.index.insert(candidate.external_id, self.parks.len());
        self.parks.push(park);
        UpsertOutcome::Inserted
    }

    /// Upsert a batch of candidates, reporting insert/update counts
    pub fn ingest(&mut self, candidates: Vec<ParkCandidate>, source: &str) -> IngestSummary {
        let mut summary = IngestSummary::default();

        for candidate in candidates {
            match self.upsert(candidate, source) {
                UpsertOutcome::Inserted => summary.inserted += 1,
                UpsertOutcome::Updated => summary.updated += 1,
            }
        }

        tracing::info!(
            "Catalog ingest from '{}': {} inserted, {} updated, {} total parks",
            source,
            summary.inserted,
            summary.updated,
            self.parks.len()
        );

        summary
    }
}
