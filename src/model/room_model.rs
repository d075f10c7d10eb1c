//! The incremental room model.
//!
//! The stateful, long-lived aggregator fed one plane observation at a time by
//! the tracking collaborator. Each ingest classifies the observation, runs
//! the merge engine against the retained collection, and recomputes the
//! aggregate statistics. This gives responsive per-frame feedback; the
//! authoritative recomputed-from-scratch view lives in
//! [`crate::structure::StructureValidator`].
//!
//! Single-writer: exactly one producer calls [`RoomModel::ingest`]. Readers
//! on other threads should be handed [`RoomSnapshot`] values, never the live
//! collection.

use serde::{Deserialize, Serialize};

use crate::classify::classify;
use crate::config::{ClassifierSection, CompletenessSection, MergeSection};
use crate::core::{Point2D, PlaneObservation, Rect2D};

use super::merge::{merge_or_insert, MergeOutcome};
use super::stats::RoomStats;
use super::surface::{DetectedSurface, SurfaceId, SurfaceType};

/// What the model did with an ingested observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Folded into an existing retained surface.
    Merged,
    /// Admitted as a new retained surface.
    Added,
    /// Discarded (sub-threshold area or unknown alignment); no state change.
    Discarded,
}

/// One immutable copy of the model's published outputs.
///
/// The publish mechanism for cross-thread consumers: recompute, snapshot,
/// hand the copy out. Readers never observe a partially updated state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    /// Aggregate statistics.
    pub stats: RoomStats,
    /// Scan progress in [0, 1].
    pub scan_progress: f32,
    /// Whether the completeness criteria hold.
    pub is_complete: bool,
    /// Human-readable summary for display.
    pub summary: String,
}

/// Incremental, deduplicating room model.
pub struct RoomModel {
    classifier: ClassifierSection,
    merge: MergeSection,
    completeness: CompletenessSection,
    surfaces: Vec<DetectedSurface>,
    stats: RoomStats,
    next_id: u64,
}

impl RoomModel {
    /// Create an empty model with the given configuration sections.
    pub fn new(
        classifier: ClassifierSection,
        merge: MergeSection,
        completeness: CompletenessSection,
    ) -> Self {
        Self {
            classifier,
            merge,
            completeness,
            surfaces: Vec::new(),
            stats: RoomStats::default(),
            next_id: 0,
        }
    }

    /// The retained surface collection, in admission order.
    pub fn surfaces(&self) -> &[DetectedSurface] {
        &self.surfaces
    }

    /// Current aggregate statistics.
    ///
    /// Never more than one ingest stale: recomputed after every accepted
    /// observation.
    pub fn stats(&self) -> &RoomStats {
        &self.stats
    }

    /// Feed one plane observation into the model.
    ///
    /// Classifies, deduplicates, and recomputes statistics. Observations
    /// below the area threshold or with unrecognized alignment are discarded
    /// without any state change.
    pub fn ingest(&mut self, observation: &PlaneObservation) -> IngestOutcome {
        let classification = classify(observation, &self.classifier);
        let Some(kind) = SurfaceType::from_classification(&classification) else {
            log::debug!("discarding observation {:?}: unknown alignment", observation.id);
            return IngestOutcome::Discarded;
        };

        let candidate = self.build_candidate(observation, kind);
        let id_counter = &mut self.next_id;
        let mut next_id = || {
            let id = SurfaceId(*id_counter);
            *id_counter += 1;
            id
        };

        let outcome = match merge_or_insert(&mut self.surfaces, candidate, &self.merge, &mut next_id)
        {
            MergeOutcome::Rejected => return IngestOutcome::Discarded,
            MergeOutcome::Merged(_) => IngestOutcome::Merged,
            MergeOutcome::Inserted(_) => IngestOutcome::Added,
        };

        self.stats = RoomStats::recompute(&self.surfaces);
        outcome
    }

    /// Whether enough evidence has accumulated to consider scanning done.
    ///
    /// Requires at least one floor, the configured wall count, and the
    /// configured accumulated floor area (5.0 m² by default, deliberately
    /// stricter than the batch validator's acceptance area).
    pub fn is_complete(&self) -> bool {
        self.stats.floor_count >= 1
            && self.stats.wall_count >= self.completeness.min_wall_count
            && self.stats.room_area >= self.completeness.min_complete_area
    }

    /// Scan progress in [0, 1]: mean of the clamped completeness ratios.
    ///
    /// Reaches 1.0 exactly when [`RoomModel::is_complete`] holds.
    pub fn scan_progress(&self) -> f32 {
        let floor_ratio = (self.stats.floor_count as f32).min(1.0);
        let wall_ratio =
            (self.stats.wall_count as f32 / self.completeness.min_wall_count.max(1) as f32)
                .min(1.0);
        let area_ratio = (self.stats.room_area / self.completeness.min_complete_area).min(1.0);
        (floor_ratio + wall_ratio + area_ratio) / 3.0
    }

    /// Human-readable summary, e.g. `"Room: 12.3m², 4 walls, 1 floor"`.
    ///
    /// Display only; not part of the algorithmic contract.
    pub fn summary(&self) -> String {
        self.stats.summary()
    }

    /// One immutable copy of the published outputs.
    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            stats: self.stats,
            scan_progress: self.scan_progress(),
            is_complete: self.is_complete(),
            summary: self.summary(),
        }
    }

    /// Clear all surfaces and statistics. Idempotent.
    pub fn reset(&mut self) {
        if !self.surfaces.is_empty() {
            log::info!("room model reset: dropping {} surfaces", self.surfaces.len());
        }
        self.surfaces.clear();
        self.stats = RoomStats::default();
    }

    fn build_candidate(
        &self,
        observation: &PlaneObservation,
        kind: SurfaceType,
    ) -> DetectedSurface {
        let position = observation.position();
        DetectedSurface {
            id: SurfaceId(0), // assigned on admission
            kind,
            anchor_position: position,
            bounds: Rect2D::centered(
                Point2D::new(position.x, position.z),
                observation.width,
                observation.height,
            ),
            confidence: observation.confidence.unwrap_or(1.0),
            updated_at_us: observation.timestamp_us,
            area: observation.area(),
            is_significant: false, // decided by the merge engine
        }
    }
}
