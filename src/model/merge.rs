//! Surface deduplication (merge engine).
//!
//! Tracking refines its estimate of a physical surface over time, re-reporting
//! it as a slightly moved, slightly resized plane. Without deduplication the
//! same wall would be counted many times. The merge engine folds a new
//! candidate into the first retained surface of the same type whose anchor is
//! close enough, or admits it as a new surface.
//!
//! Matching compares anchor origins only; stored footprints are ignored for
//! matching and only unioned afterwards. Exactly one merge happens per
//! incoming candidate (first match wins), so clusters of nearby detections
//! coalesce over successive observations rather than in one step.

use crate::config::MergeSection;

use super::surface::{DetectedSurface, SurfaceId};

/// What the merge engine did with a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Candidate folded into the retained surface at this index.
    Merged(usize),
    /// Candidate admitted as a new surface at this index.
    Inserted(usize),
    /// Candidate area below the admission bar; no state change.
    Rejected,
}

/// Merge a candidate into the retained collection, or admit it.
///
/// `next_id` supplies a fresh [`SurfaceId`] for the record written back
/// (merged records get a new identity, they do not keep the matched one).
/// `now_us` becomes the record's update timestamp.
pub fn merge_or_insert(
    surfaces: &mut Vec<DetectedSurface>,
    candidate: DetectedSurface,
    config: &MergeSection,
    next_id: &mut impl FnMut() -> SurfaceId,
) -> MergeOutcome {
    // Sub-threshold observations are dropped silently: policy, not an error.
    if candidate.area < config.min_surface_area {
        log::debug!(
            "discarding sub-threshold {:?} candidate ({:.2}m2)",
            candidate.kind,
            candidate.area
        );
        return MergeOutcome::Rejected;
    }

    let matched = surfaces.iter().position(|existing| {
        existing.kind == candidate.kind
            && existing.anchor_position.distance(&candidate.anchor_position)
                < config.merge_distance
    });

    match matched {
        Some(index) => {
            let merged = merge_records(&surfaces[index], &candidate, config, next_id());
            log::debug!(
                "merged {:?} surface at index {} (area {:.2}m2)",
                merged.kind,
                index,
                merged.area
            );
            surfaces[index] = merged;
            MergeOutcome::Merged(index)
        }
        None => {
            let mut admitted = candidate;
            admitted.id = next_id();
            admitted.is_significant = admitted.area >= config.min_significant_area;
            surfaces.push(admitted);
            MergeOutcome::Inserted(surfaces.len() - 1)
        }
    }
}

/// Build the merged record replacing an existing surface.
fn merge_records(
    existing: &DetectedSurface,
    candidate: &DetectedSurface,
    config: &MergeSection,
    id: SurfaceId,
) -> DetectedSurface {
    let area = existing.area + candidate.area;
    DetectedSurface {
        id,
        kind: existing.kind,
        anchor_position: candidate.anchor_position,
        bounds: existing.bounds.union(&candidate.bounds),
        confidence: existing.confidence.max(candidate.confidence),
        updated_at_us: candidate.updated_at_us,
        area,
        is_significant: area >= config.significant_merged_area,
    }
}
