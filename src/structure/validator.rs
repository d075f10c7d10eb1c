//! Batch room-structure validation pipeline.
//!
//! Runs five strictly sequential stages over a full snapshot of observed
//! planes:
//!
//! 1. Classify every plane
//! 2. Cluster structural planes by role (others are dropped)
//! 3. Compute room bounds over the clustered planes
//! 4. Check acceptance criteria
//! 5. Assemble and publish the [`RoomStructure`]
//!
//! The pipeline is idempotent for identical input and re-runnable at any
//! time. A failed pass never publishes a partial structure; the previously
//! accepted structure (possibly none) stays in place. Callers should treat
//! "no structure yet" as the normal state during active scanning, not as an
//! error.

use crate::bounds::compute_cluster_bounds;
use crate::classify::classify;
use crate::cluster::{cluster_by_role, ClassifiedSurface, Cluster, ClusterRole};
use crate::config::{ClassifierSection, ValidationSection};
use crate::core::PlaneObservation;

use super::room_structure::RoomStructure;

/// Progress checkpoints after each pipeline stage.
const PROGRESS_CLASSIFIED: f32 = 0.2;
const PROGRESS_CLUSTERED: f32 = 0.4;
const PROGRESS_BOUNDED: f32 = 0.6;
const PROGRESS_VALIDATED: f32 = 0.8;
const PROGRESS_DONE: f32 = 1.0;

/// Outcome of one batch analysis trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// A structure was assembled and published.
    Accepted,
    /// The acceptance criteria failed; prior state is untouched.
    Rejected,
    /// A pass was already running; this trigger was dropped, not queued.
    Dropped,
}

/// Stateful owner of the batch pipeline.
///
/// Holds the last accepted structure, the progress scalar of the most recent
/// pass, and a single boolean guard against concurrent re-entry. All work is
/// synchronous; the guard only protects against a re-entrant trigger from
/// the single writer (e.g. a callback firing mid-pass).
pub struct StructureValidator {
    classifier: ClassifierSection,
    validation: ValidationSection,
    structure: Option<RoomStructure>,
    analyzing: bool,
    progress: f32,
}

impl StructureValidator {
    /// Create a validator with the given configuration sections.
    pub fn new(classifier: ClassifierSection, validation: ValidationSection) -> Self {
        Self {
            classifier,
            validation,
            structure: None,
            analyzing: false,
            progress: 0.0,
        }
    }

    /// The last accepted structure, if any pass has succeeded.
    pub fn structure(&self) -> Option<&RoomStructure> {
        self.structure.as_ref()
    }

    /// Whether a pass is currently running.
    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    /// Progress of the most recent pass in [0, 1].
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether a batch trigger should run for the given snapshot size.
    ///
    /// Requires enough planes to plausibly describe a room and no pass
    /// already in flight.
    pub fn should_analyze(&self, plane_count: usize) -> bool {
        plane_count >= self.validation.min_plane_count && !self.analyzing
    }

    /// Run one batch pass over a full plane snapshot.
    ///
    /// Returns [`AnalysisOutcome::Dropped`] without touching any state if a
    /// pass is already running.
    pub fn analyze(&mut self, planes: &[PlaneObservation]) -> AnalysisOutcome {
        if self.analyzing {
            log::debug!("batch pass already running; dropping trigger");
            return AnalysisOutcome::Dropped;
        }
        self.analyzing = true;
        self.progress = 0.0;

        let outcome = self.run_pipeline(planes);

        self.progress = PROGRESS_DONE;
        self.analyzing = false;
        outcome
    }

    fn run_pipeline(&mut self, planes: &[PlaneObservation]) -> AnalysisOutcome {
        // Stage 1: classify
        let surfaces: Vec<ClassifiedSurface<'_>> = planes
            .iter()
            .map(|observation| ClassifiedSurface {
                observation,
                classification: classify(observation, &self.classifier),
            })
            .collect();
        self.progress = PROGRESS_CLASSIFIED;

        // Stage 2: cluster structural planes
        let clusters = cluster_by_role(&surfaces);
        self.progress = PROGRESS_CLUSTERED;

        // Stage 3: bounds
        let bounds = compute_cluster_bounds(&clusters);
        self.progress = PROGRESS_BOUNDED;

        // Stage 4: validate
        let has_floor = clusters.iter().any(|c| c.role == ClusterRole::Floor);
        let has_wall = clusters.iter().any(|c| c.role == ClusterRole::Wall);
        let min_dim = self.validation.min_room_dimension;
        let dimensions_ok =
            bounds.width >= min_dim && bounds.length >= min_dim && bounds.height >= min_dim;
        let area_ok = bounds.area() >= self.validation.min_room_area;
        self.progress = PROGRESS_VALIDATED;

        if !(has_floor && has_wall && dimensions_ok && area_ok) {
            log::debug!(
                "structure rejected: floor={} wall={} {:.1}x{:.1}x{:.1}m area={:.1}m2",
                has_floor,
                has_wall,
                bounds.width,
                bounds.length,
                bounds.height,
                bounds.area()
            );
            return AnalysisOutcome::Rejected;
        }

        // Stage 5: assemble and publish
        let structure = assemble_structure(&clusters, bounds);
        log::info!(
            "room structure accepted: {} floors, {} walls, {} ceilings, {:.1}m2",
            structure.floor_count(),
            structure.wall_count(),
            structure.ceiling_count(),
            bounds.area()
        );
        self.structure = Some(structure);
        AnalysisOutcome::Accepted
    }
}

fn assemble_structure(
    clusters: &[Cluster<'_>],
    bounds: crate::bounds::RoomBounds,
) -> RoomStructure {
    let collect = |role: ClusterRole| -> Vec<PlaneObservation> {
        clusters
            .iter()
            .filter(|cluster| cluster.role == role)
            .flat_map(|cluster| cluster.surfaces.iter().map(|s| *s.observation))
            .collect()
    };

    RoomStructure {
        bounds,
        walls: collect(ClusterRole::Wall),
        floors: collect(ClusterRole::Floor),
        ceilings: collect(ClusterRole::Ceiling),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlaneAlignment, PlaneId, Point3D, Transform3D};

    fn plane(
        id: u64,
        alignment: PlaneAlignment,
        position: Point3D,
        width: f32,
        height: f32,
    ) -> PlaneObservation {
        PlaneObservation::new(
            PlaneId(id),
            Transform3D::from_translation(position),
            alignment,
            width,
            height,
        )
    }

    fn validator() -> StructureValidator {
        StructureValidator::new(ClassifierSection::default(), ValidationSection::default())
    }

    /// One 5m2 floor and two walls spanning a 3x3m footprint.
    fn valid_room() -> Vec<PlaneObservation> {
        vec![
            plane(
                1,
                PlaneAlignment::Horizontal,
                Point3D::new(0.0, 0.0, 0.0),
                2.5,
                2.0,
            ),
            plane(
                2,
                PlaneAlignment::Vertical,
                Point3D::new(1.4, 1.25, 0.0),
                1.2,
                2.5,
            ),
            plane(
                3,
                PlaneAlignment::Vertical,
                Point3D::new(-1.4, 1.25, 0.0),
                1.2,
                2.5,
            ),
        ]
    }

    #[test]
    fn test_accepts_valid_room() {
        let mut validator = validator();
        let planes = valid_room();

        assert!(validator.should_analyze(planes.len()));
        assert_eq!(validator.analyze(&planes), AnalysisOutcome::Accepted);
        assert_eq!(validator.progress(), 1.0);
        assert!(!validator.is_analyzing());

        let structure = validator.structure().expect("structure published");
        assert_eq!(structure.wall_count(), 2);
        assert_eq!(structure.floor_count(), 1);
        assert_eq!(structure.ceiling_count(), 0);
        assert!(structure.bounds.area() >= 4.0);
    }

    #[test]
    fn test_rejects_small_footprint() {
        // Same roles, but squeezed into a 1.5m wide span: width check fails
        let planes = vec![
            plane(
                1,
                PlaneAlignment::Horizontal,
                Point3D::new(0.0, 0.0, 0.0),
                1.5,
                1.5,
            ),
            plane(
                2,
                PlaneAlignment::Vertical,
                Point3D::new(0.5, 1.25, 0.0),
                0.5,
                2.5,
            ),
            plane(
                3,
                PlaneAlignment::Vertical,
                Point3D::new(-0.5, 1.25, 0.0),
                0.5,
                2.5,
            ),
        ];
        let mut validator = validator();

        assert_eq!(validator.analyze(&planes), AnalysisOutcome::Rejected);
        // Previous structure (none) is retained
        assert!(validator.structure().is_none());
        assert_eq!(validator.progress(), 1.0);
    }

    #[test]
    fn test_rejects_without_walls() {
        let planes = vec![plane(
            1,
            PlaneAlignment::Horizontal,
            Point3D::new(0.0, 0.0, 0.0),
            3.0,
            3.0,
        )];
        let mut validator = validator();

        assert_eq!(validator.analyze(&planes), AnalysisOutcome::Rejected);
        assert!(validator.structure().is_none());
    }

    #[test]
    fn test_failed_pass_keeps_previous_structure() {
        let mut validator = validator();
        assert_eq!(validator.analyze(&valid_room()), AnalysisOutcome::Accepted);

        let empty: Vec<PlaneObservation> = Vec::new();
        assert_eq!(validator.analyze(&empty), AnalysisOutcome::Rejected);

        let structure = validator.structure().expect("previous structure retained");
        assert_eq!(structure.wall_count(), 2);
    }

    #[test]
    fn test_idempotent_for_identical_input() {
        let mut validator = validator();
        let planes = valid_room();

        assert_eq!(validator.analyze(&planes), AnalysisOutcome::Accepted);
        let first = validator.structure().unwrap().bounds;

        assert_eq!(validator.analyze(&planes), AnalysisOutcome::Accepted);
        let second = validator.structure().unwrap().bounds;

        assert_eq!(first, second);
    }

    #[test]
    fn test_reentrant_trigger_is_dropped() {
        let mut validator = validator();
        // Simulate a trigger arriving while a pass is in flight
        validator.analyzing = true;

        assert!(!validator.should_analyze(10));
        assert_eq!(validator.analyze(&valid_room()), AnalysisOutcome::Dropped);
        // Nothing was published and the running pass is not disturbed
        assert!(validator.structure().is_none());
        assert!(validator.is_analyzing());

        // Once the flag clears, the same snapshot analyzes normally
        validator.analyzing = false;
        assert_eq!(validator.analyze(&valid_room()), AnalysisOutcome::Accepted);
        assert!(validator.structure().is_some());
    }

    #[test]
    fn test_should_analyze_gates_on_plane_count() {
        let validator = validator();
        assert!(!validator.should_analyze(0));
        assert!(!validator.should_analyze(2));
        assert!(validator.should_analyze(3));
    }
}
