//! Clustering of classified planes by structural role.
//!
//! Clusters are transient: they borrow the raw observations for the duration
//! of one batch analysis pass and are rebuilt from scratch on every pass,
//! never mutated incrementally.

use crate::classify::Classification;
use crate::core::PlaneObservation;

/// Structural role of a cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClusterRole {
    /// Floor planes.
    Floor,
    /// Wall planes.
    Wall,
    /// Ceiling planes.
    Ceiling,
}

/// A raw observation paired with its classification.
///
/// Lives only within one analysis pass or one merge decision.
#[derive(Clone, Copy, Debug)]
pub struct ClassifiedSurface<'a> {
    /// The raw plane observation (owned by the tracking collaborator).
    pub observation: &'a PlaneObservation,
    /// The label derived from it.
    pub classification: Classification,
}

/// An ordered group of classified surfaces sharing one structural role.
#[derive(Clone, Debug)]
pub struct Cluster<'a> {
    /// The role every member shares.
    pub role: ClusterRole,
    /// Member surfaces, in input order.
    pub surfaces: Vec<ClassifiedSurface<'a>>,
}

impl<'a> Cluster<'a> {
    /// Create an empty cluster for a role.
    pub fn new(role: ClusterRole) -> Self {
        Self {
            role,
            surfaces: Vec::new(),
        }
    }

    /// Number of member surfaces.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Whether the cluster has no members.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

/// Group classified surfaces into at most three role clusters.
///
/// Surfaces labeled `HorizontalOther`, `VerticalOther`, or `Unknown` are
/// dropped: the batch pipeline only reasons about structural planes. Empty
/// clusters are not emitted.
pub fn cluster_by_role<'a>(surfaces: &[ClassifiedSurface<'a>]) -> Vec<Cluster<'a>> {
    let mut floors = Cluster::new(ClusterRole::Floor);
    let mut walls = Cluster::new(ClusterRole::Wall);
    let mut ceilings = Cluster::new(ClusterRole::Ceiling);

    for surface in surfaces {
        match surface.classification {
            Classification::Floor { .. } => floors.surfaces.push(*surface),
            Classification::Wall { .. } => walls.surfaces.push(*surface),
            Classification::Ceiling { .. } => ceilings.surfaces.push(*surface),
            Classification::HorizontalOther { .. }
            | Classification::VerticalOther { .. }
            | Classification::Unknown { .. } => {}
        }
    }

    [floors, walls, ceilings]
        .into_iter()
        .filter(|cluster| !cluster.is_empty())
        .collect()
}
