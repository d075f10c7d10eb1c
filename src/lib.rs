//! # Griha-Scan: Room Understanding from Detected Planes
//!
//! A library that turns a raw, noisy, continuously updated stream of detected
//! planar surfaces (from an external spatial-tracking subsystem) into a
//! stable room model: which surfaces are floor, wall, or ceiling; the room's
//! bounding volume; and whether enough evidence has accumulated to consider
//! the scan complete.
//!
//! ## Features
//!
//! - **Surface Classification**: pure height/area heuristics label each
//!   plane as floor, wall, ceiling, or other
//! - **Deduplication**: repeated observations of the same physical surface
//!   merge into one retained record instead of being double-counted
//! - **Incremental Statistics**: counts, area, and dimensions recomputed
//!   after every observation for responsive per-frame feedback
//! - **Batch Validation**: a five-stage pipeline re-derives the full room
//!   structure from a plane snapshot and only publishes it when it passes
//!   the acceptance criteria
//!
//! ## Quick Start
//!
//! ```rust
//! use griha_scan::{GrihaConfig, RoomModel};
//! use griha_scan::core::{PlaneAlignment, PlaneId, PlaneObservation, Point3D, Transform3D};
//!
//! let config = GrihaConfig::default();
//! let mut model = RoomModel::new(
//!     config.classifier.clone(),
//!     config.merge.clone(),
//!     config.completeness.clone(),
//! );
//!
//! // One floor observation from the tracking subsystem
//! let floor = PlaneObservation::new(
//!     PlaneId(1),
//!     Transform3D::from_translation(Point3D::new(0.0, 0.0, 0.0)),
//!     PlaneAlignment::Horizontal,
//!     3.0,
//!     2.0,
//! );
//! model.ingest(&floor);
//!
//! let snapshot = model.snapshot();
//! println!("{} ({:.0}%)", snapshot.summary, snapshot.scan_progress * 100.0);
//! ```
//!
//! ## Coordinate Frame
//!
//! World frame, meters, Y-up:
//! - **X**: lateral extent (room width)
//! - **Y**: vertical (floor near 0, ceiling above 2m in typical rooms)
//! - **Z**: depth extent (room length)
//!
//! ## Architecture
//!
//! - [`core`]: fundamental types (points, transforms, plane observations)
//! - [`config`]: YAML-loadable thresholds, one section per concern
//! - [`mod@classify`]: the surface classifier
//! - [`cluster`]: role clustering for the batch pipeline
//! - [`bounds`]: room bounds calculation
//! - [`structure`]: the batch validation pipeline and its output
//! - [`model`]: the incremental room model and merge engine
//! - [`lifecycle`]: the scan session state machine
//!
//! ## Data Flow
//!
//! ```text
//!                    ┌──────────────────────┐
//!                    │  Tracking subsystem  │
//!                    │  (PlaneObservation)  │
//!                    └──────────┬───────────┘
//!                 one at a time │ full snapshot, on trigger
//!            ┌──────────────────┴──────────────────┐
//!            ▼                                     ▼
//!   ┌─────────────────┐                 ┌─────────────────────┐
//!   │    RoomModel    │                 │ StructureValidator  │
//!   │ classify+merge, │                 │ classify → cluster  │
//!   │ running stats   │                 │ → bound → validate  │
//!   └────────┬────────┘                 └──────────┬──────────┘
//!            │ RoomSnapshot                        │ RoomStructure
//!            ▼                                     ▼
//!   counts, area, dimensions,            accepted bounds + planes
//!   progress, completeness               (replaced wholesale)
//! ```
//!
//! The two consumers share the classifier and the merge policy but run at
//! different cadences: the incremental model answers every frame, the batch
//! validator re-derives an authoritative structure whenever enough planes
//! have accumulated.
//!
//! This library does no mesh reconstruction, no pose estimation, and no
//! object recognition; its geometric model is a set of oriented rectangles
//! with a coarse horizontal/vertical alignment tag. It holds no locks and
//! performs no I/O: single-writer, synchronous, in-memory per scan session.

pub mod bounds;
pub mod classify;
pub mod cluster;
pub mod config;
pub mod core;
pub mod lifecycle;
pub mod model;
pub mod structure;

// Re-export main types at crate root
pub use bounds::{compute_cluster_bounds, compute_room_bounds, RoomBounds};
pub use classify::{classify, Classification};
pub use cluster::{cluster_by_role, ClassifiedSurface, Cluster, ClusterRole};
pub use config::{ConfigError, ConfigLoadError, GrihaConfig};
pub use lifecycle::{ScanSession, ScanState};
pub use model::{
    DetectedSurface, IngestOutcome, RoomModel, RoomSnapshot, RoomStats, SurfaceId, SurfaceType,
};
pub use structure::{AnalysisOutcome, RoomStructure, StructureValidator};
