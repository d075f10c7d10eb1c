//! Batch room-structure derivation.
//!
//! Given a full snapshot of observed planes, the [`StructureValidator`]
//! recomputes the room structure from scratch: classify, cluster, bound,
//! validate, assemble. This is the authoritative counterpart to the
//! responsive incremental model in [`crate::model`].

mod room_structure;
mod validator;

pub use room_structure::RoomStructure;
pub use validator::{AnalysisOutcome, StructureValidator};
