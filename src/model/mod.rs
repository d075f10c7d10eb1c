//! Incremental room model: retained surfaces, deduplication, statistics.
//!
//! - [`DetectedSurface`] / [`SurfaceType`]: the retained surface records
//! - [`merge_or_insert`]: the deduplication engine
//! - [`RoomStats`]: aggregate statistics recomputed after every ingest
//! - [`RoomModel`]: the long-lived, one-observation-at-a-time aggregator

mod merge;
mod room_model;
mod stats;
mod surface;

pub use merge::{merge_or_insert, MergeOutcome};
pub use room_model::{IngestOutcome, RoomModel, RoomSnapshot};
pub use stats::{RoomDimensions, RoomStats};
pub use surface::{DetectedSurface, SurfaceId, SurfaceType};
