//! Surface classification.
//!
//! Labels a single raw plane observation as floor / wall / ceiling / other
//! from its alignment tag, anchor height, and area. Classification is a pure
//! function of one observation: it is recomputed whenever geometry changes
//! and never cached.
//!
//! The height bands (floor below 0.5 m, ceiling above 2.0 m by default) are
//! tuning policy from [`ClassifierSection`], not derived from physics.

use serde::{Deserialize, Serialize};

use crate::config::ClassifierSection;
use crate::core::{PlaneAlignment, PlaneObservation};

/// Structural label derived from one plane observation.
///
/// Every variant carries the observation's area (m²) and the Y coordinate of
/// its anchor (meters), so downstream consumers never need to re-derive them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Classification {
    /// Horizontal plane low enough to be the floor.
    Floor {
        /// Surface area (m²).
        area: f32,
        /// Anchor height (meters).
        height: f32,
    },
    /// Vertical plane large enough to be a wall.
    Wall {
        /// Surface area (m²).
        area: f32,
        /// Anchor height (meters).
        height: f32,
    },
    /// Horizontal plane high enough to be the ceiling.
    Ceiling {
        /// Surface area (m²).
        area: f32,
        /// Anchor height (meters).
        height: f32,
    },
    /// Horizontal plane in the mid band: tables, shelves, counters.
    HorizontalOther {
        /// Surface area (m²).
        area: f32,
        /// Anchor height (meters).
        height: f32,
    },
    /// Vertical plane too small to be a wall: doors, panels, furniture sides.
    VerticalOther {
        /// Surface area (m²).
        area: f32,
        /// Anchor height (meters).
        height: f32,
    },
    /// Observation whose alignment the classifier does not understand.
    Unknown {
        /// Surface area (m²).
        area: f32,
        /// Anchor height (meters).
        height: f32,
    },
}

impl Classification {
    /// Surface area carried by the label (m²).
    #[inline]
    pub fn area(&self) -> f32 {
        match *self {
            Classification::Floor { area, .. }
            | Classification::Wall { area, .. }
            | Classification::Ceiling { area, .. }
            | Classification::HorizontalOther { area, .. }
            | Classification::VerticalOther { area, .. }
            | Classification::Unknown { area, .. } => area,
        }
    }

    /// Anchor height carried by the label (meters).
    #[inline]
    pub fn height(&self) -> f32 {
        match *self {
            Classification::Floor { height, .. }
            | Classification::Wall { height, .. }
            | Classification::Ceiling { height, .. }
            | Classification::HorizontalOther { height, .. }
            | Classification::VerticalOther { height, .. }
            | Classification::Unknown { height, .. } => height,
        }
    }

    /// Whether this label is one of the structural roles (floor, wall,
    /// ceiling) retained by the batch pipeline.
    #[inline]
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Classification::Floor { .. }
                | Classification::Wall { .. }
                | Classification::Ceiling { .. }
        )
    }
}

/// Classify one plane observation.
///
/// Pure function, no side effects. Every observation yields exactly one
/// label; there are no error conditions.
///
/// Height comparisons are strict: an anchor exactly at `floor_height_max`
/// or `ceiling_height_min` classifies as [`Classification::HorizontalOther`].
pub fn classify(observation: &PlaneObservation, config: &ClassifierSection) -> Classification {
    let area = observation.area();
    let height = observation.position().y;

    match observation.alignment {
        PlaneAlignment::Horizontal => {
            if height < config.floor_height_max {
                Classification::Floor { area, height }
            } else if height > config.ceiling_height_min {
                Classification::Ceiling { area, height }
            } else {
                Classification::HorizontalOther { area, height }
            }
        }
        PlaneAlignment::Vertical => {
            if area >= config.wall_area_threshold {
                Classification::Wall { area, height }
            } else {
                Classification::VerticalOther { area, height }
            }
        }
        PlaneAlignment::Unrecognized => Classification::Unknown { area, height },
    }
}
