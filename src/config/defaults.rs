//! Default value functions for serde deserialization.
//!
//! All thresholds here are tuning policy, not physical law. They were chosen
//! for typical indoor rooms and are expected to be adjusted per deployment.

pub fn floor_height_max() -> f32 {
    0.5
}

pub fn ceiling_height_min() -> f32 {
    2.0
}

pub fn wall_area_threshold() -> f32 {
    // Minimum wall height (1.0 m) over a 1.0 m run.
    1.0
}

pub fn merge_distance() -> f32 {
    0.5
}

pub fn min_surface_area() -> f32 {
    0.5
}

pub fn min_significant_area() -> f32 {
    0.5
}

pub fn significant_merged_area() -> f32 {
    1.0
}

pub fn min_plane_count() -> usize {
    3
}

pub fn min_room_dimension() -> f32 {
    2.0
}

pub fn min_room_area() -> f32 {
    4.0
}

pub fn min_wall_count() -> usize {
    2
}

pub fn min_complete_area() -> f32 {
    5.0
}
