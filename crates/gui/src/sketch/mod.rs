//! 2D profile sketching: surface transform and polyline geometry.

pub mod geometry;
pub mod transform;

pub use geometry::{hit_test, insertion_index, point_segment_distance, HIT_RADIUS_PX};
pub use transform::{CoordinateTransform, DEFAULT_SCALE};
