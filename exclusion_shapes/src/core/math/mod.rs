//! 2D vectors, angle helpers, and segment intersection.
mod base_math;
mod line_line_intersect;
mod vector2;

pub use base_math::*;
pub use line_line_intersect::{LineLineIntr, line_line_intr};
pub use vector2::Vector2;
