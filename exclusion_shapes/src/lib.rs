//! 2D shape geometry for exclusion based layout: slab interval queries against polygons and
//! rounded rectangles in logical coordinates, with margin and padding offset bounds.

#[macro_use]
mod macros;

pub mod core;
mod error;
pub mod interval;
mod log;
pub mod polygon;
pub mod shape;

pub use static_aabb2d_index::AABB;

pub use crate::error::ShapeError;
pub use crate::interval::*;
pub use crate::polygon::*;
pub use crate::shape::*;
