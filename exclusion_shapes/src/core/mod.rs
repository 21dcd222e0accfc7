//! Scalar traits and 2D math primitives shared by every shape module.

pub mod math;
pub mod traits;
