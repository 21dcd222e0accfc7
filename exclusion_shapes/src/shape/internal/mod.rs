//! Query machinery behind the shape types, kept public so benchmarks and debugging tools can
//! drive the algorithms directly.

pub mod first_fit;
pub mod interval_scan;
pub mod offset_bounds;
