//! Validation errors raised when constructing shapes from descriptor input.
//!
//! All errors are construction-time contract violations. Query operations never fail: a slab
//! outside a shape yields an empty interval list and an unplaceable box yields `None`, both of
//! which are ordinary outcomes rather than errors.

/// Error returned when shape construction input fails validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError<T> {
    #[error("margin must be non-negative, got {0}")]
    NegativeMargin(T),

    #[error("padding must be non-negative, got {0}")]
    NegativePadding(T),

    #[error("corner radius must be non-negative, got {0}")]
    NegativeRadius(T),

    #[error("rectangle extent must be non-negative, got {width} x {height}")]
    InvalidRectExtent { width: T, height: T },

    #[error("polygon requires at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("polygon coordinates must form x/y pairs, got {count} values")]
    OddCoordinateCount { count: usize },
}
