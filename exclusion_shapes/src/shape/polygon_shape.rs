//! Polygon shape answering slab queries through scanline interval algebra.

use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::interval::{ShapeInterval, intersect_intervals, merge_intervals, subtract_intervals};
use crate::polygon::Polygon;
use static_aabb2d_index::AABB;

use super::ShapeOptions;
use super::internal::first_fit;
use super::internal::interval_scan::{
    compute_overlapping_edge_x_projections, compute_x_intersections,
};
use super::internal::offset_bounds::{compute_shape_margin_bounds, compute_shape_padding_bounds};

/// Polygon shape carrying precomputed margin and padding bounds polygons.
///
/// Exclusion queries run against the margin bounds and inclusion queries against the padding
/// bounds. With a zero margin or padding the base polygon is used directly.
pub struct PolygonShape<T = f64> {
    polygon: Polygon<T>,
    margin: T,
    padding: T,
    margin_bounds: Option<Polygon<T>>,
    padding_bounds: Option<Polygon<T>>,
}

impl<T> PolygonShape<T>
where
    T: Real,
{
    /// Create a shape from `polygon` using default [ShapeOptions].
    #[inline]
    pub fn new(polygon: Polygon<T>, margin: T, padding: T) -> Self {
        Self::new_opt(polygon, margin, padding, &Default::default())
    }

    /// Create a shape from `polygon`, offsetting the margin and padding bounds with the vertex
    /// snapping given by `options`.
    pub fn new_opt(polygon: Polygon<T>, margin: T, padding: T, options: &ShapeOptions<T>) -> Self {
        let margin_bounds = if margin > T::zero() {
            Some(compute_shape_margin_bounds(
                &polygon,
                margin,
                options.vertex_snap_unit,
            ))
        } else {
            None
        };

        let padding_bounds = if padding > T::zero() {
            Some(compute_shape_padding_bounds(
                &polygon,
                padding,
                options.vertex_snap_unit,
            ))
        } else {
            None
        };

        PolygonShape {
            polygon,
            margin,
            padding,
            margin_bounds,
            padding_bounds,
        }
    }

    #[inline]
    pub fn polygon(&self) -> &Polygon<T> {
        &self.polygon
    }

    #[inline]
    pub fn margin(&self) -> T {
        self.margin
    }

    #[inline]
    pub fn padding(&self) -> T {
        self.padding
    }

    /// Polygon answering exclusion queries, the base polygon when the margin is zero.
    #[inline]
    pub fn margin_bounds(&self) -> &Polygon<T> {
        self.margin_bounds.as_ref().unwrap_or(&self.polygon)
    }

    /// Polygon answering inclusion queries, the base polygon when the padding is zero.
    #[inline]
    pub fn padding_bounds(&self) -> &Polygon<T> {
        self.padding_bounds.as_ref().unwrap_or(&self.polygon)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygon.is_empty()
    }

    /// Bounding box of the margin bounds polygon, `None` when empty.
    pub fn margin_logical_bounding_box(&self) -> Option<AABB<T>> {
        self.margin_bounds().bounding_box()
    }

    /// Bounding box of the padding bounds polygon, `None` when empty.
    pub fn padding_logical_bounding_box(&self) -> Option<AABB<T>> {
        self.padding_bounds().bounding_box()
    }

    /// X intervals of the margin bounds polygon overlapped by the slab `[logical_top,
    /// logical_top + logical_height]`.
    ///
    /// The result is the union of the boundary crossings at both slab edges and the x
    /// projections of every edge passing through the slab, so boundary bulges strictly between
    /// the two scanlines are still excluded.
    pub fn excluded_intervals(&self, logical_top: T, logical_height: T) -> Vec<ShapeInterval<T>> {
        let polygon = self.margin_bounds();
        if polygon.is_empty() {
            return Vec::new();
        }

        let y1 = logical_top;
        let y2 = logical_top + logical_height;

        let scanline_intervals = merge_intervals(
            &compute_x_intersections(polygon, y1, true),
            &compute_x_intersections(polygon, y2, false),
        );
        merge_intervals(
            &scanline_intervals,
            &compute_overlapping_edge_x_projections(polygon, y1, y2),
        )
    }

    /// X intervals of the padding bounds polygon fully containing the slab `[logical_top,
    /// logical_top + logical_height]`.
    ///
    /// The result is the intersection of the interior runs at both slab edges minus the x
    /// projections of every edge passing through the slab.
    pub fn included_intervals(&self, logical_top: T, logical_height: T) -> Vec<ShapeInterval<T>> {
        let polygon = self.padding_bounds();
        if polygon.is_empty() {
            return Vec::new();
        }

        let y1 = logical_top;
        let y2 = logical_top + logical_height;

        let scanline_intervals = intersect_intervals(
            &compute_x_intersections(polygon, y1, true),
            &compute_x_intersections(polygon, y2, false),
        );
        subtract_intervals(
            &scanline_intervals,
            &compute_overlapping_edge_x_projections(polygon, y1, y2),
        )
    }

    /// Topmost y at or after `min_logical_interval_top` where a box of
    /// `min_logical_interval_size` fits inside the padding bounds polygon, `None` when it
    /// cannot fit.
    pub fn first_included_interval_logical_top(
        &self,
        min_logical_interval_top: T,
        min_logical_interval_size: Vector2<T>,
    ) -> Option<T> {
        first_fit::first_included_interval_logical_top(
            self.padding_bounds(),
            min_logical_interval_top,
            min_logical_interval_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;
    use crate::polygon::WindRule;

    fn square_shape(margin: f64, padding: f64) -> PolygonShape<f64> {
        let polygon = Polygon::new(
            vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(100.0, 0.0),
                Vector2::new(100.0, 100.0),
                Vector2::new(0.0, 100.0),
            ],
            WindRule::EvenOdd,
        )
        .unwrap();

        PolygonShape::new(polygon, margin, padding)
    }

    #[test]
    fn excluded_intervals_of_square_slab() {
        let shape = square_shape(0.0, 0.0);
        let intervals = shape.excluded_intervals(20.0, 30.0);
        assert_eq!(intervals.len(), 1);
        assert_fuzzy_eq!(intervals[0].x1, 0.0);
        assert_fuzzy_eq!(intervals[0].x2, 100.0);
    }

    #[test]
    fn margin_widens_excluded_intervals() {
        let shape = square_shape(10.0, 0.0);
        let intervals = shape.excluded_intervals(20.0, 30.0);
        assert_eq!(intervals.len(), 1);
        assert_fuzzy_eq!(intervals[0].x1, -10.0);
        assert_fuzzy_eq!(intervals[0].x2, 110.0);
    }

    #[test]
    fn padding_narrows_included_intervals() {
        let shape = square_shape(0.0, 10.0);
        let intervals = shape.included_intervals(20.0, 30.0);
        assert_eq!(intervals.len(), 1);
        assert_fuzzy_eq!(intervals[0].x1, 10.0);
        assert_fuzzy_eq!(intervals[0].x2, 90.0);
    }

    #[test]
    fn first_fit_runs_against_padding_bounds() {
        let shape = square_shape(0.0, 10.0);
        let top = shape.first_included_interval_logical_top(0.0, Vector2::new(20.0, 20.0));
        assert_fuzzy_eq!(top.unwrap(), 10.0);
    }

    #[test]
    fn zero_offsets_reuse_the_base_polygon() {
        let shape = square_shape(0.0, 0.0);
        let bounding_box = shape.margin_logical_bounding_box().unwrap();
        assert_fuzzy_eq!(bounding_box.min_x, 0.0);
        assert_fuzzy_eq!(bounding_box.min_y, 0.0);
        assert_fuzzy_eq!(bounding_box.max_x, 100.0);
        assert_fuzzy_eq!(bounding_box.max_y, 100.0);
    }
}
