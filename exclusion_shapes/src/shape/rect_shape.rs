//! Rounded rectangle shape with closed form interval queries.

use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::interval::ShapeInterval;
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis aligned rectangle with elliptical corners of radii `radius_x` by `radius_y`.
///
/// Radii of zero give a plain rectangle. The rectangle is empty if either extent is not
/// positive.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RoundedRect<T = f64> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
    pub radius_x: T,
    pub radius_y: T,
}

impl<T> RoundedRect<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x: T, y: T, width: T, height: T, radius_x: T, radius_y: T) -> Self {
        RoundedRect {
            x,
            y,
            width,
            height,
            radius_x,
            radius_y,
        }
    }

    #[inline]
    pub fn max_x(&self) -> T {
        self.x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> T {
        self.y + self.height
    }

    #[inline]
    pub fn center_y(&self) -> T {
        self.y + self.height / T::two()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= T::zero() || self.height <= T::zero()
    }
}

/// X extent of the axis aligned ellipse at height `y` from its center.
#[inline]
fn ellipse_x_intercept<T>(y: T, radius_x: T, radius_y: T) -> T
where
    T: Real,
{
    debug_assert!(radius_y > T::zero(), "expected positive y radius");
    radius_x * (T::one() - (y * y) / (radius_y * radius_y)).sqrt()
}

/// Y extent of the axis aligned ellipse at offset `x` from its center.
#[inline]
fn ellipse_y_intercept<T>(x: T, radius_x: T, radius_y: T) -> T
where
    T: Real,
{
    debug_assert!(radius_x > T::zero(), "expected positive x radius");
    radius_y * (T::one() - (x * x) / (radius_x * radius_x)).sqrt()
}

/// Rounded rectangle shape answering slab queries in closed form.
///
/// The margin and padding bounds are derived once at construction by inflating or insetting
/// the base bounds, adjusting the corner radii to stay concentric.
#[derive(Debug, Clone)]
pub struct RectangleShape<T = f64> {
    bounds: RoundedRect<T>,
    margin: T,
    padding: T,
    margin_bounds: RoundedRect<T>,
    padding_bounds: RoundedRect<T>,
}

impl<T> RectangleShape<T>
where
    T: Real,
{
    pub fn new(bounds: RoundedRect<T>, margin: T, padding: T) -> Self {
        let margin_bounds = Self::compute_margin_bounds(bounds, margin);
        let padding_bounds = Self::compute_padding_bounds(bounds, padding);
        RectangleShape {
            bounds,
            margin,
            padding,
            margin_bounds,
            padding_bounds,
        }
    }

    fn compute_margin_bounds(bounds: RoundedRect<T>, margin: T) -> RoundedRect<T> {
        if margin <= T::zero() || bounds.is_empty() {
            return bounds;
        }

        RoundedRect::new(
            bounds.x - margin,
            bounds.y - margin,
            bounds.width + T::two() * margin,
            bounds.height + T::two() * margin,
            bounds.radius_x + margin,
            bounds.radius_y + margin,
        )
    }

    fn compute_padding_bounds(bounds: RoundedRect<T>, padding: T) -> RoundedRect<T> {
        if padding <= T::zero() || bounds.is_empty() {
            return bounds;
        }

        // extents and radii clamp at zero when the inset exceeds them
        RoundedRect::new(
            bounds.x + num_traits::real::Real::min(bounds.width / T::two(), padding),
            bounds.y + num_traits::real::Real::min(bounds.height / T::two(), padding),
            num_traits::real::Real::max(T::zero(), bounds.width - T::two() * padding),
            num_traits::real::Real::max(T::zero(), bounds.height - T::two() * padding),
            num_traits::real::Real::max(T::zero(), bounds.radius_x - padding),
            num_traits::real::Real::max(T::zero(), bounds.radius_y - padding),
        )
    }

    #[inline]
    pub fn bounds(&self) -> RoundedRect<T> {
        self.bounds
    }

    #[inline]
    pub fn margin(&self) -> T {
        self.margin
    }

    #[inline]
    pub fn padding(&self) -> T {
        self.padding
    }

    #[inline]
    pub fn margin_bounds(&self) -> RoundedRect<T> {
        self.margin_bounds
    }

    #[inline]
    pub fn padding_bounds(&self) -> RoundedRect<T> {
        self.padding_bounds
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Bounding box of the margin bounds, `None` when empty.
    pub fn margin_logical_bounding_box(&self) -> Option<AABB<T>> {
        let bounds = self.margin_bounds;
        if bounds.is_empty() {
            return None;
        }

        Some(AABB::new(bounds.x, bounds.y, bounds.max_x(), bounds.max_y()))
    }

    /// Bounding box of the padding bounds, `None` when empty.
    pub fn padding_logical_bounding_box(&self) -> Option<AABB<T>> {
        let bounds = self.padding_bounds;
        if bounds.is_empty() {
            return None;
        }

        Some(AABB::new(bounds.x, bounds.y, bounds.max_x(), bounds.max_y()))
    }

    /// X interval of the margin bounds excluded from the slab `[logical_top, logical_top +
    /// logical_height]`, empty when the slab misses the bounds entirely.
    ///
    /// A slab only touching a corner band is narrowed to the ellipse intercept at the slab
    /// edge nearer the rectangle's center line.
    pub fn excluded_intervals(&self, logical_top: T, logical_height: T) -> Vec<ShapeInterval<T>> {
        let bounds = self.margin_bounds;
        if bounds.is_empty() {
            return Vec::new();
        }

        let y1 = logical_top;
        let y2 = logical_top + logical_height;
        if y2 < bounds.y || y1 >= bounds.max_y() {
            return Vec::new();
        }

        let mut x1 = bounds.x;
        let mut x2 = bounds.max_x();

        if bounds.radius_y > T::zero() {
            if y2 < bounds.y + bounds.radius_y {
                let y_intercept = y2 - bounds.y - bounds.radius_y;
                let x_intercept =
                    ellipse_x_intercept(y_intercept, bounds.radius_x, bounds.radius_y);
                x1 = bounds.x + bounds.radius_x - x_intercept;
                x2 = bounds.max_x() - bounds.radius_x + x_intercept;
            } else if y1 > bounds.max_y() - bounds.radius_y {
                let y_intercept = y1 - (bounds.max_y() - bounds.radius_y);
                let x_intercept =
                    ellipse_x_intercept(y_intercept, bounds.radius_x, bounds.radius_y);
                x1 = bounds.x + bounds.radius_x - x_intercept;
                x2 = bounds.max_x() - bounds.radius_x + x_intercept;
            }
        }

        vec![ShapeInterval::new(x1, x2)]
    }

    /// X interval of the padding bounds fully containing the slab `[logical_top, logical_top +
    /// logical_height]`, empty when the slab sticks out of the bounds.
    pub fn included_intervals(&self, logical_top: T, logical_height: T) -> Vec<ShapeInterval<T>> {
        let bounds = self.padding_bounds;
        if bounds.is_empty() {
            return Vec::new();
        }

        let y1 = logical_top;
        let y2 = logical_top + logical_height;
        if y1 < bounds.y || y2 > bounds.max_y() {
            return Vec::new();
        }

        let mut x1 = bounds.x;
        let mut x2 = bounds.max_x();

        if bounds.radius_y > T::zero() {
            let y1_intercepts_corner = y1 < bounds.y + bounds.radius_y;
            let y2_intercepts_corner = y2 > bounds.max_y() - bounds.radius_y;

            if y1_intercepts_corner || y2_intercepts_corner {
                // the slab edge reaching deeper into its corner band constrains the interval
                let y_intercept = if y1_intercepts_corner && y2_intercepts_corner {
                    if y1 < bounds.height + T::two() * bounds.y - y2 {
                        y1 - bounds.y - bounds.radius_y
                    } else {
                        y2 - (bounds.max_y() - bounds.radius_y)
                    }
                } else if y1_intercepts_corner {
                    y1 - bounds.y - bounds.radius_y
                } else {
                    y2 - (bounds.max_y() - bounds.radius_y)
                };

                let x_intercept =
                    ellipse_x_intercept(y_intercept, bounds.radius_x, bounds.radius_y);
                x1 = bounds.x + bounds.radius_x - x_intercept;
                x2 = bounds.max_x() - bounds.radius_x + x_intercept;
            }
        }

        vec![ShapeInterval::new(x1, x2)]
    }

    /// Topmost y at or after `min_logical_interval_top` where a box of
    /// `min_logical_interval_size` fits inside the padding bounds, `None` when it cannot fit.
    pub fn first_included_interval_logical_top(
        &self,
        min_logical_interval_top: T,
        min_logical_interval_size: Vector2<T>,
    ) -> Option<T> {
        let bounds = self.padding_bounds;
        if bounds.is_empty() || min_logical_interval_size.x > bounds.width {
            return None;
        }

        let min_y = num_traits::real::Real::max(bounds.y, min_logical_interval_top);
        let max_y = min_y + min_logical_interval_size.y;
        if max_y > bounds.max_y() {
            return None;
        }

        let interval_overlaps_min_corner = min_y < bounds.y + bounds.radius_y;
        let interval_overlaps_max_corner = max_y > bounds.max_y() - bounds.radius_y;

        if !interval_overlaps_min_corner && !interval_overlaps_max_corner {
            return Some(min_y);
        }

        let center_y = bounds.center_y();
        let min_corner_defines_x = (center_y - min_y).abs() > (center_y - max_y).abs();
        let interval_fits_within_corners =
            min_logical_interval_size.x + T::two() * bounds.radius_x <= bounds.width;

        if interval_overlaps_min_corner
            && (!interval_overlaps_max_corner || min_corner_defines_x)
        {
            if interval_fits_within_corners {
                return Some(min_y);
            }

            let corner_intercept = self.corner_intercept_for_width(min_logical_interval_size.x);
            if bounds.y + corner_intercept.y < min_y {
                return Some(min_y);
            }
            if min_logical_interval_size.y < bounds.height - T::two() * corner_intercept.y {
                // slide down past the top corners
                return Some(bounds.y + corner_intercept.y);
            }
        }

        if interval_overlaps_max_corner
            && (!interval_overlaps_min_corner || !min_corner_defines_x)
        {
            if interval_fits_within_corners {
                return Some(min_y);
            }

            let corner_intercept = self.corner_intercept_for_width(min_logical_interval_size.x);
            if max_y <= bounds.max_y() - corner_intercept.y {
                return Some(min_y);
            }
        }

        None
    }

    /// Corner ellipse intercept for a box of `width` centered in the padding bounds.
    ///
    /// Only meaningful when the box does not fit between the corner radii, which guarantees a
    /// positive x radius.
    fn corner_intercept_for_width(&self, width: T) -> Vector2<T> {
        let bounds = self.padding_bounds;
        let x_intercept = (bounds.width - width) / T::two();
        let y_intercept = bounds.radius_y
            - ellipse_y_intercept(bounds.radius_x - x_intercept, bounds.radius_x, bounds.radius_y);
        Vector2::new(x_intercept, y_intercept)
    }
}
