//! Shape types answering exclusion and inclusion slab queries in logical coordinates.
//!
//! [Shape::create] builds a [Shape] from a physical [BasicShape] description, converting every
//! coordinate to logical space for the given [WritingMode] once up front so queries never
//! transform again. Circles and ellipses lower to rounded rectangles, leaving polygons and
//! rounded rectangles as the only two query implementations.

mod polygon_shape;
mod rect_shape;

pub mod internal;

pub use polygon_shape::*;
pub use rect_shape::*;

use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::error::ShapeError;
use crate::interval::ShapeInterval;
use crate::log::debug;
use crate::polygon::{Polygon, WindRule};
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Block flow direction of the box a shape applies to.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum WritingMode {
    /// Horizontal lines stacked top to bottom.
    #[default]
    HorizontalTb,
    /// Vertical lines stacked right to left.
    VerticalRl,
    /// Vertical lines stacked left to right.
    VerticalLr,
}

impl WritingMode {
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, WritingMode::HorizontalTb)
    }

    /// True when the logical block direction runs against the physical x axis.
    #[inline]
    pub fn is_flipped_blocks(self) -> bool {
        matches!(self, WritingMode::VerticalRl)
    }
}

/// Options for shape construction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeOptions<T = f64> {
    /// Grid unit the margin and padding bounds polygon vertices are snapped to, zero to
    /// disable snapping. Defaults to 1/64 to match layout subpixel precision.
    pub vertex_snap_unit: T,
}

impl<T> ShapeOptions<T>
where
    T: Real,
{
    pub fn new() -> Self {
        ShapeOptions {
            vertex_snap_unit: T::from(1.0 / 64.0).unwrap(),
        }
    }
}

impl<T> Default for ShapeOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Physical shape description a [Shape] is created from.
///
/// All coordinates are physical, relative to the top left of the containing box, with lengths
/// already resolved to numbers.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub enum BasicShape<T = f64> {
    /// Rectangle positioned by its top left corner, with elliptical corner radii.
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Rectangle {
        x: T,
        y: T,
        width: T,
        height: T,
        corner_radius_x: T,
        corner_radius_y: T,
    },
    /// Circle described by center and radius.
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Circle { center_x: T, center_y: T, radius: T },
    /// Axis aligned ellipse described by center and radii.
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Ellipse {
        center_x: T,
        center_y: T,
        radius_x: T,
        radius_y: T,
    },
    /// Closed polygon from interleaved x/y coordinate pairs.
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Polygon {
        wind_rule: WindRule,
        coordinates: Vec<T>,
    },
    /// Rectangle inset from each edge of the containing box, with elliptical corner radii.
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    InsetRectangle {
        left: T,
        top: T,
        right: T,
        bottom: T,
        corner_radius_x: T,
        corner_radius_y: T,
    },
}

/// Shape in logical coordinates answering exclusion and inclusion slab queries.
pub enum Shape<T = f64> {
    Polygon(PolygonShape<T>),
    Rect(RectangleShape<T>),
}

impl<T> Shape<T>
where
    T: Real,
{
    /// Create a [Shape] from `basic_shape` using default [ShapeOptions].
    ///
    /// `logical_box_size` is the logical size of the containing box, used to resolve inset
    /// rectangle extents and to flip coordinates in vertical writing modes. Negative `margin`,
    /// `padding`, extents, or radii are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use exclusion_shapes::core::math::Vector2;
    /// use exclusion_shapes::{BasicShape, Shape, WritingMode};
    ///
    /// let basic_shape = BasicShape::Rectangle {
    ///     x: 0.0,
    ///     y: 0.0,
    ///     width: 100.0,
    ///     height: 50.0,
    ///     corner_radius_x: 0.0,
    ///     corner_radius_y: 0.0,
    /// };
    ///
    /// let shape = Shape::create(
    ///     &basic_shape,
    ///     Vector2::new(200.0, 100.0),
    ///     WritingMode::HorizontalTb,
    ///     0.0,
    ///     0.0,
    /// )
    /// .unwrap();
    ///
    /// let intervals = shape.excluded_intervals(10.0, 20.0);
    /// assert_eq!(intervals.len(), 1);
    /// assert_eq!(intervals[0].x1, 0.0);
    /// assert_eq!(intervals[0].x2, 100.0);
    /// ```
    #[inline]
    pub fn create(
        basic_shape: &BasicShape<T>,
        logical_box_size: Vector2<T>,
        writing_mode: WritingMode,
        margin: T,
        padding: T,
    ) -> Result<Self, ShapeError<T>> {
        Self::create_opt(
            basic_shape,
            logical_box_size,
            writing_mode,
            margin,
            padding,
            &Default::default(),
        )
    }

    /// Same as [Shape::create] but with [ShapeOptions] given.
    pub fn create_opt(
        basic_shape: &BasicShape<T>,
        logical_box_size: Vector2<T>,
        writing_mode: WritingMode,
        margin: T,
        padding: T,
        options: &ShapeOptions<T>,
    ) -> Result<Self, ShapeError<T>> {
        if margin < T::zero() {
            return Err(ShapeError::NegativeMargin(margin));
        }
        if padding < T::zero() {
            return Err(ShapeError::NegativePadding(padding));
        }

        debug!(
            "creating shape, writing_mode: {:?}, margin: {:?}, padding: {:?}",
            writing_mode, margin, padding
        );

        // physical box extents, distinct from the logical ones only in vertical writing modes
        let (box_width, box_height) = if writing_mode.is_horizontal() {
            (logical_box_size.x, logical_box_size.y)
        } else {
            (logical_box_size.y, logical_box_size.x)
        };
        let logical_box_height = logical_box_size.y;

        let shape = match basic_shape {
            &BasicShape::Rectangle {
                x,
                y,
                width,
                height,
                corner_radius_x,
                corner_radius_y,
            } => {
                if width < T::zero() || height < T::zero() {
                    return Err(ShapeError::InvalidRectExtent { width, height });
                }
                validate_radii(corner_radius_x, corner_radius_y)?;

                let mut radii = Vector2::new(corner_radius_x, corner_radius_y);
                ensure_radii_do_not_overlap(width, height, &mut radii);
                let bounds = physical_bounds_to_logical(
                    RoundedRect::new(x, y, width, height, radii.x, radii.y),
                    logical_box_height,
                    writing_mode,
                );
                Shape::Rect(RectangleShape::new(bounds, margin, padding))
            }
            &BasicShape::Circle {
                center_x,
                center_y,
                radius,
            } => {
                if radius < T::zero() {
                    return Err(ShapeError::NegativeRadius(radius));
                }

                let logical_center = physical_point_to_logical(
                    Vector2::new(center_x, center_y),
                    logical_box_height,
                    writing_mode,
                );
                let bounds = RoundedRect::new(
                    logical_center.x - radius,
                    logical_center.y - radius,
                    T::two() * radius,
                    T::two() * radius,
                    radius,
                    radius,
                );
                Shape::Rect(RectangleShape::new(bounds, margin, padding))
            }
            &BasicShape::Ellipse {
                center_x,
                center_y,
                radius_x,
                radius_y,
            } => {
                validate_radii(radius_x, radius_y)?;

                let logical_center = physical_point_to_logical(
                    Vector2::new(center_x, center_y),
                    logical_box_height,
                    writing_mode,
                );
                let logical_radii = if writing_mode.is_horizontal() {
                    Vector2::new(radius_x, radius_y)
                } else {
                    Vector2::new(radius_y, radius_x)
                };
                let bounds = RoundedRect::new(
                    logical_center.x - logical_radii.x,
                    logical_center.y - logical_radii.y,
                    T::two() * logical_radii.x,
                    T::two() * logical_radii.y,
                    logical_radii.x,
                    logical_radii.y,
                );
                Shape::Rect(RectangleShape::new(bounds, margin, padding))
            }
            BasicShape::Polygon {
                wind_rule,
                coordinates,
            } => {
                if coordinates.len() % 2 != 0 {
                    return Err(ShapeError::OddCoordinateCount {
                        count: coordinates.len(),
                    });
                }

                let mut vertices = Vec::with_capacity(coordinates.len() / 2);
                for pair in coordinates.chunks_exact(2) {
                    vertices.push(physical_point_to_logical(
                        Vector2::new(pair[0], pair[1]),
                        logical_box_height,
                        writing_mode,
                    ));
                }

                let polygon = Polygon::new(vertices, *wind_rule)?;
                Shape::Polygon(PolygonShape::new_opt(polygon, margin, padding, options))
            }
            &BasicShape::InsetRectangle {
                left,
                top,
                right,
                bottom,
                corner_radius_x,
                corner_radius_y,
            } => {
                validate_radii(corner_radius_x, corner_radius_y)?;

                let width = num_traits::real::Real::max(box_width - left - right, T::zero());
                let height = num_traits::real::Real::max(box_height - top - bottom, T::zero());
                let mut radii = Vector2::new(corner_radius_x, corner_radius_y);
                ensure_radii_do_not_overlap(width, height, &mut radii);
                let bounds = physical_bounds_to_logical(
                    RoundedRect::new(left, top, width, height, radii.x, radii.y),
                    logical_box_height,
                    writing_mode,
                );
                Shape::Rect(RectangleShape::new(bounds, margin, padding))
            }
        };

        Ok(shape)
    }

    /// True if the shape has no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        match self {
            Shape::Polygon(shape) => shape.is_empty(),
            Shape::Rect(shape) => shape.is_empty(),
        }
    }

    /// Bounding box of the margin bounds, `None` when empty.
    pub fn margin_logical_bounding_box(&self) -> Option<AABB<T>> {
        match self {
            Shape::Polygon(shape) => shape.margin_logical_bounding_box(),
            Shape::Rect(shape) => shape.margin_logical_bounding_box(),
        }
    }

    /// Bounding box of the padding bounds, `None` when empty.
    pub fn padding_logical_bounding_box(&self) -> Option<AABB<T>> {
        match self {
            Shape::Polygon(shape) => shape.padding_logical_bounding_box(),
            Shape::Rect(shape) => shape.padding_logical_bounding_box(),
        }
    }

    /// X intervals of the margin bounds overlapped by the slab `[logical_top, logical_top +
    /// logical_height]`, sorted and non-overlapping.
    pub fn excluded_intervals(&self, logical_top: T, logical_height: T) -> Vec<ShapeInterval<T>> {
        match self {
            Shape::Polygon(shape) => shape.excluded_intervals(logical_top, logical_height),
            Shape::Rect(shape) => shape.excluded_intervals(logical_top, logical_height),
        }
    }

    /// X intervals of the padding bounds fully containing the slab `[logical_top, logical_top
    /// + logical_height]`, sorted and non-overlapping.
    pub fn included_intervals(&self, logical_top: T, logical_height: T) -> Vec<ShapeInterval<T>> {
        match self {
            Shape::Polygon(shape) => shape.included_intervals(logical_top, logical_height),
            Shape::Rect(shape) => shape.included_intervals(logical_top, logical_height),
        }
    }

    /// Topmost y at or after `min_logical_interval_top` where a box of
    /// `min_logical_interval_size` fits inside the padding bounds, `None` when it cannot fit.
    pub fn first_included_interval_logical_top(
        &self,
        min_logical_interval_top: T,
        min_logical_interval_size: Vector2<T>,
    ) -> Option<T> {
        match self {
            Shape::Polygon(shape) => shape.first_included_interval_logical_top(
                min_logical_interval_top,
                min_logical_interval_size,
            ),
            Shape::Rect(shape) => shape.first_included_interval_logical_top(
                min_logical_interval_top,
                min_logical_interval_size,
            ),
        }
    }
}

fn validate_radii<T>(radius_x: T, radius_y: T) -> Result<(), ShapeError<T>>
where
    T: Real,
{
    if radius_x < T::zero() {
        return Err(ShapeError::NegativeRadius(radius_x));
    }
    if radius_y < T::zero() {
        return Err(ShapeError::NegativeRadius(radius_y));
    }

    Ok(())
}

fn physical_point_to_logical<T>(
    point: Vector2<T>,
    logical_box_height: T,
    writing_mode: WritingMode,
) -> Vector2<T>
where
    T: Real,
{
    if writing_mode.is_horizontal() {
        return point;
    }
    if writing_mode.is_flipped_blocks() {
        return Vector2::new(point.y, logical_box_height - point.x);
    }

    Vector2::new(point.y, point.x)
}

/// Transpose physical bounds into logical coordinates, swapping the corner radii along with
/// the extents.
fn physical_bounds_to_logical<T>(
    bounds: RoundedRect<T>,
    logical_box_height: T,
    writing_mode: WritingMode,
) -> RoundedRect<T>
where
    T: Real,
{
    if writing_mode.is_horizontal() {
        return bounds;
    }
    if writing_mode.is_flipped_blocks() {
        return RoundedRect::new(
            bounds.y,
            logical_box_height - bounds.max_x(),
            bounds.height,
            bounds.width,
            bounds.radius_y,
            bounds.radius_x,
        );
    }

    RoundedRect::new(
        bounds.y,
        bounds.x,
        bounds.height,
        bounds.width,
        bounds.radius_y,
        bounds.radius_x,
    )
}

/// Scale both corner radii down by the same ratio when the corners would overlap along either
/// axis.
fn ensure_radii_do_not_overlap<T>(bounds_width: T, bounds_height: T, radii: &mut Vector2<T>)
where
    T: Real,
{
    let width_ratio = if radii.x > T::zero() {
        bounds_width / (T::two() * radii.x)
    } else {
        Real::max_value()
    };
    let height_ratio = if radii.y > T::zero() {
        bounds_height / (T::two() * radii.y)
    } else {
        Real::max_value()
    };

    let reduction_ratio = num_traits::real::Real::min(width_ratio, height_ratio);
    if reduction_ratio < T::one() {
        radii.x = reduction_ratio * radii.x;
        radii.y = reduction_ratio * radii.y;
    }
}
