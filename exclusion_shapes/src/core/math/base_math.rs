use super::Vector2;
use crate::core::traits::Real;

/// `v1` and `v2` as an ordered `(min, max)` pair.
///
/// # Examples
///
/// ```
/// # use exclusion_shapes::core::math::*;
/// assert_eq!(min_max(8.0, 4.0), (4.0, 8.0));
/// assert_eq!(min_max(4.0, 8.0), (4.0, 8.0));
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// `angle` folded into `[0, 2PI]`.
///
/// Values already in range pass through unchanged, including `2PI` itself.
///
/// # Examples
///
/// ```
/// # use exclusion_shapes::core::math::*;
/// # use exclusion_shapes::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(normalize_radians(-PI / 2.0).fuzzy_eq(3.0 * PI / 2.0));
/// assert!(normalize_radians(3.0 * PI).fuzzy_eq(PI));
/// assert!(normalize_radians(2.0 * PI).fuzzy_eq(2.0 * PI));
/// ```
#[inline]
pub fn normalize_radians<T>(angle: T) -> T
where
    T: Real,
{
    if angle >= T::zero() && angle <= T::tau() {
        return angle;
    }

    angle - (angle / T::tau()).floor() * T::tau()
}

/// Polar angle of the direction from `p0` to `p1`.
#[inline]
pub fn angle<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    T::atan2(p1.y - p0.y, p1.x - p0.x)
}

/// Point at polar `angle` radians on the circle with `radius` and `center` given.
#[inline]
pub fn point_on_circle<T>(radius: T, center: Vector2<T>, angle: T) -> Vector2<T>
where
    T: Real,
{
    let (s, c) = angle.sin_cos();
    Vector2::new(center.x + radius * c, center.y + radius * s)
}

/// Point at parametric value `t` on the segment from `p0` to `p1`.
#[inline]
pub fn point_from_parametric<T>(p0: Vector2<T>, p1: Vector2<T>, t: T) -> Vector2<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Parametric value of `point` on the segment from `p0` to `p1`.
///
/// `point` must lie on the segment's line. The dominant coordinate is picked by fuzzy comparing
/// `p0.x` with `p1.x` against `epsilon` so vertical segments divide by the y extent instead.
#[inline]
pub fn parametric_from_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>, epsilon: T) -> T
where
    T: Real,
{
    if p0.x.fuzzy_eq_eps(p1.x, epsilon) {
        // vertical segment
        debug_assert!(
            point.x.fuzzy_eq_eps(p0.x, epsilon),
            "point is not on the line through p0 and p1"
        );
        (point.y - p0.y) / (p1.y - p0.y)
    } else {
        debug_assert!(
            point.fuzzy_eq_eps(p0, epsilon)
                || ((point.y - p0.y) / (point.x - p0.x))
                    .fuzzy_eq_eps((p1.y - p0.y) / (p1.x - p0.x), epsilon),
            "point is not on the line through p0 and p1"
        );
        (point.x - p0.x) / (p1.x - p0.x)
    }
}

/// True when `point` lies left of the direction vector `p1 - p0`.
///
/// With y-down layout coordinates the left side is the clockwise side of the direction vector, so
/// for a clockwise wound ring the interior is on the left of every edge.
///
/// # Examples
///
/// ```
/// # use exclusion_shapes::core::math::*;
/// let p0 = Vector2::new(0.0, 0.0);
/// let p1 = Vector2::new(4.0, 4.0);
/// assert!(is_left(p0, p1, Vector2::new(0.0, 2.0)));
/// assert!(!is_left(p0, p1, Vector2::new(2.0, 0.0)));
/// ```
#[inline]
pub fn is_left<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> bool
where
    T: Real,
{
    (p1 - p0).perp_dot(point - p0) > T::zero()
}
