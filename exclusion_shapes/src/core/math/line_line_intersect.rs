use super::{Vector2, base_math::parametric_from_point};
use crate::core::traits::Real;

/// Result of intersecting two line segments.
#[derive(Debug, Copy, Clone)]
pub enum LineLineIntr<T>
where
    T: Real,
{
    /// Segments are parallel (or degenerate) and share no point.
    NoIntersect,
    /// Segments intersect at a single point within both of them.
    TrueIntersect {
        /// Parametric value of the intersect on the first segment.
        seg1_t: T,
        /// Parametric value of the intersect on the second segment.
        seg2_t: T,
    },
    /// Segments are collinear and share more than a single point.
    Overlapping {
        /// Parametric value on the second segment where the shared span starts.
        seg2_t0: T,
        /// Parametric value on the second segment where the shared span ends.
        seg2_t1: T,
    },
    /// The segments' lines intersect but the point lies outside at least one of the segments.
    FalseIntersect {
        /// Parametric value of the intersect on the first segment.
        seg1_t: T,
        /// Parametric value of the intersect on the second segment.
        seg2_t: T,
    },
}

/// Intersects the segments `v1->v2` and `u1->u2`, handling parallel, collinear, and single point
/// degenerate segments.
///
/// Solutions are parametric values for `P(t) = p0 + t * (p1 - p0)` on each segment. Parametric
/// range checks are scaled by the segment length before fuzzy comparing against `epsilon` so the
/// tolerance is applied at position scale rather than parameter scale.
///
/// Offset edge joining and first-fit placement both key off the
/// [TrueIntersect](LineLineIntr::TrueIntersect) case only: an intersect that requires extending
/// either segment ([FalseIntersect](LineLineIntr::FalseIntersect)) means the two offset edges
/// diverge at their shared corner and an arc fillet is required instead of a miter.
///
/// # Examples
///
/// ```
/// # use exclusion_shapes::core::traits::*;
/// # use exclusion_shapes::core::math::*;
/// // a horizontal offset edge crossing a vertical one
/// let v1 = Vector2::new(0.0, 2.0);
/// let v2 = Vector2::new(10.0, 2.0);
/// let u1 = Vector2::new(8.0, 0.0);
/// let u2 = Vector2::new(8.0, 10.0);
/// if let LineLineIntr::TrueIntersect { seg1_t, seg2_t } = line_line_intr(v1, v2, u1, u2, 1e-8) {
///     assert_eq!(seg1_t, 0.8);
///     assert_eq!(seg2_t, 0.2);
/// } else {
///     unreachable!("expected true intersection between line segments");
/// }
/// ```
pub fn line_line_intr<T>(
    v1: Vector2<T>,
    v2: Vector2<T>,
    u1: Vector2<T>,
    u2: Vector2<T>,
    epsilon: T,
) -> LineLineIntr<T>
where
    T: Real,
{
    // parametric equation form using perpendicular products
    // http://geomalgorithms.com/a05-_intersect-1.html
    use LineLineIntr::*;

    let v = v2 - v1;
    let u = u2 - u1;
    let v_pdot_u = v.perp_dot(u);
    let w = v1 - u1;

    let v_length = v.length();
    let u_length = u.length();

    if !v_pdot_u.fuzzy_eq_zero_eps(epsilon) {
        // not parallel, almost parallel counts as parallel to avoid far away intersects
        let seg1_t = u.perp_dot(w) / v_pdot_u;
        let seg2_t = v.perp_dot(w) / v_pdot_u;
        if !(seg1_t * v_length).fuzzy_in_range_eps(T::zero(), v_length, epsilon)
            || !(seg2_t * u_length).fuzzy_in_range_eps(T::zero(), u_length, epsilon)
        {
            return FalseIntersect { seg1_t, seg2_t };
        }
        return TrueIntersect { seg1_t, seg2_t };
    }

    // parallel, collinear only if both perpendicular products with w are zero
    let v_pdot_w = v.perp_dot(w);
    let u_pdot_w = u.perp_dot(w);
    if !v_pdot_w.fuzzy_eq_zero_eps(epsilon) || !u_pdot_w.fuzzy_eq_zero_eps(epsilon) {
        return NoIntersect;
    }

    let v_is_point = v1.fuzzy_eq_eps(v2, epsilon);
    let u_is_point = u1.fuzzy_eq_eps(u2, epsilon);

    if v_is_point && u_is_point {
        if v1.fuzzy_eq_eps(u1, epsilon) {
            return TrueIntersect {
                seg1_t: T::zero(),
                seg2_t: T::zero(),
            };
        }
        return NoIntersect;
    }

    if v_is_point {
        let seg2_t = parametric_from_point(u1, u2, v1, epsilon);
        if (seg2_t * u_length).fuzzy_in_range_eps(T::zero(), u_length, epsilon) {
            return TrueIntersect {
                seg1_t: T::zero(),
                seg2_t,
            };
        }

        return NoIntersect;
    }

    if u_is_point {
        let seg1_t = parametric_from_point(v1, v2, u1, epsilon);
        if (seg1_t * v_length).fuzzy_in_range_eps(T::zero(), v_length, epsilon) {
            return TrueIntersect {
                seg1_t,
                seg2_t: T::zero(),
            };
        }

        return NoIntersect;
    }

    // collinear with both segments longer than a point, project v's endpoints onto u
    let w2 = v2 - u1;
    let (mut seg2_t0, mut seg2_t1) = if u.x.fuzzy_eq_zero_eps(epsilon) {
        (w.y / u.y, w2.y / u.y)
    } else {
        (w.x / u.x, w2.x / u.x)
    };

    if seg2_t0 > seg2_t1 {
        std::mem::swap(&mut seg2_t0, &mut seg2_t1);
    }

    // sticky range check, a projected span ending right at the segment boundary still intersects
    if !(seg2_t0 * u_length).fuzzy_lt_eps(u_length, epsilon)
        || !(seg2_t1 * u_length).fuzzy_gt_eps(T::zero(), epsilon)
    {
        return NoIntersect;
    }

    seg2_t0 = num_traits::real::Real::max(seg2_t0, T::zero());
    seg2_t1 = num_traits::real::Real::min(seg2_t1, T::one());

    if ((seg2_t1 - seg2_t0) * u_length).fuzzy_eq_zero_eps(epsilon) {
        // the shared span rounds to a single point, the segments line up end to end
        let seg1_t = if v1.fuzzy_eq_eps(u1, epsilon) || v1.fuzzy_eq_eps(u2, epsilon) {
            T::zero()
        } else {
            T::one()
        };

        return TrueIntersect {
            seg1_t,
            seg2_t: seg2_t0,
        };
    }

    Overlapping { seg2_t0, seg2_t1 }
}
