use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Scalar type for all shape geometry, with `f64` as the crate wide default.
///
/// The [IndexableNum] bound lets the same scalar drive the polygon edge index. `min_value` and
/// `max_value` are redefined here because the `num_traits::real::Real` and `num_traits::Bounded`
/// supertraits both provide them, which makes unqualified calls ambiguous.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + 'static
{
    #[inline]
    fn tau() -> Self {
        Self::from(std::f64::consts::TAU).unwrap()
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn min_value() -> Self {
        num_traits::real::Real::min_value()
    }

    #[inline]
    fn max_value() -> Self {
        num_traits::real::Real::max_value()
    }
}

impl Real for f32 {
    #[inline]
    fn tau() -> Self {
        std::f32::consts::TAU
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }
}

impl Real for f64 {
    #[inline]
    fn tau() -> Self {
        std::f64::consts::TAU
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }
}
