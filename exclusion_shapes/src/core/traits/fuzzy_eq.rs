/// Fuzzy equality against an epsilon tolerance.
///
/// Interval endpoints, scanline intersections, and offset polygon vertices all come out of chains
/// of float arithmetic, so exact equality is rarely the right comparison for them.
///
/// # Examples
///
/// ```
/// # use exclusion_shapes::core::traits::*;
/// let a = 0.1 + 0.2;
/// assert_ne!(a, 0.3);
/// assert!(a.fuzzy_eq(0.3));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Default epsilon used by the comparison methods without an `_eps` suffix.
    fn fuzzy_epsilon() -> Self;

    /// True when `self` is within `fuzzy_epsilon` of `other`.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// True when `self` is within [FuzzyEq::fuzzy_epsilon] of `other`.
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// True when `self` is within `fuzzy_epsilon` of zero.
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;

    /// True when `self` is within [FuzzyEq::fuzzy_epsilon] of zero.
    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

macro_rules! float_fuzzy_eq_impl {
    ($ty:ty, $eps:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                $eps
            }
            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }
            #[inline]
            fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.fuzzy_eq_eps(0.0, fuzzy_epsilon)
            }
        }
    };
}

float_fuzzy_eq_impl!(f32, 1.0e-8);
float_fuzzy_eq_impl!(f64, 1.0e-8);
