use super::FuzzyEq;

/// Fuzzy ordering comparisons built on top of [FuzzyEq].
///
/// Both directions are "sticky": `fuzzy_gt_eps` and `fuzzy_lt_eps` admit values up to
/// `fuzzy_epsilon` past the boundary, so a range check accepts endpoints that float error pushed
/// slightly outside.
pub trait FuzzyOrd: FuzzyEq {
    /// True when `self` is greater than `other` or within `fuzzy_epsilon` of it.
    fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// [FuzzyOrd::fuzzy_gt_eps] with the default epsilon.
    #[inline]
    fn fuzzy_gt(&self, other: Self) -> bool {
        self.fuzzy_gt_eps(other, Self::fuzzy_epsilon())
    }

    /// True when `self` is less than `other` or within `fuzzy_epsilon` of it.
    fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// [FuzzyOrd::fuzzy_lt_eps] with the default epsilon.
    #[inline]
    fn fuzzy_lt(&self, other: Self) -> bool {
        self.fuzzy_lt_eps(other, Self::fuzzy_epsilon())
    }

    /// True when `self` is between `min` and `max`, widened by `fuzzy_epsilon` on both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exclusion_shapes::core::traits::*;
    /// assert!(0.5f64.fuzzy_in_range_eps(0.0, 1.0, 1e-5));
    /// assert!(1.0f64.fuzzy_in_range_eps(0.0, 1.0, 1e-5));
    /// assert!((-0.01f64).fuzzy_in_range_eps(0.0, 1.0, 0.05));
    /// assert!(!1.1f64.fuzzy_in_range_eps(0.0, 1.0, 0.05));
    /// ```
    #[inline]
    fn fuzzy_in_range_eps(&self, min: Self, max: Self, fuzzy_epsilon: Self) -> bool {
        self.fuzzy_gt_eps(min, fuzzy_epsilon) && self.fuzzy_lt_eps(max, fuzzy_epsilon)
    }

    /// [FuzzyOrd::fuzzy_in_range_eps] with the default epsilon.
    #[inline]
    fn fuzzy_in_range(&self, min: Self, max: Self) -> bool {
        self.fuzzy_in_range_eps(min, max, Self::fuzzy_epsilon())
    }
}

macro_rules! float_fuzzy_ord_impl {
    ($ty:ty) => {
        impl FuzzyOrd for $ty {
            #[inline]
            fn fuzzy_gt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                *self + fuzzy_epsilon > other
            }
            #[inline]
            fn fuzzy_lt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                *self < other + fuzzy_epsilon
            }
        }
    };
}

float_fuzzy_ord_impl!(f32);
float_fuzzy_ord_impl!(f64);
