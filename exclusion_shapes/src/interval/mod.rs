//! Interval set algebra over the x axis.
//!
//! Slab queries answer "which x ranges does the shape cover for `y` in `[top, top + height)`"
//! by scanning the shape boundary at the slab's two edges and then combining the results with
//! the operations in this module: union ([merge_intervals]) for exclusion queries, intersection
//! ([intersect_intervals]) and difference ([subtract_intervals]) for inclusion queries.
//!
//! All list operations take inputs sorted ascending by `x1` and produce sorted output.
//! Zero width intervals (`x1 == x2`) are legal values and are carried through the operations
//! rather than being discarded.
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed interval `[x1, x2]` on the x axis.
///
/// Invariant: `x1 <= x2` (zero width allowed).
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ShapeInterval<T = f64> {
    /// Start of the interval (inclusive).
    pub x1: T,
    /// End of the interval (inclusive).
    pub x2: T,
}

impl<T> ShapeInterval<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x1: T, x2: T) -> Self {
        debug_assert!(x1 <= x2, "interval must have x1 <= x2");
        ShapeInterval { x1, x2 }
    }

    /// Width of the interval (`x2 - x1`).
    #[inline]
    pub fn width(&self) -> T {
        self.x2 - self.x1
    }

    /// Returns true if `other` overlaps or touches this interval.
    #[inline]
    pub fn overlaps(&self, other: Self) -> bool {
        !(self.x1 > other.x2 || other.x1 > self.x2)
    }

    /// Intersection of two intervals, `None` if they do not overlap or touch.
    ///
    /// Intervals that touch at a single point intersect in a zero width interval.
    ///
    /// # Examples
    ///
    /// ```
    /// # use exclusion_shapes::interval::ShapeInterval;
    /// let i1 = ShapeInterval::new(0.0, 5.0);
    /// let i2 = ShapeInterval::new(3.0, 8.0);
    /// assert_eq!(i1.intersect(i2), Some(ShapeInterval::new(3.0, 5.0)));
    /// assert_eq!(i1.intersect(ShapeInterval::new(6.0, 7.0)), None);
    /// ```
    #[inline]
    pub fn intersect(&self, other: Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }

        Some(ShapeInterval {
            x1: num_traits::real::Real::max(self.x1, other.x1),
            x2: num_traits::real::Real::min(self.x2, other.x2),
        })
    }

    /// Union of two intervals, `None` if they do not overlap or touch (the union would not be a
    /// single interval).
    ///
    /// # Examples
    ///
    /// ```
    /// # use exclusion_shapes::interval::ShapeInterval;
    /// let i1 = ShapeInterval::new(0.0, 5.0);
    /// let i2 = ShapeInterval::new(3.0, 8.0);
    /// assert_eq!(i1.merge(i2), Some(ShapeInterval::new(0.0, 8.0)));
    /// assert_eq!(i1.merge(ShapeInterval::new(6.0, 7.0)), None);
    /// ```
    #[inline]
    pub fn merge(&self, other: Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }

        Some(ShapeInterval {
            x1: num_traits::real::Real::min(self.x1, other.x1),
            x2: num_traits::real::Real::max(self.x2, other.x2),
        })
    }

    /// Fuzzy equal comparison with another interval using `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x1.fuzzy_eq_eps(other.x1, fuzzy_epsilon)
            && self.x2.fuzzy_eq_eps(other.x2, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another interval using `T::fuzzy_epsilon()`.
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

/// Stable sort of intervals ascending by `x1`.
pub fn sort_intervals<T>(intervals: &mut [ShapeInterval<T>])
where
    T: Real,
{
    intervals.sort_by(|i1, i2| i1.x1.partial_cmp(&i2.x1).unwrap());
}

/// Merges two sorted interval lists into one sorted, coalesced list.
///
/// Intervals that overlap or touch are unioned into a single output interval. Runs in a single
/// O(n + m) pass over the two inputs. If either input is empty the other is returned unchanged
/// (no coalescing pass is applied to it).
///
/// # Examples
///
/// ```
/// # use exclusion_shapes::interval::{merge_intervals, ShapeInterval};
/// let a = vec![ShapeInterval::new(0.0, 3.0), ShapeInterval::new(6.0, 8.0)];
/// let b = vec![ShapeInterval::new(2.0, 4.0), ShapeInterval::new(10.0, 12.0)];
/// assert_eq!(
///     merge_intervals(&a, &b),
///     vec![
///         ShapeInterval::new(0.0, 4.0),
///         ShapeInterval::new(6.0, 8.0),
///         ShapeInterval::new(10.0, 12.0)
///     ]
/// );
/// ```
pub fn merge_intervals<T>(a: &[ShapeInterval<T>], b: &[ShapeInterval<T>]) -> Vec<ShapeInterval<T>>
where
    T: Real,
{
    if a.is_empty() {
        return b.to_vec();
    }

    if b.is_empty() {
        return a.to_vec();
    }

    let mut result = Vec::with_capacity(a.len() + b.len());
    let mut i1 = 0;
    let mut i2 = 0;

    while i1 < a.len() || i2 < b.len() {
        // pull the next interval by x1 order, favoring a on ties to keep the merge stable
        let next = if i2 == b.len() || (i1 < a.len() && a[i1].x1 <= b[i2].x1) {
            let v = a[i1];
            i1 += 1;
            v
        } else {
            let v = b[i2];
            i2 += 1;
            v
        };

        match result.last_mut() {
            Some(last) if next.x1 <= last.x2 => {
                if next.x2 > last.x2 {
                    last.x2 = next.x2;
                }
            }
            _ => result.push(next),
        }
    }

    result
}

/// Intersects two sorted interval lists, returning the sorted list of x ranges covered by both.
///
/// Two-pointer sweep: at each step the current pair is intersected, runs of overlapping pairwise
/// intersections are folded into one accumulated output interval, and whichever input interval
/// ends first is advanced. Empty input on either side yields an empty result.
///
/// # Examples
///
/// ```
/// # use exclusion_shapes::interval::{intersect_intervals, ShapeInterval};
/// let a = vec![ShapeInterval::new(0.0, 5.0), ShapeInterval::new(10.0, 15.0)];
/// let b = vec![ShapeInterval::new(3.0, 12.0)];
/// assert_eq!(
///     intersect_intervals(&a, &b),
///     vec![ShapeInterval::new(3.0, 5.0), ShapeInterval::new(10.0, 12.0)]
/// );
/// ```
pub fn intersect_intervals<T>(
    a: &[ShapeInterval<T>],
    b: &[ShapeInterval<T>],
) -> Vec<ShapeInterval<T>>
where
    T: Real,
{
    let mut result = Vec::new();
    if a.is_empty() || b.is_empty() {
        return result;
    }

    let mut accumulated: Option<ShapeInterval<T>> = None;
    let mut i1 = 0;
    let mut i2 = 0;

    while i1 < a.len() && i2 < b.len() {
        if let Some(pair_intr) = a[i1].intersect(b[i2]) {
            accumulated = match accumulated {
                Some(acc) => match acc.merge(pair_intr) {
                    Some(merged) => Some(merged),
                    None => {
                        result.push(acc);
                        Some(pair_intr)
                    }
                },
                None => Some(pair_intr),
            };
        }

        if a[i1].x2 < b[i2].x2 {
            i1 += 1;
        } else {
            i2 += 1;
        }
    }

    if let Some(acc) = accumulated {
        result.push(acc);
    }

    result
}

/// Subtracts the coverage of sorted list `b` from sorted list `a`.
///
/// Walks a mutable copy of `a` against `b`: a `b` interval fully covering an `a` interval removes
/// it, a `b` interval strictly inside splits it in two, and partial overlap truncates the covered
/// edge. Subtracting an empty list returns `a` unchanged.
///
/// # Examples
///
/// ```
/// # use exclusion_shapes::interval::{subtract_intervals, ShapeInterval};
/// let a = vec![ShapeInterval::new(0.0, 10.0)];
/// let b = vec![ShapeInterval::new(2.0, 4.0), ShapeInterval::new(6.0, 8.0)];
/// assert_eq!(
///     subtract_intervals(&a, &b),
///     vec![
///         ShapeInterval::new(0.0, 2.0),
///         ShapeInterval::new(4.0, 6.0),
///         ShapeInterval::new(8.0, 10.0)
///     ]
/// );
/// ```
pub fn subtract_intervals<T>(
    a: &[ShapeInterval<T>],
    b: &[ShapeInterval<T>],
) -> Vec<ShapeInterval<T>>
where
    T: Real,
{
    if a.is_empty() {
        return Vec::new();
    }

    let mut result = a.to_vec();
    if b.is_empty() {
        return result;
    }

    let mut i1 = 0;
    let mut i2 = 0;

    while i1 < result.len() && i2 < b.len() {
        let interval1 = result[i1];
        let interval2 = b[i2];

        if interval2.x1 <= interval1.x1 && interval2.x2 >= interval1.x2 {
            // fully covered, remove (do not advance i1, the next interval shifts into place)
            result.remove(i1);
        } else if interval2.x2 < interval1.x1 {
            i2 += 1;
        } else if interval2.x1 > interval1.x2 {
            i1 += 1;
        } else if interval2.x1 > interval1.x1 && interval2.x2 < interval1.x2 {
            // strictly inside, split into leading and trailing pieces
            result[i1].x1 = interval2.x2;
            result.insert(i1, ShapeInterval::new(interval1.x1, interval2.x1));
            i1 += 1;
            i2 += 1;
        } else if interval2.x1 <= interval1.x1 {
            // covers the left edge, the remainder may still overlap the next b interval
            result[i1].x1 = interval2.x2;
            i2 += 1;
        } else {
            // covers the right edge, b may extend over the next a interval
            result[i1].x2 = interval2.x1;
            i1 += 1;
        }
    }

    result
}
