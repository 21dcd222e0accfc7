use crate::core::traits::Real;
use std::ops;

/// 2D point/vector used for polygon vertices, edge normals, and box sizes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Vector scaled uniformly by `scale_factor`.
    pub fn scale(&self, scale_factor: T) -> Self {
        Vector2::new(scale_factor * self.x, scale_factor * self.y)
    }

    /// Dot product with `other`.
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Perpendicular dot product (`self.x * other.y - self.y * other.x`), the z component of the
    /// 3D cross product and twice the signed area of the triangle the two vectors span.
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean length.
    pub fn length(&self) -> T {
        self.dot(*self).sqrt()
    }

    /// Vector scaled to length 1.
    pub fn normalize(&self) -> Self {
        self.scale(T::one() / self.length())
    }

    /// Fuzzy equal comparison of both components using `fuzzy_epsilon` given.
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison of both components using `T::fuzzy_epsilon()`.
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }

    /// Vector rotated 90 degrees counter clockwise.
    pub fn perp(&self) -> Self {
        Vector2::new(-self.y, self.x)
    }

    /// Unit length vector rotated 90 degrees counter clockwise.
    pub fn unit_perp(&self) -> Self {
        self.perp().normalize()
    }
}

macro_rules! impl_binary_op {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        // reference operands delegate to the owned impl
        impl<T: Real> ops::$op_trait<&Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: &Vector2<T>) -> Self::Output {
                self $op *rhs
            }
        }

        impl<T: Real> ops::$op_trait<Vector2<T>> for &Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                *self $op rhs
            }
        }

        impl<T: Real> ops::$op_trait<&Vector2<T>> for &Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: &Vector2<T>) -> Self::Output {
                *self $op *rhs
            }
        }
    };
}

impl_binary_op!(Add, add, +);
impl_binary_op!(Sub, sub, -);

impl<T: Real> ops::Neg for Vector2<T> {
    type Output = Vector2<T>;
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

impl<T: Real> ops::Neg for &Vector2<T> {
    type Output = Vector2<T>;
    fn neg(self) -> Self::Output {
        -*self
    }
}
