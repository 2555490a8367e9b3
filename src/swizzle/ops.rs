//! Elementwise arithmetic over swizzles, vectors and scalars.
//!
//! Every binary operator reads its swizzle operands into vectors and combines them component by
//! component into a new `Vector<T, N>`. Compound assignment on a [`SwizzleMut`] computes the full
//! result first and then writes it back through the view.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{Swizzle, SwizzleMut};
use crate::num::Num;
use crate::vector::Vector;

macro_rules! impl_swizzle_ops {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $tok:tt;)+) => {
        $(impl<T: Num, const D: usize, const E: usize, const N: usize> $Op<Swizzle<'_, T, E, N>>
            for Swizzle<'_, T, D, N>
        {
            type Output = Vector<T, N>;

            #[inline]
            fn $op(self, rhs: Swizzle<'_, T, E, N>) -> Vector<T, N> {
                self.read() $tok rhs.read()
            }
        }

        impl<T: Num, const D: usize, const N: usize> $Op<Vector<T, N>> for Swizzle<'_, T, D, N> {
            type Output = Vector<T, N>;

            #[inline]
            fn $op(self, rhs: Vector<T, N>) -> Vector<T, N> {
                self.read() $tok rhs
            }
        }

        impl<T: Num, const D: usize, const N: usize> $Op<Swizzle<'_, T, D, N>> for Vector<T, N> {
            type Output = Vector<T, N>;

            #[inline]
            fn $op(self, rhs: Swizzle<'_, T, D, N>) -> Vector<T, N> {
                self $tok rhs.read()
            }
        }

        impl<T: Num, const D: usize, const N: usize> $Op<T> for Swizzle<'_, T, D, N> {
            type Output = Vector<T, N>;

            #[inline]
            fn $op(self, rhs: T) -> Vector<T, N> {
                self.read() $tok rhs
            }
        }

        impl<T: Num, const D: usize, const E: usize, const N: usize> $OpAssign<Swizzle<'_, T, E, N>>
            for SwizzleMut<'_, T, D, N>
        {
            #[inline]
            fn $op_assign(&mut self, rhs: Swizzle<'_, T, E, N>) {
                let result = self.read() $tok rhs.read();
                self.write(result);
            }
        }

        impl<T: Num, const D: usize, const N: usize> $OpAssign<Vector<T, N>> for SwizzleMut<'_, T, D, N> {
            #[inline]
            fn $op_assign(&mut self, rhs: Vector<T, N>) {
                let result = self.read() $tok rhs;
                self.write(result);
            }
        }

        impl<T: Num, const D: usize, const N: usize> $OpAssign<T> for SwizzleMut<'_, T, D, N> {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                let result = self.read() $tok rhs;
                self.write(result);
            }
        }

        impl<T: Num, const D: usize, const N: usize> $OpAssign<Swizzle<'_, T, D, N>> for Vector<T, N> {
            #[inline]
            fn $op_assign(&mut self, rhs: Swizzle<'_, T, D, N>) {
                *self = *self $tok rhs.read();
            }
        })+
    };
}

impl_swizzle_ops! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}

macro_rules! impl_scalar_lhs_ops {
    ($($ty:ty),+) => {
        $(impl<const D: usize, const N: usize> Add<Swizzle<'_, $ty, D, N>> for $ty {
            type Output = Vector<$ty, N>;

            fn add(self, rhs: Swizzle<'_, $ty, D, N>) -> Vector<$ty, N> {
                self + rhs.read()
            }
        }

        impl<const D: usize, const N: usize> Sub<Swizzle<'_, $ty, D, N>> for $ty {
            type Output = Vector<$ty, N>;

            fn sub(self, rhs: Swizzle<'_, $ty, D, N>) -> Vector<$ty, N> {
                self - rhs.read()
            }
        }

        impl<const D: usize, const N: usize> Mul<Swizzle<'_, $ty, D, N>> for $ty {
            type Output = Vector<$ty, N>;

            fn mul(self, rhs: Swizzle<'_, $ty, D, N>) -> Vector<$ty, N> {
                self * rhs.read()
            }
        }

        impl<const D: usize, const N: usize> Div<Swizzle<'_, $ty, D, N>> for $ty {
            type Output = Vector<$ty, N>;

            fn div(self, rhs: Swizzle<'_, $ty, D, N>) -> Vector<$ty, N> {
                self / rhs.read()
            }
        })+
    };
}

impl_scalar_lhs_ops!(f32, f64, i32, i64);

impl<T: Num, const D: usize, const N: usize> Neg for Swizzle<'_, T, D, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn neg(self) -> Vector<T, N> {
        -self.read()
    }
}

impl<T: Num, const D: usize, const E: usize, const N: usize> PartialEq<Swizzle<'_, T, E, N>>
    for Swizzle<'_, T, D, N>
{
    fn eq(&self, other: &Swizzle<'_, T, E, N>) -> bool {
        self.gather() == other.gather()
    }
}

impl<T: Num, const D: usize, const N: usize> PartialEq<Vector<T, N>> for Swizzle<'_, T, D, N> {
    fn eq(&self, other: &Vector<T, N>) -> bool {
        self.gather() == other.0
    }
}

impl<T: Num, const D: usize, const N: usize> PartialEq<Swizzle<'_, T, D, N>> for Vector<T, N> {
    fn eq(&self, other: &Swizzle<'_, T, D, N>) -> bool {
        self.0 == other.gather()
    }
}

impl<T: Num, const D: usize, const N: usize> PartialEq<Vector<T, N>> for SwizzleMut<'_, T, D, N> {
    fn eq(&self, other: &Vector<T, N>) -> bool {
        self.as_swizzle() == *other
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{Vec2, Vec3, Vec4, Vector};

    #[test]
    fn swizzle_plus_swizzle_is_elementwise() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec4::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(a.zyx() + b.wxw(), Vec3::new(43.0, 12.0, 41.0));
        assert_eq!(a.xy() - b.zz(), Vec2::new(-29.0, -28.0));
    }

    #[test]
    fn mixed_operands_commute_for_add_and_mul() {
        let a = Vec3::new(1.5, -2.0, 4.0);
        let b = Vec3::new(0.5, 3.0, -1.0);
        assert_eq!(a.zxy() + b, b + a.zxy());
        assert_eq!(a.zxy() * b, b * a.zxy());
        assert_eq!(a.zxy() * 2.0, 2.0 * a.zxy());
    }

    #[test]
    fn scalar_division_uses_native_semantics() {
        let v = Vec2::new(1.0, -1.0);
        let q = v.yx() / 0.0;
        assert_eq!(q, Vec2::new(f32::NEG_INFINITY, f32::INFINITY));
        assert_eq!(4.0 / Vec2::new(2.0, 8.0).xy(), Vec2::new(2.0, 0.5));
    }

    #[test]
    fn negation_leaves_source_untouched() {
        let v = Vector::<i32, 3>::new(1, -2, 3);
        assert_eq!(-v.zx(), Vector::<i32, 2>::new(-3, -1));
        assert_eq!(v, Vector::<i32, 3>::new(1, -2, 3));
    }

    #[test]
    fn compound_assignment_writes_back_through_view() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let other = Vec2::new(10.0, 100.0);

        let mut wy = v.wy_mut();
        wy += other.yx();
        assert_eq!(v, Vec4::new(1.0, 12.0, 3.0, 104.0));

        let mut xz = v.xz_mut();
        xz *= 2.0;
        xz -= Vec2::new(1.0, 1.0);
        assert_eq!(v, Vec4::new(1.0, 12.0, 5.0, 104.0));
    }

    #[test]
    fn compound_assignment_through_repeated_index() {
        let mut v = Vec2::new(1.0, 2.0);
        let mut xx = v.xx_mut();
        xx += Vec2::new(10.0, 20.0);
        // Both lanes target x; the second sum is written last.
        assert_eq!(v, Vec2::new(21.0, 2.0));
    }

    #[test]
    fn vector_compound_with_swizzle_rhs() {
        let mut v = Vec3::new(1.0, 1.0, 1.0);
        let other = Vec4::new(1.0, 2.0, 3.0, 4.0);
        v += other.wzy();
        assert_eq!(v, Vec3::new(5.0, 4.0, 3.0));
        v /= other.xxy();
        assert_relative_eq!(v.z(), 1.5);
    }

    #[test]
    fn equality_across_views_and_vectors() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec4::new(3.0, 2.0, 1.0, 0.0);
        assert!(a.xyz() == b.zyx());
        assert!(a.xy() != b.xy());
        assert!(a.zyx() == Vec3::new(3.0, 2.0, 1.0));
        assert!(Vec2::new(2.0, 3.0) == a.yz());
    }
}
