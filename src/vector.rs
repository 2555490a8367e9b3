use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::{Error, Result};
use crate::num::{self, Float, Num, DEFAULT_ULPS};
use crate::swizzle::Components;

/// A vector of `D` scalar components, `D` being 2, 3 or 4.
///
/// Components are addressed by index, or by name under any of three alias groups: positional
/// (`x y z w`), color (`r g b a`) and texture (`s t p q`). The groups are only different names for
/// the same slots: `v.x()`, `v.r()`, `v.s()` and `v[0]` all read one and the same element.
///
/// Multi-letter names (`v.zyx()`, `v.rrgg_mut()`, `v.set_ts(..)`) select components in any order,
/// with repetition, producing [`Swizzle`](crate::Swizzle) views.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vector<T, const D: usize>(pub(crate) [T; D]);

pub type Vec2 = Vector<f32, 2>;
pub type Vec3 = Vector<f32, 3>;
pub type Vec4 = Vector<f32, 4>;

impl<T, const D: usize> Vector<T, D> {
    pub(crate) const DIM_CHECK: () = assert!(D >= 2 && D <= 4, "vectors have 2, 3 or 4 components");

    /// Number of components.
    pub const DIM: usize = D;

    #[inline]
    pub const fn from_array(array: [T; D]) -> Self {
        let () = Self::DIM_CHECK;
        Vector(array)
    }

    #[inline]
    pub fn to_array(self) -> [T; D] {
        self.0
    }

    #[inline]
    pub fn as_array(&self) -> &[T; D] {
        &self.0
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Bounds-checked mutable access to component `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let index = Error::check_index(index, D)?;
        Ok(&mut self.0[index])
    }

    #[inline]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Vector<U, D> {
        Vector(self.0.map(f))
    }
}

impl<T: Copy, const D: usize> Vector<T, D> {
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::from_array([value; D])
    }

    /// Bounds-checked read of component `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        let index = Error::check_index(index, D)?;
        Ok(self.0[index])
    }

    /// Bounds-checked write of component `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    #[inline]
    pub(crate) fn zip_map(self, rhs: [T; D], mut f: impl FnMut(T, T) -> T) -> Self {
        let mut ret = self;
        for (l, r) in ret.0.iter_mut().zip(rhs) {
            *l = f(*l, r);
        }
        ret
    }
}

impl<T: Num, const D: usize> Vector<T, D> {
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    #[inline]
    pub fn one() -> Self {
        Self::splat(T::one())
    }

    pub fn dot(self, rhs: Self) -> T {
        self.0.iter().zip(rhs.0).map(|(&l, r)| l * r).sum()
    }

    /// Squared magnitude.
    pub fn mag2(self) -> T {
        self.dot(self)
    }

    /// Componentwise comparison with a tolerance of [`DEFAULT_ULPS`].
    pub fn equals(&self, other: impl Components<T, D>) -> bool {
        self.equals_ulps(other, DEFAULT_ULPS)
    }

    /// Componentwise comparison accepting differences of at most `max_ulps` representable steps.
    pub fn equals_ulps(&self, other: impl Components<T, D>, max_ulps: u32) -> bool {
        num::all_ulps_eq(self.0, other.components(), max_ulps)
    }
}

impl<T: Float, const D: usize> Vector<T, D> {
    pub fn mag(self) -> T {
        self.mag2().sqrt()
    }

    /// This vector scaled to unit length. A zero vector yields NaN components.
    pub fn normal(self) -> Self {
        self / self.mag()
    }

    /// Scales this vector to unit length in place, returning the result.
    pub fn normalize(&mut self) -> Self {
        *self = self.normal();
        *self
    }

    /// Reflects this incident vector about the surface normal `n`, which should be normalized.
    pub fn reflect(self, n: Self) -> Self {
        let two = T::one() + T::one();
        self - n * (two * n.dot(self))
    }

    /// Refracts this incident vector through a surface with normal `n` and ratio of indices of
    /// refraction `eta`. Returns the zero vector on total internal reflection.
    pub fn refract(self, n: Self, eta: T) -> Self {
        let cos_i = n.dot(self);
        let k = T::one() - eta * eta * (T::one() - cos_i * cos_i);
        if k < T::zero() {
            Self::zero()
        } else {
            self * eta - n * (eta * cos_i + k.sqrt())
        }
    }

    /// Linear interpolation, `t = 0` giving `self` and `t = 1` giving `rhs`.
    pub fn lerp(self, rhs: Self, t: T) -> Self {
        self + (rhs - self) * t
    }
}

impl<T> Vector<T, 2> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Vector([x, y])
    }

    #[inline]
    pub fn extend(self, z: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        Vector([x, y, z])
    }

    #[inline]
    pub fn extend2(self, z: T, w: T) -> Vector<T, 4> {
        let [x, y] = self.0;
        Vector([x, y, z, w])
    }
}

impl<T> Vector<T, 3> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Vector([x, y, z])
    }

    #[inline]
    pub fn extend(self, w: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        Vector([x, y, z, w])
    }
}

impl<T: Num> Vector<T, 3> {
    pub fn cross(self, rhs: Self) -> Self {
        let [x, y, z] = self.0;
        let [rx, ry, rz] = rhs.0;
        Vector([y * rz - z * ry, z * rx - x * rz, x * ry - y * rx])
    }
}

impl<T> Vector<T, 4> {
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Vector([x, y, z, w])
    }
}

impl<T: Num, const D: usize> Default for Vector<T, D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const D: usize> From<[T; D]> for Vector<T, D> {
    fn from(value: [T; D]) -> Self {
        Self::from_array(value)
    }
}

impl<T, const D: usize> From<Vector<T, D>> for [T; D] {
    fn from(value: Vector<T, D>) -> Self {
        value.0
    }
}

impl<T: Copy, const D: usize> TryFrom<&[T]> for Vector<T, D> {
    type Error = Error;

    fn try_from(value: &[T]) -> Result<Self> {
        Ok(Self::from_array(Error::fixed_array(value)?))
    }
}

impl<T> From<(Vector<T, 2>, T)> for Vector<T, 3> {
    fn from((xy, z): (Vector<T, 2>, T)) -> Self {
        xy.extend(z)
    }
}

impl<T> From<(Vector<T, 2>, T, T)> for Vector<T, 4> {
    fn from((xy, z, w): (Vector<T, 2>, T, T)) -> Self {
        xy.extend2(z, w)
    }
}

impl<T> From<(Vector<T, 3>, T)> for Vector<T, 4> {
    fn from((xyz, w): (Vector<T, 3>, T)) -> Self {
        xyz.extend(w)
    }
}

impl<T, const D: usize> Index<usize> for Vector<T, D> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.0.get(index) {
            Some(value) => value,
            None => panic!("{}", Error::IndexOutOfRange { index, dim: D }),
        }
    }
}

impl<T, const D: usize> IndexMut<usize> for Vector<T, D> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.0.get_mut(index) {
            Some(value) => value,
            None => panic!("{}", Error::IndexOutOfRange { index, dim: D }),
        }
    }
}

macro_rules! impl_elementwise_ops {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $tok:tt;)+) => {
        $(impl<T: Num, const D: usize> $Op for Vector<T, D> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                self.zip_map(rhs.0, |l, r| l $tok r)
            }
        }

        impl<T: Num, const D: usize> $Op<T> for Vector<T, D> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: T) -> Self {
                self.map(|l| l $tok rhs)
            }
        }

        impl<T: Num, const D: usize> $OpAssign for Vector<T, D> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = *self $tok rhs;
            }
        }

        impl<T: Num, const D: usize> $OpAssign<T> for Vector<T, D> {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                *self = *self $tok rhs;
            }
        })+
    };
}

impl_elementwise_ops! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}

// Scalar on the left: `s op v` is `[s op v[i]]`, so `2.0 - v` is `splat(2.0) - v`.
macro_rules! impl_scalar_lhs_ops {
    ($($ty:ty),+) => {
        $(impl<const D: usize> Add<Vector<$ty, D>> for $ty {
            type Output = Vector<$ty, D>;

            fn add(self, rhs: Vector<$ty, D>) -> Vector<$ty, D> {
                rhs.map(|r| self + r)
            }
        }

        impl<const D: usize> Sub<Vector<$ty, D>> for $ty {
            type Output = Vector<$ty, D>;

            fn sub(self, rhs: Vector<$ty, D>) -> Vector<$ty, D> {
                rhs.map(|r| self - r)
            }
        }

        impl<const D: usize> Mul<Vector<$ty, D>> for $ty {
            type Output = Vector<$ty, D>;

            fn mul(self, rhs: Vector<$ty, D>) -> Vector<$ty, D> {
                rhs.map(|r| self * r)
            }
        }

        impl<const D: usize> Div<Vector<$ty, D>> for $ty {
            type Output = Vector<$ty, D>;

            fn div(self, rhs: Vector<$ty, D>) -> Vector<$ty, D> {
                rhs.map(|r| self / r)
            }
        })+
    };
}

impl_scalar_lhs_ops!(f32, f64, i32, i64);

impl<T: Num, const D: usize> Neg for Vector<T, D> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

/// Formats as `[e0,e1,...]`. Precision and other float flags apply to every component.
impl<T: fmt::Display, const D: usize> fmt::Display for Vector<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            fmt::Display::fmt(c, f)?;
        }
        f.write_str("]")
    }
}
