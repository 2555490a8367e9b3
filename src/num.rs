use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Tolerance used by `equals` when none is given, in units in the last place.
pub const DEFAULT_ULPS: u32 = 4;

/// Scalar element of a [`Vector`](crate::Vector) or [`Matrix`](crate::Matrix).
pub trait Num:
    Copy
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
    + Neg<Output = Self>
    + PartialEq
    + std::iter::Sum
    + Debug
    + Display
{
    fn zero() -> Self;
    fn one() -> Self;

    /// Whether `self` and `other` are at most `max_ulps` representable steps apart.
    ///
    /// Bitwise-identical values always compare equal, and `max_ulps == 0` is bitwise equality.
    fn ulps_eq(self, other: Self, max_ulps: u32) -> bool;
}

/// Componentwise [`Num::ulps_eq`] over two equally sized component lists.
pub(crate) fn all_ulps_eq<T: Num, const N: usize>(lhs: [T; N], rhs: [T; N], max_ulps: u32) -> bool {
    lhs.into_iter().zip(rhs).all(|(l, r)| l.ulps_eq(r, max_ulps))
}

/// Scalars with a square root and trigonometry, required by the geometric operations.
pub trait Float: Num + PartialOrd {
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn to_radians(self) -> Self;
}

macro_rules! impl_float {
    ($($ty:ident),+) => {
        $(impl Num for $ty {
            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            fn ulps_eq(self, other: Self, max_ulps: u32) -> bool {
                if self.to_bits() == other.to_bits() {
                    return true;
                }
                max_ulps > 0 && approx::UlpsEq::ulps_eq(&self, &other, 0.0, max_ulps)
            }
        }

        impl Float for $ty {
            fn sqrt(self) -> Self {
                self.sqrt()
            }

            fn sin(self) -> Self {
                self.sin()
            }

            fn cos(self) -> Self {
                self.cos()
            }

            fn to_radians(self) -> Self {
                self.to_radians()
            }
        })+
    };
}

impl_float!(f32, f64);

macro_rules! impl_int {
    ($($ty:ident),+) => {
        $(impl Num for $ty {
            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            // One ULP of an integer is one.
            fn ulps_eq(self, other: Self, max_ulps: u32) -> bool {
                u64::from(self.abs_diff(other)) <= u64::from(max_ulps)
            }
        })+
    };
}

impl_int!(i32, i64);
