use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::{Error, Result};
use crate::num::{Float, Num, DEFAULT_ULPS};
use crate::vector::Vector;

pub type Mat2 = Matrix<f32, 2, 2>;
pub type Mat3 = Matrix<f32, 3, 3>;
pub type Mat4 = Matrix<f32, 4, 4>;
pub type Mat2x3 = Matrix<f32, 2, 3>;
pub type Mat2x4 = Matrix<f32, 2, 4>;
pub type Mat3x2 = Matrix<f32, 3, 2>;
pub type Mat3x4 = Matrix<f32, 3, 4>;
pub type Mat4x2 = Matrix<f32, 4, 2>;
pub type Mat4x3 = Matrix<f32, 4, 3>;

/// A matrix of `M` rows and `N` columns, stored as `N` column vectors.
///
/// `m[j]` is column `j` and `m[(i, j)]` is the element at row `i`, column `j`.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Matrix<T, const M: usize, const N: usize>([Vector<T, M>; N]);

impl<T, const M: usize, const N: usize> Matrix<T, M, N> {
    const SHAPE_CHECK: () = {
        let () = Vector::<T, M>::DIM_CHECK;
        let () = Vector::<T, N>::DIM_CHECK;
    };

    pub const ROWS: usize = M;
    pub const COLUMNS: usize = N;

    #[inline]
    pub const fn from_columns(columns: [Vector<T, M>; N]) -> Self {
        let () = Self::SHAPE_CHECK;
        Matrix(columns)
    }

    #[inline]
    pub fn to_columns(self) -> [Vector<T, M>; N] {
        self.0
    }
}

impl<T: Copy, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Builds a matrix from its rows, which reads like the written-out matrix.
    pub fn from_rows(rows: [[T; N]; M]) -> Self {
        Self::from_columns(std::array::from_fn(|j| Vector(rows.map(|row| row[j]))))
    }

    /// Bounds-checked copy of column `j`.
    pub fn column(&self, j: usize) -> Result<Vector<T, M>> {
        let j = Error::check_index(j, N)?;
        Ok(self.0[j])
    }

    pub fn row(&self, i: usize) -> Result<Vector<T, N>> {
        let i = Error::check_index(i, M)?;
        Ok(Vector(self.0.map(|column| column.0[i])))
    }

    /// Bounds-checked read of the element at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Result<T> {
        self.column(j)?.get(i)
    }

    pub fn transpose(self) -> Matrix<T, N, M> {
        Matrix::from_columns(std::array::from_fn(|i| Vector(self.0.map(|column| column.0[i]))))
    }

    #[inline]
    pub(crate) fn map(self, mut f: impl FnMut(T) -> T) -> Self {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    #[inline]
    pub(crate) fn zip_map(self, rhs: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        let mut ret = self;
        for (column, rhs) in ret.0.iter_mut().zip(rhs.0) {
            for (l, r) in column.0.iter_mut().zip(rhs.0) {
                *l = f(*l, r);
            }
        }
        ret
    }
}

impl<T: Num, const M: usize, const N: usize> Matrix<T, M, N> {
    pub fn zero() -> Self {
        Self::from_columns([Vector::zero(); N])
    }

    pub fn equals(&self, other: &Self) -> bool {
        self.equals_ulps(other, DEFAULT_ULPS)
    }

    pub fn equals_ulps(&self, other: &Self, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(l, r)| l.equals_ulps(*r, max_ulps))
    }
}

impl<T: Num, const N: usize> Matrix<T, N, N> {
    pub fn identity() -> Self {
        let mut ret = Self::zero();
        for i in 0..N {
            ret[(i, i)] = T::one();
        }
        ret
    }
}

impl<T: Float> Matrix<T, 4, 4> {
    #[rustfmt::skip]
    pub fn rotation_x(theta: T) -> Self {
        let o = T::one();
        let z = T::zero();
        let cos = theta.cos();
        let sin = theta.sin();
        Matrix::from_rows([[   o,   z,   z,   z],
                           [   z, cos,-sin,   z],
                           [   z, sin, cos,   z],
                           [   z,   z,   z,   o]])
    }

    #[rustfmt::skip]
    pub fn rotation_y(theta: T) -> Self {
        let o = T::one();
        let z = T::zero();
        let cos = theta.cos();
        let sin = theta.sin();
        Matrix::from_rows([[ cos,   z, sin,   z],
                           [   z,   o,   z,   z],
                           [-sin,   z, cos,   z],
                           [   z,   z,   z,   o]])
    }

    #[rustfmt::skip]
    pub fn rotation_z(theta: T) -> Self {
        let o = T::one();
        let z = T::zero();
        let cos = theta.cos();
        let sin = theta.sin();
        Matrix::from_rows([[ cos,-sin,   z,   z],
                           [ sin, cos,   z,   z],
                           [   z,   z,   o,   z],
                           [   z,   z,   z,   o]])
    }
}

impl<T: Num> Matrix<T, 4, 4> {
    pub fn translation(offset: Vector<T, 3>) -> Self {
        let mut ret = Self::identity();
        ret.0[3] = offset.extend(T::one());
        ret
    }

    pub fn scale(factors: Vector<T, 3>) -> Self {
        let mut ret = Self::identity();
        for i in 0..3 {
            ret[(i, i)] = factors[i];
        }
        ret
    }
}

impl<T: Num, const M: usize, const N: usize> Default for Matrix<T, M, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const M: usize, const N: usize> From<[Vector<T, M>; N]> for Matrix<T, M, N> {
    fn from(columns: [Vector<T, M>; N]) -> Self {
        Self::from_columns(columns)
    }
}

impl<T, const M: usize, const N: usize> Index<usize> for Matrix<T, M, N> {
    type Output = Vector<T, M>;

    fn index(&self, j: usize) -> &Vector<T, M> {
        match self.0.get(j) {
            Some(column) => column,
            None => panic!("{}", Error::IndexOutOfRange { index: j, dim: N }),
        }
    }
}

impl<T, const M: usize, const N: usize> IndexMut<usize> for Matrix<T, M, N> {
    fn index_mut(&mut self, j: usize) -> &mut Vector<T, M> {
        match self.0.get_mut(j) {
            Some(column) => column,
            None => panic!("{}", Error::IndexOutOfRange { index: j, dim: N }),
        }
    }
}

impl<T, const M: usize, const N: usize> Index<(usize, usize)> for Matrix<T, M, N> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self[j][i]
    }
}

impl<T, const M: usize, const N: usize> IndexMut<(usize, usize)> for Matrix<T, M, N> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self[j][i]
    }
}

macro_rules! impl_matrix_ops {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $tok:tt;)+) => {
        $(impl<T: Num, const M: usize, const N: usize> $Op for Matrix<T, M, N> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                self.zip_map(rhs, |l, r| l $tok r)
            }
        }

        impl<T: Num, const M: usize, const N: usize> $OpAssign for Matrix<T, M, N> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = *self $tok rhs;
            }
        })+
    };
}

impl_matrix_ops! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
}

macro_rules! impl_matrix_scalar_ops {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $tok:tt;)+) => {
        $(impl<T: Num, const M: usize, const N: usize> $Op<T> for Matrix<T, M, N> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: T) -> Self {
                self.map(|l| l $tok rhs)
            }
        }

        impl<T: Num, const M: usize, const N: usize> $OpAssign<T> for Matrix<T, M, N> {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                *self = *self $tok rhs;
            }
        })+
    };
}

impl_matrix_scalar_ops! {
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}

macro_rules! impl_mul_lhs {
    ($($ty:ty),+) => {
        $(impl<const M: usize, const N: usize> Mul<Matrix<$ty, M, N>> for $ty {
            type Output = Matrix<$ty, M, N>;

            fn mul(self, rhs: Matrix<$ty, M, N>) -> Matrix<$ty, M, N> {
                rhs * self
            }
        })+
    };
}

impl_mul_lhs!(f32, f64, i32, i64);

impl<T: Num, const M: usize, const N: usize> Neg for Matrix<T, M, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|l| -l)
    }
}

impl<T: Num, const M: usize, const K: usize, const N: usize> Mul<Matrix<T, K, N>>
    for Matrix<T, M, K>
{
    type Output = Matrix<T, M, N>;

    fn mul(self, rhs: Matrix<T, K, N>) -> Matrix<T, M, N> {
        Matrix::from_columns(rhs.0.map(|column| self * column))
    }
}

impl<T: Num, const N: usize> MulAssign for Matrix<T, N, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Num, const M: usize, const N: usize> Mul<Vector<T, N>> for Matrix<T, M, N> {
    type Output = Vector<T, M>;

    fn mul(self, rhs: Vector<T, N>) -> Vector<T, M> {
        let mut ret = Vector::zero();
        for (column, k) in self.0.into_iter().zip(rhs.0) {
            ret += column * k;
        }
        ret
    }
}

impl<T: fmt::Display, const M: usize, const N: usize> fmt::Display for Matrix<T, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (j, column) in self.0.iter().enumerate() {
            if j > 0 {
                f.write_str(",")?;
            }
            fmt::Display::fmt(column, f)?;
        }
        f.write_str("]")
    }
}
