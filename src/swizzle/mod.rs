//! Named, permuted views into a vector's components.
//!
//! A swizzle binds a borrowed [`Vector<T, D>`] to a fixed list of `N` component indices. Reading
//! gathers those components into a fresh `Vector<T, N>`; writing scatters `N` values back into the
//! borrowed vector. Indices may repeat and need not be ordered, and `N` is independent of `D`:
//! `v2.xyxy()` is a four-component view of a two-component vector.
//!
//! Views are created through the accessors generated for every vector (see [`catalog`]):
//!
//! ```
//! use swizzle_math::Vec3;
//!
//! let mut v = Vec3::new(1.0, 2.0, 3.0);
//! assert_eq!(v.zyx().read(), Vec3::new(3.0, 2.0, 1.0));
//!
//! // Writes see a fully-evaluated source, so swapping through two views is a simultaneous
//! // assignment.
//! v.set_yx(v.xy().read());
//! assert_eq!(v, Vec3::new(2.0, 1.0, 3.0));
//! ```
//!
//! A [`SwizzleMut`] borrows its vector exclusively, so the borrow checker forbids using another
//! view of the same vector as a live source: the source is always read into a value first.

pub mod catalog;
mod ops;

use std::fmt;

use crate::error::{Error, Result};
use crate::num::{self, Num, DEFAULT_ULPS};
use crate::vector::Vector;

/// Anything that can be read as `N` components of type `T`.
pub trait Components<T, const N: usize> {
    fn components(&self) -> [T; N];
}

impl<T: Copy, const N: usize> Components<T, N> for Vector<T, N> {
    #[inline]
    fn components(&self) -> [T; N] {
        self.0
    }
}

impl<T: Copy, const N: usize> Components<T, N> for [T; N] {
    #[inline]
    fn components(&self) -> [T; N] {
        *self
    }
}

impl<T: Copy, const D: usize, const N: usize> Components<T, N> for Swizzle<'_, T, D, N> {
    #[inline]
    fn components(&self) -> [T; N] {
        self.gather()
    }
}

impl<T: Copy, const D: usize, const N: usize> Components<T, N> for SwizzleMut<'_, T, D, N> {
    #[inline]
    fn components(&self) -> [T; N] {
        self.as_swizzle().gather()
    }
}

impl<T, const N: usize, C: Components<T, N> + ?Sized> Components<T, N> for &C {
    #[inline]
    fn components(&self) -> [T; N] {
        (**self).components()
    }
}

fn check_indices<const D: usize, const N: usize>(indices: [usize; N]) -> Result<[usize; N]> {
    for index in indices {
        Error::check_index(index, D)?;
    }
    Ok(indices)
}

/// Shared view selecting `N` components of a `Vector<T, D>`.
#[derive(Clone, Copy, Debug)]
pub struct Swizzle<'a, T, const D: usize, const N: usize> {
    vector: &'a Vector<T, D>,
    indices: [usize; N],
}

impl<'a, T: Copy, const D: usize, const N: usize> Swizzle<'a, T, D, N> {
    /// Binds indices already known to be in range.
    #[inline(always)]
    pub(crate) fn bind(vector: &'a Vector<T, D>, indices: [usize; N]) -> Self {
        let () = Vector::<T, N>::DIM_CHECK;
        debug_assert!(indices.iter().all(|&i| i < D));
        Swizzle { vector, indices }
    }

    /// Selects `indices` of `vector`, each of which must be below `D`.
    pub fn new(vector: &'a Vector<T, D>, indices: [usize; N]) -> Result<Self> {
        Ok(Self::bind(vector, check_indices::<D, N>(indices)?))
    }

    /// Like [`Swizzle::new`], for an index list whose length is only known at runtime.
    pub fn from_indices(vector: &'a Vector<T, D>, indices: &[usize]) -> Result<Self> {
        Self::new(vector, Error::fixed_array(indices)?)
    }

    #[inline]
    pub fn indices(&self) -> [usize; N] {
        self.indices
    }

    /// Bounds-checked read of the `i`-th selected component.
    pub fn get(&self, i: usize) -> Result<T> {
        let i = Error::check_index(i, N)?;
        Ok(self.vector.0[self.indices[i]])
    }

    /// Gathers the selected components into a new, independent vector.
    #[inline]
    pub fn read(&self) -> Vector<T, N> {
        Vector(self.gather())
    }

    #[inline(always)]
    fn gather(&self) -> [T; N] {
        self.indices.map(|i| self.vector.0[i])
    }
}

impl<T: Num, const D: usize, const N: usize> Swizzle<'_, T, D, N> {
    /// Componentwise comparison with a tolerance of [`DEFAULT_ULPS`].
    pub fn equals(&self, other: impl Components<T, N>) -> bool {
        self.equals_ulps(other, DEFAULT_ULPS)
    }

    /// Componentwise comparison accepting differences of at most `max_ulps` representable steps.
    pub fn equals_ulps(&self, other: impl Components<T, N>, max_ulps: u32) -> bool {
        num::all_ulps_eq(self.gather(), other.components(), max_ulps)
    }
}

impl<T: Copy + fmt::Display, const D: usize, const N: usize> fmt::Display for Swizzle<'_, T, D, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.read(), f)
    }
}

impl<T: Copy, const D: usize, const N: usize> From<Swizzle<'_, T, D, N>> for Vector<T, N> {
    fn from(swizzle: Swizzle<'_, T, D, N>) -> Self {
        swizzle.read()
    }
}

/// Exclusive view selecting `N` components of a `Vector<T, D>`, for reading and writing.
#[derive(Debug)]
pub struct SwizzleMut<'a, T, const D: usize, const N: usize> {
    vector: &'a mut Vector<T, D>,
    indices: [usize; N],
}

impl<'a, T: Copy, const D: usize, const N: usize> SwizzleMut<'a, T, D, N> {
    #[inline(always)]
    pub(crate) fn bind(vector: &'a mut Vector<T, D>, indices: [usize; N]) -> Self {
        let () = Vector::<T, N>::DIM_CHECK;
        debug_assert!(indices.iter().all(|&i| i < D));
        SwizzleMut { vector, indices }
    }

    pub fn new(vector: &'a mut Vector<T, D>, indices: [usize; N]) -> Result<Self> {
        Ok(Self::bind(vector, check_indices::<D, N>(indices)?))
    }

    pub fn from_indices(vector: &'a mut Vector<T, D>, indices: &[usize]) -> Result<Self> {
        Self::new(vector, Error::fixed_array(indices)?)
    }

    #[inline]
    pub fn indices(&self) -> [usize; N] {
        self.indices
    }

    /// Reborrows as a shared view.
    #[inline]
    pub fn as_swizzle(&self) -> Swizzle<'_, T, D, N> {
        Swizzle {
            vector: &*self.vector,
            indices: self.indices,
        }
    }

    #[inline]
    pub fn read(&self) -> Vector<T, N> {
        self.as_swizzle().read()
    }

    /// Stores `source[i]` into component `indices[i]` for every `i`.
    ///
    /// All of `source` is read before the first component is stored. Where an index repeats,
    /// the last value written to it is kept.
    #[inline]
    pub fn write(&mut self, source: impl Components<T, N>) {
        let values = source.components();
        for (&index, value) in self.indices.iter().zip(values) {
            self.vector.0[index] = value;
        }
    }

    /// Like [`SwizzleMut::write`], for values whose count is only known at runtime.
    pub fn write_slice(&mut self, values: &[T]) -> Result<()> {
        self.write(Error::fixed_array::<T, N>(values)?);
        Ok(())
    }

    /// Reads the selection, maps it through `f` and writes the result back.
    pub fn update(&mut self, f: impl FnOnce(Vector<T, N>) -> Vector<T, N>) {
        let value = f(self.read());
        self.write(value);
    }
}

impl<T: Num, const D: usize, const N: usize> SwizzleMut<'_, T, D, N> {
    pub fn equals(&self, other: impl Components<T, N>) -> bool {
        self.as_swizzle().equals(other)
    }

    pub fn equals_ulps(&self, other: impl Components<T, N>, max_ulps: u32) -> bool {
        self.as_swizzle().equals_ulps(other, max_ulps)
    }
}
