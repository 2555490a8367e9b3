use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of bounds-checked or dynamically-sized access.
///
/// Mismatched component counts between statically-typed operands are rejected by the compiler;
/// [`Error::ArityMismatch`] only arises where the count comes from a runtime slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("index {index} is out of range for {dim} components")]
    IndexOutOfRange { index: usize, dim: usize },

    #[error("expected {expected} components, got {found}")]
    ArityMismatch { expected: usize, found: usize },
}

impl Error {
    pub(crate) fn check_index(index: usize, dim: usize) -> Result<usize> {
        if index < dim {
            Ok(index)
        } else {
            Err(Error::IndexOutOfRange { index, dim })
        }
    }

    /// Copies `values` into an array of exactly `N` elements.
    pub(crate) fn fixed_array<T: Copy, const N: usize>(values: &[T]) -> Result<[T; N]> {
        <[T; N]>::try_from(values).map_err(|_| Error::ArityMismatch {
            expected: N,
            found: values.len(),
        })
    }
}
