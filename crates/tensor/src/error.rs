use thiserror::Error;

use crate::DType;

/// Error type for tensor construction and element extraction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TensorError {
    /// The byte buffer does not hold `product(shape) * dtype.size()` bytes.
    #[error("buffer is {got} bytes, expected {expected} for shape {shape:?} and dtype {dtype}")]
    LengthMismatch {
        expected: usize,
        got: usize,
        shape: Vec<usize>,
        dtype: DType,
    },
    /// Typed extraction was requested for a different dtype than stored.
    #[error("tensor holds {actual} elements, requested {requested}")]
    DTypeMismatch { actual: DType, requested: DType },
}
