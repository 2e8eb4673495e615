//! Owned N-dimensional numeric array.

use crate::{DType, Element, TensorError};

/// An N-dimensional numeric array: shape, element type, and a row-major
/// little-endian byte buffer.
///
/// The buffer length always equals `product(shape) * dtype.size()`; both
/// constructors validate this, so a `Tensor` value cannot be inconsistent.
/// A zero-length shape (`[]`) denotes a 0-d array holding one element, and a
/// shape containing `0` denotes an empty array.
///
/// # Example
///
/// ```
/// use figwire_tensor::Tensor;
///
/// let t = Tensor::from_vec([3], vec![1.0f64, 2.0, 3.0]).unwrap();
/// assert_eq!(t.num_elements(), 3);
/// assert_eq!(t.to_vec::<f64>().unwrap(), vec![1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tensor {
    shape: Vec<usize>,
    dtype: DType,
    data: Vec<u8>,
}

impl Tensor {
    /// Builds a tensor from typed values in row-major order.
    ///
    /// Fails with [`TensorError::LengthMismatch`] when `values.len()` does
    /// not equal `product(shape)`.
    pub fn from_vec<T: Element>(
        shape: impl Into<Vec<usize>>,
        values: Vec<T>,
    ) -> Result<Self, TensorError> {
        let shape = shape.into();
        let count: usize = shape.iter().product();
        if values.len() != count {
            return Err(TensorError::LengthMismatch {
                expected: count * T::DTYPE.size(),
                got: values.len() * T::DTYPE.size(),
                shape,
                dtype: T::DTYPE,
            });
        }
        let mut data = Vec::with_capacity(values.len() * T::DTYPE.size());
        for value in values {
            value.write_le(&mut data);
        }
        Ok(Self {
            shape,
            dtype: T::DTYPE,
            data,
        })
    }

    /// Builds a tensor from a raw row-major little-endian byte buffer.
    ///
    /// Fails with [`TensorError::LengthMismatch`] when the buffer length
    /// does not equal `product(shape) * dtype.size()`.
    pub fn from_bytes(
        shape: impl Into<Vec<usize>>,
        dtype: DType,
        data: Vec<u8>,
    ) -> Result<Self, TensorError> {
        let shape = shape.into();
        let expected = shape.iter().product::<usize>() * dtype.size();
        if data.len() != expected {
            return Err(TensorError::LengthMismatch {
                expected,
                got: data.len(),
                shape,
                dtype,
            });
        }
        Ok(Self { shape, dtype, data })
    }

    /// Builds a 0-d tensor holding a single value.
    pub fn scalar<T: Element>(value: T) -> Self {
        let mut data = Vec::with_capacity(T::DTYPE.size());
        value.write_le(&mut data);
        Self {
            shape: Vec::new(),
            dtype: T::DTYPE,
            data,
        }
    }

    /// The shape of the array.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The element type.
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// The row-major little-endian byte buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of elements (`product(shape)`).
    pub fn num_elements(&self) -> usize {
        self.shape.iter().product()
    }

    /// True when the array holds no elements (some axis is 0).
    pub fn is_empty(&self) -> bool {
        self.num_elements() == 0
    }

    /// Extracts the elements in row-major order.
    ///
    /// The requested type must match the stored dtype exactly; a `float64`
    /// tensor cannot be read as `f32` (fails with
    /// [`TensorError::DTypeMismatch`]).
    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>, TensorError> {
        if T::DTYPE != self.dtype {
            return Err(TensorError::DTypeMismatch {
                actual: self.dtype,
                requested: T::DTYPE,
            });
        }
        Ok(self
            .data
            .chunks_exact(self.dtype.size())
            .map(T::read_le)
            .collect())
    }
}
