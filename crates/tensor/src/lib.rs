//! N-dimensional numeric array value type for figwire.
//!
//! This crate provides the [`Tensor`] type carried inside figwire value
//! trees: a shape, an element type, and a row-major little-endian byte
//! buffer. Construction validates that the buffer length matches the shape
//! and element width, so every `Tensor` in existence is internally
//! consistent.
//!
//! # Overview
//!
//! - [`Tensor`] - owned N-d array: shape + dtype + row-major bytes
//! - [`DType`] - closed set of supported element types with wire names
//! - [`Element`] - binds Rust scalar types (`f64`, `i32`, ...) to dtypes
//!
//! # Example
//!
//! ```
//! use figwire_tensor::{DType, Tensor};
//!
//! let t = Tensor::from_vec([2, 3], vec![1i32, 2, 3, 4, 5, 6]).unwrap();
//! assert_eq!(t.shape(), &[2, 3]);
//! assert_eq!(t.dtype(), DType::Int32);
//! assert_eq!(t.to_vec::<i32>().unwrap(), vec![1, 2, 3, 4, 5, 6]);
//! ```

mod dtype;
mod element;
mod error;
mod tensor;

pub use dtype::DType;
pub use element::Element;
pub use error::TensorError;
pub use tensor::Tensor;
