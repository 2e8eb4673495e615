//! JSON wire codec for nested figure data with embedded numeric arrays.
//!
//! figwire converts an in-memory tree of scalars, string-keyed objects,
//! arrays, and N-dimensional numeric arrays into a JSON-safe wire value and
//! reconstructs it exactly. Numeric arrays travel as discriminated objects:
//!
//! ```json
//! {
//!   "_type": "ndarray",
//!   "shape": [2, 3],
//!   "dtype": "int32",
//!   "data_b64": "<base64 of raw row-major bytes>"
//! }
//! ```
//!
//! With compression enabled the payload field is instead `data_gzip_b64`,
//! holding base64 of the deflate-compressed row-major bytes.
//!
//! Encode and decode are pure, synchronous transforms with no shared state;
//! calls are independent and safe to run concurrently.
//!
//! # Example
//!
//! ```
//! use figwire::{decode, encode, Value};
//! use figwire_tensor::Tensor;
//!
//! let value = Value::Object(vec![
//!     ("samplerate".into(), Value::Float(30000.0)),
//!     ("times".into(), Tensor::from_vec([3], vec![1i64, 2, 3]).unwrap().into()),
//! ]);
//! let wire = encode(&value, true).unwrap();
//! assert_eq!(decode(&wire).unwrap(), value);
//! ```

pub mod constants;
mod decode;
mod encode;
mod error;
mod value;

pub use decode::{decode, parse};
pub use encode::{encode, stringify};
pub use error::{DecodeError, EncodeError};
pub use value::Value;

pub use figwire_tensor::{DType, Element, Tensor, TensorError};
