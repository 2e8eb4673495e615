//! Binding between Rust scalar types and tensor dtypes.

use crate::DType;

/// A Rust scalar type storable in a [`Tensor`](crate::Tensor).
///
/// Each implementor is tied to exactly one [`DType`] and defines its
/// little-endian byte conversion. Implemented for every fixed-width integer
/// (`i8`..=`i64`, `u8`..=`u64`) and float (`f32`, `f64`).
pub trait Element: Copy {
    /// The dtype this scalar type maps to.
    const DTYPE: DType;

    /// Appends the little-endian bytes of `self` to `out`.
    fn write_le(self, out: &mut Vec<u8>);

    /// Reads one value from a slice of exactly `Self::DTYPE.size()` bytes.
    fn read_le(bytes: &[u8]) -> Self;
}

macro_rules! impl_element {
    ($ty:ty, $dtype:expr, $width:expr) => {
        impl Element for $ty {
            const DTYPE: DType = $dtype;

            fn write_le(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_le_bytes());
            }

            fn read_le(bytes: &[u8]) -> Self {
                let mut buf = [0u8; $width];
                buf.copy_from_slice(bytes);
                Self::from_le_bytes(buf)
            }
        }
    };
}

impl_element!(f32, DType::Float32, 4);
impl_element!(f64, DType::Float64, 8);
impl_element!(i8, DType::Int8, 1);
impl_element!(i16, DType::Int16, 2);
impl_element!(i32, DType::Int32, 4);
impl_element!(i64, DType::Int64, 8);
impl_element!(u8, DType::UInt8, 1);
impl_element!(u16, DType::UInt16, 2);
impl_element!(u32, DType::UInt32, 4);
impl_element!(u64, DType::UInt64, 8);
