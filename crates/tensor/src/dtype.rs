//! Element type descriptors and their wire names.

use std::fmt;

/// Element type of a [`Tensor`](crate::Tensor).
///
/// The wire names follow the numpy convention (`"float64"`, `"int32"`, ...)
/// since that is what remote viewers expect in the `dtype` field. Names carry
/// no endianness; tensor buffers are always little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
}

impl DType {
    /// Width of a single element in bytes.
    pub const fn size(self) -> usize {
        match self {
            Self::Int8 | Self::UInt8 => 1,
            Self::Int16 | Self::UInt16 => 2,
            Self::Float32 | Self::Int32 | Self::UInt32 => 4,
            Self::Float64 | Self::Int64 | Self::UInt64 => 8,
        }
    }

    /// Wire name of the dtype (`"float64"`, `"int32"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt8 => "uint8",
            Self::UInt16 => "uint16",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
        }
    }

    /// Parses a wire name back into a dtype.
    ///
    /// Returns `None` for unrecognized names; matching is exact, so
    /// `"float64 "` or `"Float64"` are rejected.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "float32" => Some(Self::Float32),
            "float64" => Some(Self::Float64),
            "int8" => Some(Self::Int8),
            "int16" => Some(Self::Int16),
            "int32" => Some(Self::Int32),
            "int64" => Some(Self::Int64),
            "uint8" => Some(Self::UInt8),
            "uint16" => Some(Self::UInt16),
            "uint32" => Some(Self::UInt32),
            "uint64" => Some(Self::UInt64),
            _ => None,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [DType; 10] = [
        DType::Float32,
        DType::Float64,
        DType::Int8,
        DType::Int16,
        DType::Int32,
        DType::Int64,
        DType::UInt8,
        DType::UInt16,
        DType::UInt32,
        DType::UInt64,
    ];

    #[test]
    fn name_parse_roundtrip() {
        for dtype in ALL {
            assert_eq!(DType::parse(dtype.name()), Some(dtype));
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(DType::parse("float16"), None);
        assert_eq!(DType::parse("complex64"), None);
        assert_eq!(DType::parse("Float64"), None);
        assert_eq!(DType::parse(""), None);
    }

    #[test]
    fn sizes_match_width() {
        assert_eq!(DType::Int8.size(), 1);
        assert_eq!(DType::UInt16.size(), 2);
        assert_eq!(DType::Float32.size(), 4);
        assert_eq!(DType::Int64.size(), 8);
        assert_eq!(DType::Float64.size(), 8);
    }

    #[test]
    fn display_uses_wire_name() {
        assert_eq!(DType::Float64.to_string(), "float64");
        assert_eq!(DType::UInt32.to_string(), "uint32");
    }
}
