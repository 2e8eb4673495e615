//! Reserved field names of the wire format.
//!
//! These strings are the durable external contract shared with remote
//! viewers; changing any of them breaks every deployed consumer.

/// Discriminator key marking a JSON object as an encoded array.
pub const TYPE_FIELD: &str = "_type";

/// Discriminator value for numeric arrays.
pub const TYPE_NDARRAY: &str = "ndarray";

/// Shape field: JSON array of non-negative integers.
pub const SHAPE_FIELD: &str = "shape";

/// Dtype field: wire name of the element type (`"float64"`, `"int32"`, ...).
pub const DTYPE_FIELD: &str = "dtype";

/// Payload field holding base64 of the raw row-major bytes.
pub const DATA_B64_FIELD: &str = "data_b64";

/// Payload field holding base64 of the deflate-compressed row-major bytes.
pub const DATA_GZIP_B64_FIELD: &str = "data_gzip_b64";
