//! Encoder/decoder error types.

use figwire_tensor::TensorError;
use thiserror::Error;

/// Errors produced while encoding a value tree to its wire form.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The value cannot be represented as JSON. In practice this is a
    /// non-finite float (`NaN`, infinities); every other variant of the
    /// value model is JSON-safe by construction.
    #[error("unsupported value of type `{type_name}`: not JSON-safe")]
    UnsupportedType { type_name: &'static str },
    /// Compressing a tensor payload failed.
    #[error("compress error: {0}")]
    Compress(#[source] std::io::Error),
    /// Serializing the wire value to JSON text failed (`stringify` only).
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors produced while decoding a wire value.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// An array-discriminated object carries neither `data_b64` nor
    /// `data_gzip_b64`.
    #[error("missing field: data_b64 or data_gzip_b64")]
    MissingPayload,
    /// An array-discriminated object lacks a required field.
    #[error("missing field: {0}")]
    MissingField(&'static str),
    /// A field is present but has the wrong JSON type or contents.
    #[error("invalid field: {0}")]
    InvalidField(&'static str),
    /// The `dtype` field names an element type this codec does not know.
    #[error("unknown dtype `{0}`")]
    UnknownDType(String),
    /// A payload field is not valid base64.
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
    /// A compressed payload is not a valid deflate stream.
    #[error("decompress error: {0}")]
    Decompress(#[source] std::io::Error),
    /// The decoded byte buffer does not match the stated shape and dtype.
    #[error("tensor payload rejected: {0}")]
    Tensor(#[from] TensorError),
    /// Parsing JSON text failed (`parse` only).
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
