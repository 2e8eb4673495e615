//! Decoding of wire values back into value trees.

use std::io::Read;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use flate2::read::ZlibDecoder;

use crate::constants::{
    DATA_B64_FIELD, DATA_GZIP_B64_FIELD, DTYPE_FIELD, SHAPE_FIELD, TYPE_FIELD, TYPE_NDARRAY,
};
use crate::{DecodeError, Value};
use figwire_tensor::{DType, Tensor};

/// Recursively reconstructs a value tree from a JSON-safe wire value.
///
/// Objects carrying the `"_type": "ndarray"` discriminator are rebuilt into
/// tensors; every other object, array, or scalar maps back to itself, so
/// decoding a wire value that never contained an array is the identity.
///
/// # Example
///
/// ```
/// use figwire::{decode, Value};
///
/// let wire = serde_json::json!({"a": [1, 2.5]});
/// let value = decode(&wire).unwrap();
/// assert_eq!(value.get("a").unwrap().as_array().unwrap().len(), 2);
/// ```
pub fn decode(wire: &serde_json::Value) -> Result<Value, DecodeError> {
    match wire {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::Number(n) => Ok(decode_number(n)),
        serde_json::Value::String(s) => Ok(Value::Str(s.clone())),
        serde_json::Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(decode(item)?);
            }
            Ok(Value::Array(out))
        }
        serde_json::Value::Object(map) => {
            if map.get(TYPE_FIELD).and_then(|v| v.as_str()) == Some(TYPE_NDARRAY) {
                return Ok(Value::Tensor(decode_tensor(map)?));
            }
            let mut entries = Vec::with_capacity(map.len());
            for (key, val) in map {
                entries.push((key.clone(), decode(val)?));
            }
            Ok(Value::Object(entries))
        }
    }
}

/// Parses JSON text and decodes the result.
pub fn parse(text: &str) -> Result<Value, DecodeError> {
    let wire: serde_json::Value = serde_json::from_str(text)?;
    decode(&wire)
}

fn decode_number(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Int(i)
    } else if let Some(u) = n.as_u64() {
        Value::UInt(u)
    } else {
        // serde_json numbers are i64, u64, or a finite f64.
        Value::Float(n.as_f64().unwrap_or_default())
    }
}

fn decode_tensor(map: &serde_json::Map<String, serde_json::Value>) -> Result<Tensor, DecodeError> {
    let shape_val = map
        .get(SHAPE_FIELD)
        .ok_or(DecodeError::MissingField(SHAPE_FIELD))?;
    let shape = decode_shape(shape_val)?;

    let dtype_val = map
        .get(DTYPE_FIELD)
        .ok_or(DecodeError::MissingField(DTYPE_FIELD))?;
    let dtype_name = dtype_val
        .as_str()
        .ok_or(DecodeError::InvalidField(DTYPE_FIELD))?;
    let dtype = DType::parse(dtype_name)
        .ok_or_else(|| DecodeError::UnknownDType(dtype_name.to_string()))?;

    // Plain payload wins when both fields are present.
    let raw = match (map.get(DATA_B64_FIELD), map.get(DATA_GZIP_B64_FIELD)) {
        (Some(val), _) => {
            let b64 = val
                .as_str()
                .ok_or(DecodeError::InvalidField(DATA_B64_FIELD))?;
            BASE64.decode(b64)?
        }
        (None, Some(val)) => {
            let b64 = val
                .as_str()
                .ok_or(DecodeError::InvalidField(DATA_GZIP_B64_FIELD))?;
            inflate(&BASE64.decode(b64)?)?
        }
        (None, None) => return Err(DecodeError::MissingPayload),
    };

    Ok(Tensor::from_bytes(shape, dtype, raw)?)
}

fn decode_shape(val: &serde_json::Value) -> Result<Vec<usize>, DecodeError> {
    let items = val
        .as_array()
        .ok_or(DecodeError::InvalidField(SHAPE_FIELD))?;
    let mut shape = Vec::with_capacity(items.len());
    for item in items {
        let dim = item
            .as_u64()
            .and_then(|dim| usize::try_from(dim).ok())
            .ok_or(DecodeError::InvalidField(SHAPE_FIELD))?;
        shape.push(dim);
    }
    Ok(shape)
}

fn inflate(packed: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::new();
    ZlibDecoder::new(packed)
        .read_to_end(&mut out)
        .map_err(DecodeError::Decompress)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_values_decode_to_themselves() {
        assert_eq!(decode(&json!(null)).unwrap(), Value::Null);
        assert_eq!(decode(&json!(false)).unwrap(), Value::Bool(false));
        assert_eq!(decode(&json!(-7)).unwrap(), Value::Int(-7));
        assert_eq!(decode(&json!(1.5)).unwrap(), Value::Float(1.5));
        assert_eq!(decode(&json!("hi")).unwrap(), Value::Str("hi".into()));
    }

    #[test]
    fn numbers_normalize_like_construction() {
        // Fits i64 -> Int, matching `Value::from(u64)`.
        assert_eq!(decode(&json!(7u64)).unwrap(), Value::Int(7));
        assert_eq!(decode(&json!(u64::MAX)).unwrap(), Value::UInt(u64::MAX));
    }

    #[test]
    fn objects_without_discriminator_are_identity() {
        let wire = json!({"_type": "something-else", "x": [1, {"y": null}]});
        let value = decode(&wire).unwrap();
        assert_eq!(
            value.get("_type").unwrap(),
            &Value::Str("something-else".into())
        );
        assert!(value.get("x").unwrap().as_array().is_some());
    }

    #[test]
    fn non_string_discriminator_is_plain_object() {
        let wire = json!({"_type": 3, "shape": [1]});
        let value = decode(&wire).unwrap();
        assert_eq!(value.get("_type").unwrap(), &Value::Int(3));
    }

    #[test]
    fn missing_payload_field_is_rejected() {
        let wire = json!({"_type": "ndarray", "shape": [1], "dtype": "uint8"});
        let err = decode(&wire).unwrap_err();
        assert!(matches!(err, DecodeError::MissingPayload), "got {err:?}");
    }

    #[test]
    fn missing_shape_and_dtype_are_distinct_errors() {
        let wire = json!({"_type": "ndarray", "dtype": "uint8", "data_b64": ""});
        assert!(matches!(
            decode(&wire).unwrap_err(),
            DecodeError::MissingField(SHAPE_FIELD)
        ));
        let wire = json!({"_type": "ndarray", "shape": [0], "data_b64": ""});
        assert!(matches!(
            decode(&wire).unwrap_err(),
            DecodeError::MissingField(DTYPE_FIELD)
        ));
    }

    #[test]
    fn bad_shape_contents_are_rejected() {
        for shape in [json!(3), json!(["x"]), json!([-1]), json!([1.5])] {
            let wire = json!({
                "_type": "ndarray",
                "shape": shape,
                "dtype": "uint8",
                "data_b64": "AA==",
            });
            let err = decode(&wire).unwrap_err();
            assert!(
                matches!(err, DecodeError::InvalidField(SHAPE_FIELD)),
                "shape {shape:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn unknown_dtype_is_rejected() {
        let wire = json!({
            "_type": "ndarray",
            "shape": [1],
            "dtype": "float128",
            "data_b64": "AA==",
        });
        let err = decode(&wire).unwrap_err();
        assert!(
            matches!(err, DecodeError::UnknownDType(ref name) if name == "float128"),
            "got {err:?}"
        );
    }

    #[test]
    fn malformed_base64_is_rejected() {
        let wire = json!({
            "_type": "ndarray",
            "shape": [1],
            "dtype": "uint8",
            "data_b64": "!!!not-base64!!!",
        });
        let err = decode(&wire).unwrap_err();
        assert!(matches!(err, DecodeError::Base64(_)), "got {err:?}");
    }

    #[test]
    fn corrupt_zlib_stream_is_rejected() {
        // Valid base64 of bytes that are not a zlib stream.
        let wire = json!({
            "_type": "ndarray",
            "shape": [1],
            "dtype": "uint8",
            "data_gzip_b64": BASE64.encode([0xffu8, 0x00, 0x01, 0x02]),
        });
        let err = decode(&wire).unwrap_err();
        assert!(matches!(err, DecodeError::Decompress(_)), "got {err:?}");
    }

    #[test]
    fn truncated_payload_is_a_length_mismatch() {
        // 3 bytes for a shape that needs 4.
        let wire = json!({
            "_type": "ndarray",
            "shape": [4],
            "dtype": "uint8",
            "data_b64": BASE64.encode([1u8, 2, 3]),
        });
        let err = decode(&wire).unwrap_err();
        assert!(
            matches!(
                err,
                DecodeError::Tensor(figwire_tensor::TensorError::LengthMismatch { .. })
            ),
            "got {err:?}"
        );
    }

    #[test]
    fn parse_surfaces_json_syntax_errors() {
        let err = parse("{not json").unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)), "got {err:?}");
    }
}
