//! Encoding of value trees into JSON-safe wire values.

use std::io::Write;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use serde_json::{json, Map};

use crate::constants::{
    DATA_B64_FIELD, DATA_GZIP_B64_FIELD, DTYPE_FIELD, SHAPE_FIELD, TYPE_FIELD, TYPE_NDARRAY,
};
use crate::{EncodeError, Value};
use figwire_tensor::Tensor;

/// Recursively converts a value tree into a JSON-safe wire value.
///
/// Scalars map to the corresponding JSON scalar, arrays and objects recurse
/// (object key order is preserved), and tensors become discriminated objects
/// holding shape, dtype, and a base64 payload. When `compress` is true the
/// tensor payload is deflate-compressed at maximum level before base64.
///
/// The output is a pure function of the input and the `compress` flag, and
/// is always serializable by `serde_json` with no further transformation.
///
/// # Example
///
/// ```
/// use figwire::{encode, Value};
///
/// let wire = encode(&Value::Array(vec![Value::Int(1), Value::Str("a".into())]), false).unwrap();
/// assert_eq!(wire, serde_json::json!([1, "a"]));
/// ```
pub fn encode(value: &Value, compress: bool) -> Result<serde_json::Value, EncodeError> {
    match value {
        Value::Null => Ok(serde_json::Value::Null),
        Value::Bool(b) => Ok(json!(b)),
        Value::Int(i) => Ok(json!(i)),
        Value::UInt(u) => Ok(json!(u)),
        Value::Float(f) => match serde_json::Number::from_f64(*f) {
            Some(n) => Ok(serde_json::Value::Number(n)),
            None => Err(EncodeError::UnsupportedType {
                type_name: value.type_name(),
            }),
        },
        Value::Str(s) => Ok(json!(s)),
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(encode(item, compress)?);
            }
            Ok(serde_json::Value::Array(out))
        }
        Value::Object(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (key, val) in entries {
                map.insert(key.clone(), encode(val, compress)?);
            }
            Ok(serde_json::Value::Object(map))
        }
        Value::Tensor(tensor) => encode_tensor(tensor, compress),
    }
}

/// Encodes a value tree straight to JSON text.
pub fn stringify(value: &Value, compress: bool) -> Result<String, EncodeError> {
    let wire = encode(value, compress)?;
    Ok(serde_json::to_string(&wire)?)
}

fn encode_tensor(tensor: &Tensor, compress: bool) -> Result<serde_json::Value, EncodeError> {
    let mut map = Map::with_capacity(4);
    map.insert(TYPE_FIELD.into(), json!(TYPE_NDARRAY));
    map.insert(SHAPE_FIELD.into(), json!(tensor.shape()));
    map.insert(DTYPE_FIELD.into(), json!(tensor.dtype().name()));
    // Both payload paths carry the flattened row-major buffer.
    if compress {
        let packed = deflate(tensor.data())?;
        map.insert(DATA_GZIP_B64_FIELD.into(), json!(BASE64.encode(packed)));
    } else {
        map.insert(DATA_B64_FIELD.into(), json!(BASE64.encode(tensor.data())));
    }
    Ok(serde_json::Value::Object(map))
}

fn deflate(data: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data).map_err(EncodeError::Compress)?;
    encoder.finish().map_err(EncodeError::Compress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figwire_tensor::DType;

    #[test]
    fn scalars_map_to_json_scalars() {
        assert_eq!(encode(&Value::Null, false).unwrap(), json!(null));
        assert_eq!(encode(&Value::Bool(true), false).unwrap(), json!(true));
        assert_eq!(encode(&Value::Int(-42), false).unwrap(), json!(-42));
        assert_eq!(
            encode(&Value::UInt(u64::MAX), false).unwrap(),
            json!(u64::MAX)
        );
        assert_eq!(encode(&Value::Float(2.5), false).unwrap(), json!(2.5));
        assert_eq!(encode(&Value::Str("x".into()), false).unwrap(), json!("x"));
    }

    #[test]
    fn non_finite_float_is_unsupported() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = encode(&Value::Float(bad), false).unwrap_err();
            assert!(
                matches!(err, EncodeError::UnsupportedType { type_name: "float" }),
                "got {err:?}"
            );
        }
    }

    #[test]
    fn object_key_order_is_preserved() {
        let obj = Value::Object(vec![
            ("zz".into(), Value::Int(1)),
            ("aa".into(), Value::Int(2)),
        ]);
        let text = stringify(&obj, false).unwrap();
        assert_eq!(text, r#"{"zz":1,"aa":2}"#);
    }

    #[test]
    fn tensor_wire_object_has_exact_field_set() {
        let t = Tensor::from_vec([2], vec![1u8, 2]).unwrap();
        let wire = encode(&Value::Tensor(t), false).unwrap();
        let obj = wire.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(obj.get(TYPE_FIELD).unwrap(), TYPE_NDARRAY);
        assert_eq!(obj.get(SHAPE_FIELD).unwrap(), &json!([2]));
        assert_eq!(obj.get(DTYPE_FIELD).unwrap(), DType::UInt8.name());
        assert_eq!(obj.get(DATA_B64_FIELD).unwrap(), "AQI=");
        assert!(obj.get(DATA_GZIP_B64_FIELD).is_none());
    }

    #[test]
    fn compressed_tensor_uses_gzip_field_only() {
        let t = Tensor::from_vec([8], vec![0i32; 8]).unwrap();
        let wire = encode(&Value::Tensor(t), true).unwrap();
        let obj = wire.as_object().unwrap();
        assert!(obj.get(DATA_B64_FIELD).is_none());
        assert!(obj.get(DATA_GZIP_B64_FIELD).is_some());
    }

    #[test]
    fn encoding_is_deterministic() {
        let t = Tensor::from_vec([3], vec![1.0f64, 2.0, 3.0]).unwrap();
        let value = Value::Object(vec![
            ("data".into(), Value::Tensor(t)),
            ("label".into(), Value::Str("demo".into())),
        ]);
        for compress in [false, true] {
            let a = stringify(&value, compress).unwrap();
            let b = stringify(&value, compress).unwrap();
            assert_eq!(a, b);
        }
    }
}
