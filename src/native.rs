//! Read access to host (browser) objects.
//!
//! Event payloads are whatever the host hands us: a `serde_json::Value` when
//! the event crossed a webview bridge, or a foreign object type in other
//! hosts. Decoders only need keyed field access and the two scalar shapes
//! the file contract uses, so that is all this trait asks for.

use serde_json::Value;

use crate::error::DecodeError;

/// A host object that decoders can navigate.
///
/// `Default` is the host's null value; it stands in for the native
/// reference of fabricated records such as the sentinel file.
pub trait NativeObject: Clone + Default {
    /// Field lookup. Array-likes are indexed with decimal keys (`"0"`, `"1"`).
    fn field(&self, key: &str) -> Option<&Self>;

    fn as_str(&self) -> Option<&str>;

    /// Whole numbers only. Hosts with a single float number type report
    /// integers as whole-valued floats, which count.
    fn as_integer(&self) -> Option<i64>;

    /// Non-negative whole numbers, across the full `u64` range.
    fn as_unsigned(&self) -> Option<u64>;

    /// The `length` of an array-like.
    fn length(&self) -> Option<i64>;
}

impl NativeObject for Value {
    fn field(&self, key: &str) -> Option<&Self> {
        match self {
            Value::Object(map) => map.get(key),
            Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    }

    fn as_str(&self) -> Option<&str> {
        Value::as_str(self)
    }

    fn as_integer(&self) -> Option<i64> {
        if let Some(n) = self.as_i64() {
            return Some(n);
        }
        let f = self.as_f64()?;
        // i64::MAX as f64 is 2^63, which does not fit
        if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
            Some(f as i64)
        } else {
            None
        }
    }

    fn as_unsigned(&self) -> Option<u64> {
        if let Some(n) = self.as_u64() {
            return Some(n);
        }
        let f = self.as_f64()?;
        if f.fract() == 0.0 && f >= 0.0 && f < u64::MAX as f64 {
            Some(f as u64)
        } else {
            None
        }
    }

    fn length(&self) -> Option<i64> {
        match self {
            Value::Array(items) => i64::try_from(items.len()).ok(),
            _ => self.field("length").and_then(|len| len.as_integer()),
        }
    }
}

/// Follow a dotted path of field names from `root`.
pub fn at<'a, N: NativeObject>(root: &'a N, path: &[&str]) -> Result<&'a N, DecodeError> {
    let mut current = root;
    for (depth, key) in path.iter().enumerate() {
        current = current
            .field(key)
            .ok_or_else(|| DecodeError::missing(path[..=depth].join(".")))?;
    }
    Ok(current)
}

pub(crate) fn string_field<N: NativeObject>(object: &N, key: &str) -> Result<String, DecodeError> {
    object
        .field(key)
        .ok_or_else(|| DecodeError::missing(key))?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| DecodeError::wrong_type(key, "string"))
}

pub(crate) fn unsigned_field<N: NativeObject>(object: &N, key: &str) -> Result<u64, DecodeError> {
    object
        .field(key)
        .ok_or_else(|| DecodeError::missing(key))?
        .as_unsigned()
        .ok_or_else(|| DecodeError::wrong_type(key, "non-negative integer"))
}

pub(crate) fn integer_field<N: NativeObject>(object: &N, key: &str) -> Result<i64, DecodeError> {
    object
        .field(key)
        .ok_or_else(|| DecodeError::missing(key))?
        .as_integer()
        .ok_or_else(|| DecodeError::wrong_type(key, "integer"))
}
