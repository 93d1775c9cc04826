//! Typed lookups over decoded JSON objects.
//!
//! Every accessor returns `None` on a missing key or a type mismatch instead
//! of failing, so callers can pull fields out one at a time and keep going.

use serde_json::{Map, Value};

/// A decoded JSON object, as returned by the API before it is parsed into models.
pub type JsonResults = Map<String, Value>;

pub fn get_str(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

pub fn get_i64(obj: &Map<String, Value>, key: &str) -> Option<i64> {
    obj.get(key).and_then(Value::as_i64)
}

pub fn get_f64(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    obj.get(key).and_then(Value::as_f64)
}

/// An array whose elements are all strings. One non-string element makes
/// the whole value absent.
pub fn get_str_vec(obj: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    str_vec(obj.get(key)?)
}

/// An array whose elements are all objects.
pub fn get_object_vec<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
) -> Option<Vec<&'a Map<String, Value>>> {
    obj.get(key)?
        .as_array()?
        .iter()
        .map(Value::as_object)
        .collect()
}

pub fn str_vec(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}
