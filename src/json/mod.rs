//! Dynamic JSON value type.
//!
//! The catalog API returns ad hoc shapes with no published schema, so the
//! client works against a type-erased [`Json`] value instead of fixed structs.
//! Every accessor is total: a missing key, an out-of-bounds index, or a
//! mismatched variant produces a documented default, never a panic. UI code
//! built on top of these accessors cannot fault on a surprising payload.
//!
//! # Example
//!
//! ```ignore
//! use marquee::json::Json;
//!
//! let value = Json::decode(br#"{"results":[{"id":1,"title":"Dune"}],"page":1}"#)?;
//! assert_eq!(value["results"][0]["title"].string_value(), "Dune");
//! assert_eq!(value["page"].int_value(), 1);
//! assert!(value["missing"]["nested"].is_null());
//! ```

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

mod codec;
mod convert;

pub use codec::DecodeError;

/// A parsed JSON value.
///
/// Objects use a `BTreeMap` so that equality, hashing, and encoding are
/// deterministic regardless of key arrival order.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Json {
    Object(BTreeMap<String, Json>),
    Array(Vec<Json>),
    String(String),
    Number(f64),
    Bool(bool),
    #[default]
    Null,
}

/// Sentinel returned by reference from lookups that find nothing.
static NULL: Json = Json::Null;
static EMPTY_ARRAY: Vec<Json> = Vec::new();
static EMPTY_OBJECT: BTreeMap<String, Json> = BTreeMap::new();

impl Json {
    /// Look up a key on an object. Returns `Null` for a missing key or for
    /// any non-object receiver, so lookups chain safely.
    pub fn get(&self, key: &str) -> &Json {
        match self {
            Json::Object(map) => map.get(key).unwrap_or(&NULL),
            _ => &NULL,
        }
    }

    /// Look up an element by index. `None` when out of bounds or when the
    /// receiver is not an array.
    pub fn get_index(&self, index: usize) -> Option<&Json> {
        match self {
            Json::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// The contained elements if this is an array, otherwise an empty slice.
    pub fn array(&self) -> &[Json] {
        match self {
            Json::Array(items) => items,
            _ => &EMPTY_ARRAY,
        }
    }

    /// The contained mapping if this is an object, otherwise an empty map.
    pub fn object(&self) -> &BTreeMap<String, Json> {
        match self {
            Json::Object(map) => map,
            _ => &EMPTY_OBJECT,
        }
    }

    pub fn first(&self) -> Option<&Json> {
        self.array().first()
    }

    pub fn last(&self) -> Option<&Json> {
        self.array().last()
    }

    /// The `id` pseudo-field used for identity in lists: `self["id"]` on an
    /// object, `Null` on everything else.
    pub fn id(&self) -> &Json {
        self.get("id")
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Json::Null)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Json::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Json::Array(_))
    }

    /// The contained string. Strict: numbers and booleans do not stringify.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Json::String(s) => Some(s),
            _ => None,
        }
    }

    /// The contained number, or a string that fully parses as one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Json::Number(n) => Some(*n),
            Json::String(s) => s.parse::<f64>().ok(),
            _ => None,
        }
    }

    /// [`as_f64`](Self::as_f64) truncated toward zero.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_f64().map(|n| n as i64)
    }

    /// The contained boolean, with two coercions: a number is truthy when
    /// nonzero, and a string is matched case-insensitively against the token
    /// sets `true/t/yes/y/1` and `false/f/no/n/0` (falling back to a numeric
    /// parse). Any other string is `None`.
    pub fn as_bool(&self) -> Option<bool> {
        const TRUTHY: [&str; 5] = ["true", "t", "yes", "y", "1"];
        const FALSY: [&str; 5] = ["false", "f", "no", "n", "0"];
        match self {
            Json::Bool(b) => Some(*b),
            Json::Number(n) => Some(*n != 0.0),
            Json::String(s) => {
                let token = s.to_ascii_lowercase();
                if TRUTHY.contains(&token.as_str()) {
                    Some(true)
                } else if FALSY.contains(&token.as_str()) {
                    Some(false)
                } else {
                    s.parse::<f64>().ok().map(|n| n != 0.0)
                }
            }
            _ => None,
        }
    }

    // Defaulted projections.
    pub fn string_value(&self) -> String {
        self.as_str().unwrap_or_default().to_string()
    }

    pub fn int_value(&self) -> i64 {
        self.as_i64().unwrap_or_default()
    }

    pub fn double_value(&self) -> f64 {
        self.as_f64().unwrap_or_default()
    }

    pub fn bool_value(&self) -> bool {
        self.as_bool().unwrap_or_default()
    }

    /// Upsert a key on an object; a `Null` value removes the key instead.
    /// Silent no-op on any other variant.
    pub fn set(&mut self, key: &str, value: Json) {
        if let Json::Object(map) = self {
            if value.is_null() {
                map.remove(key);
            } else {
                map.insert(key.to_string(), value);
            }
        }
    }

    /// Replace an in-bounds element of an array. Silent no-op out of bounds
    /// or on any other variant.
    pub fn set_index(&mut self, index: usize, value: Json) {
        if let Json::Array(items) = self {
            if let Some(slot) = items.get_mut(index) {
                *slot = value;
            }
        }
    }
}

impl Index<&str> for Json {
    type Output = Json;

    fn index(&self, key: &str) -> &Json {
        self.get(key)
    }
}

impl Index<usize> for Json {
    type Output = Json;

    fn index(&self, index: usize) -> &Json {
        self.get_index(index).unwrap_or(&NULL)
    }
}

impl Hash for Json {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Json::Object(map) => map.hash(state),
            Json::Array(items) => items.hash(state),
            Json::String(s) => s.hash(state),
            // Bit-level hash keeps the structural-equality contract.
            Json::Number(n) => n.to_bits().hash(state),
            Json::Bool(b) => b.hash(state),
            Json::Null => {}
        }
    }
}

/// Ordering exists only between two strings or two numbers. Every other
/// pairing is incomparable, so `<` across mixed variants is `false` rather
/// than a fault.
impl PartialOrd for Json {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Json::String(a), Json::String(b)) => Some(a.cmp(b)),
            (Json::Number(a), Json::Number(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl fmt::Display for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(text) => f.write_str(&text),
            Err(_) => f.write_str("null"),
        }
    }
}
