//! Call extras
//!
//! An open, string-keyed bag of auxiliary call attributes. Values are a
//! closed set of kinds ([`ExtraValue`]) so every entry has an explicit
//! tagged encoding on the wire. A fixed subset of keys carries defined
//! semantics; see [`keys`] and the typed view in [`WellKnownExtras`].
//!
//! Typed getters never fail: a missing key or a value of another kind
//! yields `None` (and a warning for the latter).

pub mod keys;
pub mod sanitize;
pub mod well_known;

pub use sanitize::sanitize;
pub use well_known::WellKnownExtras;

use bytes::Bytes;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::cell::Cell;
use std::collections::btree_map;
use std::collections::BTreeMap;
use tracing::warn;

/// Deepest nesting of bundles accepted when deserializing a bag
///
/// The outermost bag is depth 1.
pub const MAX_NESTING_DEPTH: usize = 32;

thread_local! {
    static DECODE_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Tracks how many bags are being deserialized on this thread
struct DepthGuard;

impl DepthGuard {
    fn enter() -> Result<Self, String> {
        DECODE_DEPTH.with(|depth| {
            let next = depth.get() + 1;
            if next > MAX_NESTING_DEPTH {
                return Err(format!(
                    "call extras nested deeper than {} levels",
                    MAX_NESTING_DEPTH
                ));
            }
            depth.set(next);
            Ok(DepthGuard)
        })
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DECODE_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// Object carried by type name and opaque payload
///
/// Only objects whose type name lies in an approved system namespace survive
/// sanitization; see [`SanitizerConfig`](crate::config::SanitizerConfig).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpaqueObject {
    /// Fully qualified type name, e.g. `ims.RtpHeaderExtension`
    pub type_name: String,
    /// Encoded object
    pub payload: Bytes,
}

impl OpaqueObject {
    /// Create a new opaque object
    pub fn new(type_name: impl Into<String>, payload: impl Into<Bytes>) -> Self {
        Self {
            type_name: type_name.into(),
            payload: payload.into(),
        }
    }
}

/// Value stored in the extras bag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExtraValue {
    Int(i32),
    Long(i64),
    Double(f64),
    Bool(bool),
    String(String),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
    DoubleArray(Vec<f64>),
    BoolArray(Vec<bool>),
    StringArray(Vec<String>),
    /// Nested extras
    Bundle(CallExtras),
    /// Opaque object, kept only if transport-safe
    Object(OpaqueObject),
}

impl ExtraValue {
    /// Short name of the value kind, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Double(_) => "double",
            Self::Bool(_) => "bool",
            Self::String(_) => "string",
            Self::IntArray(_) => "int[]",
            Self::LongArray(_) => "long[]",
            Self::DoubleArray(_) => "double[]",
            Self::BoolArray(_) => "bool[]",
            Self::StringArray(_) => "string[]",
            Self::Bundle(_) => "bundle",
            Self::Object(_) => "object",
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Self::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bundle(&self) -> Option<&CallExtras> {
        match self {
            Self::Bundle(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&OpaqueObject> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! extra_value_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for ExtraValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

extra_value_from! {
    i32 => Int,
    i64 => Long,
    f64 => Double,
    bool => Bool,
    String => String,
    Vec<i32> => IntArray,
    Vec<i64> => LongArray,
    Vec<f64> => DoubleArray,
    Vec<bool> => BoolArray,
    Vec<String> => StringArray,
    CallExtras => Bundle,
    OpaqueObject => Object,
}

impl From<&str> for ExtraValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// String-keyed bag of call attributes
///
/// Entries are kept in key order so the encoded form is deterministic.
/// `Clone` is a deep copy: nested bundles and payloads are never shared
/// mutably between two bags.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CallExtras {
    entries: BTreeMap<String, ExtraValue>,
}

impl<'de> Deserialize<'de> for CallExtras {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let _guard = DepthGuard::enter().map_err(D::Error::custom)?;
        let entries = BTreeMap::<String, ExtraValue>::deserialize(deserializer)?;
        Ok(Self { entries })
    }
}

impl CallExtras {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&ExtraValue> {
        self.entries.get(key)
    }

    /// Insert or overwrite an entry, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ExtraValue>) -> Option<ExtraValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<ExtraValue> {
        self.entries.remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ExtraValue> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ExtraValue>) -> Self {
        self.insert(key, value);
        self
    }

    fn typed<'a, T>(
        &'a self,
        key: &str,
        expected: &'static str,
        extract: impl FnOnce(&'a ExtraValue) -> Option<T>,
    ) -> Option<T> {
        let value = self.entries.get(key)?;
        let typed = extract(value);
        if typed.is_none() {
            warn!(
                key,
                expected,
                found = value.kind(),
                "call extra has unexpected type, returning default"
            );
        }
        typed
    }

    pub fn get_int(&self, key: &str) -> Option<i32> {
        self.typed(key, "int", ExtraValue::as_int)
    }

    pub fn get_long(&self, key: &str) -> Option<i64> {
        self.typed(key, "long", ExtraValue::as_long)
    }

    pub fn get_double(&self, key: &str) -> Option<f64> {
        self.typed(key, "double", ExtraValue::as_double)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.typed(key, "bool", ExtraValue::as_bool)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.typed(key, "string", ExtraValue::as_str)
    }

    pub fn get_bundle(&self, key: &str) -> Option<&CallExtras> {
        self.typed(key, "bundle", ExtraValue::as_bundle)
    }

    /// String value for `key`, or `default` if missing or not a string
    pub fn get_string_or(&self, key: &str, default: &str) -> String {
        self.get_str(key).unwrap_or(default).to_string()
    }

    /// Bool value for `key`, or `default` if missing or not a bool
    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_bool(key).unwrap_or(default)
    }

    /// Int value for `key`, or `default` if missing or not an int
    pub fn get_int_or(&self, key: &str, default: i32) -> i32 {
        self.get_int(key).unwrap_or(default)
    }

    /// Nesting depth: 1 for a bag without nested bundles
    pub fn depth(&self) -> usize {
        1 + self
            .entries
            .values()
            .filter_map(ExtraValue::as_bundle)
            .map(CallExtras::depth)
            .max()
            .unwrap_or(0)
    }

    /// Typed view of the well-known keys
    pub fn well_known(&self) -> WellKnownExtras {
        WellKnownExtras::from_extras(self)
    }
}

impl<'a> IntoIterator for &'a CallExtras {
    type Item = (&'a String, &'a ExtraValue);
    type IntoIter = btree_map::Iter<'a, String, ExtraValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<ExtraValue>> FromIterator<(K, V)> for CallExtras {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<ExtraValue>> Extend<(K, V)> for CallExtras {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
