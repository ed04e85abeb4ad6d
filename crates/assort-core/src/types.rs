//! Core types for assort-core.
//!
//! This module defines the data shared across the parse and build layers: the
//! two-letter packaging/unit codes, the [`RawRecord`] produced by the payload
//! parsers, and the [`ContentType`] discriminant used to pick a parser and a
//! field schema.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

// ---------------------------------------------------------------------------
// Controlled vocabulary codes
// ---------------------------------------------------------------------------

/// Outer packaging of the sold unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Packaging {
    #[serde(rename = "CA")]
    Case,
    #[serde(rename = "BX")]
    Box,
    #[serde(rename = "BO")]
    Bottle,
}

impl Packaging {
    pub fn code(self) -> &'static str {
        match self {
            Packaging::Case => "CA",
            Packaging::Box => "BX",
            Packaging::Bottle => "BO",
        }
    }
}

/// Packaging of the base product inside the package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseProductPackaging {
    #[serde(rename = "BO")]
    Bottle,
    #[serde(rename = "CN")]
    Can,
}

impl BaseProductPackaging {
    pub fn code(self) -> &'static str {
        match self {
            BaseProductPackaging::Bottle => "BO",
            BaseProductPackaging::Can => "CN",
        }
    }
}

/// Unit of measurement of the base product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseProductUnit {
    #[serde(rename = "LT")]
    Liters,
    #[serde(rename = "GR")]
    Grams,
}

impl BaseProductUnit {
    pub fn code(self) -> &'static str {
        match self {
            BaseProductUnit::Liters => "LT",
            BaseProductUnit::Grams => "GR",
        }
    }
}

impl std::fmt::Display for Packaging {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::fmt::Display for BaseProductPackaging {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::fmt::Display for BaseProductUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// Content type
// ---------------------------------------------------------------------------

/// Which wire format a payload arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Csv,
    Json,
}

impl ContentType {
    pub fn mime(self) -> &'static str {
        match self {
            ContentType::Csv => "text/csv",
            ContentType::Json => "application/json",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime())
    }
}

impl std::str::FromStr for ContentType {
    type Err = crate::Error;

    /// Parse a MIME string. Parameters (`; charset=utf-8`) are ignored and the
    /// comparison is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let essence = s.split(';').next().unwrap_or_default().trim();
        if essence.eq_ignore_ascii_case("text/csv") {
            Ok(ContentType::Csv)
        } else if essence.eq_ignore_ascii_case("application/json") {
            Ok(ContentType::Json)
        } else {
            Err(crate::Error::UnsupportedContentType(s.to_string()))
        }
    }
}

// ---------------------------------------------------------------------------
// Raw record
// ---------------------------------------------------------------------------

/// One unvalidated row/element as produced by a payload parser.
///
/// Keys keep their insertion order. CSV records only ever hold string values;
/// JSON records hold whatever scalar the supplier sent. Consumers must treat
/// every key as optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field. A repeated key keeps its first position and takes the
    /// latest value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop every field whose value is an empty string.
    pub fn retain_non_empty(&mut self) {
        self.0
            .retain(|_, v| !matches!(v, Value::String(s) if s.is_empty()));
    }

    /// Field value coerced to text.
    ///
    /// Strings are borrowed, numbers render as their JSON text and booleans as
    /// `true`/`false`. Null, arrays and objects count as absent.
    pub fn text(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.0.get(key)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(number_text(n))),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Integers verbatim; floats through `f64` Display, which never uses exponent
/// form (`2e16` → `20000000000000000`).
fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Anything that is not a JSON object becomes an empty record.
impl From<Value> for RawRecord {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = RawRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
