//! JSON payloads: a top-level array of flat objects, optionally wrapped in an
//! envelope object (`{"data": [...]}`).
//!
//! Decoding failures are reported by [`JsonPayload::decode`]. Whether the
//! [`PayloadParser`] impl surfaces them or swallows them into zero records is
//! the caller's choice via [`MalformedJson`]; the default swallows, matching
//! the legacy endpoint.

use crate::PayloadParser;
use assort_core::config::{JsonConfig, MalformedJson};
use assort_core::{ContentType, ParseError, RawRecord};
use serde_json::Value;

/// JSON parser.
#[derive(Debug, Clone, Default)]
pub struct JsonPayload {
    on_malformed: MalformedJson,
    envelope_key: Option<String>,
}

impl JsonPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &JsonConfig) -> Self {
        Self {
            on_malformed: config.on_malformed,
            envelope_key: config.envelope_key.clone(),
        }
    }

    pub fn on_malformed(mut self, policy: MalformedJson) -> Self {
        self.on_malformed = policy;
        self
    }

    pub fn envelope_key(mut self, key: impl Into<String>) -> Self {
        self.envelope_key = Some(key.into());
        self
    }

    /// Decode the payload into its array elements, as-is.
    pub fn decode(&self, payload: &str) -> Result<Vec<Value>, ParseError> {
        let value: Value = serde_json::from_str(payload)?;

        let value = match &self.envelope_key {
            Some(key) => {
                let missing = || ParseError::MissingEnvelope { key: key.clone() };
                match value {
                    Value::Object(mut map) => map.remove(key).ok_or_else(missing)?,
                    _ => return Err(missing()),
                }
            }
            None => value,
        };

        match value {
            Value::Array(items) => Ok(items),
            _ => Err(ParseError::NotAnArray),
        }
    }
}

impl PayloadParser for JsonPayload {
    fn content_type(&self) -> ContentType {
        ContentType::Json
    }

    fn parse(&self, payload: &str) -> Result<Vec<RawRecord>, ParseError> {
        let items = match self.decode(payload) {
            Ok(items) => items,
            Err(err) => match self.on_malformed {
                MalformedJson::Empty => {
                    tracing::warn!(error = %err, "malformed JSON payload; yielding no records");
                    return Ok(Vec::new());
                }
                MalformedJson::Error => return Err(err),
            },
        };

        Ok(items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                if !item.is_object() {
                    tracing::debug!(index, "JSON element is not an object; treated as empty");
                }
                RawRecord::from(item)
            })
            .collect())
    }
}

/// Decode a top-level JSON array, reporting malformed input.
pub fn try_parse_json(payload: &str) -> Result<Vec<Value>, ParseError> {
    JsonPayload::new().decode(payload)
}

/// Decode a top-level JSON array. Malformed input yields an empty sequence,
/// never an error.
pub fn parse_json(payload: &str) -> Vec<Value> {
    try_parse_json(payload).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "malformed JSON payload; yielding no records");
        Vec::new()
    })
}
