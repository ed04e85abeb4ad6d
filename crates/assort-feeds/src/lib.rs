//! assort-feeds — payload parsers for supplier product feeds.
//!
//! Each parser turns an already-read payload string into an ordered sequence
//! of [`RawRecord`]s for the product builder. Parsers do no schema validation.

pub mod delimited;
pub mod json;

pub use delimited::{parse_csv, CsvPayload};
pub use json::{parse_json, try_parse_json, JsonPayload};

use assort_core::config::JsonConfig;
use assort_core::{ContentType, ParseError, RawRecord};

/// Trait implemented by each payload format.
pub trait PayloadParser: Send + Sync {
    /// The wire format this parser accepts.
    fn content_type(&self) -> ContentType;

    /// Split `payload` into raw records, in input order.
    fn parse(&self, payload: &str) -> Result<Vec<RawRecord>, ParseError>;
}

/// The parser for `content_type`, configured from the `[json]` section.
pub fn parser_for(content_type: ContentType, json: &JsonConfig) -> Box<dyn PayloadParser> {
    match content_type {
        ContentType::Csv => Box::new(CsvPayload::default()),
        ContentType::Json => Box::new(JsonPayload::from_config(json)),
    }
}
