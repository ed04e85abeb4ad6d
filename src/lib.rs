//! assort — supplier assortment feed normalizer.
//!
//! Turns supplier product feeds (semicolon-delimited CSV or JSON) into
//! canonical [`Product`] records with a restricted vocabulary for packaging
//! and unit codes. This crate re-exports the member crates and adds the
//! [`pipeline`] layer that ties them together, so integration tests and the
//! binary can import everything from one place.
//!
//! # Architecture
//!
//! ```text
//! payload + content type ──► assort-feeds ──► assort-core ──► Vec<Product>
//!                             (CSV / JSON)    (builder, vocabulary, numeric)
//! ```
//!
//! Transport concerns (HTTP routing, authorization, status codes) live with
//! the caller.

pub mod pipeline;

pub use assort_core::{
    build_product, config, numeric, vocabulary, AmountPolicy, BaseProductPackaging,
    BaseProductUnit, ContentType, Error, FieldSchema, NormalizationError, Packaging, ParseError,
    Product, ProductBuilder, RawRecord, Result, CSV_SCHEMA, JSON_SCHEMA,
};
pub use assort_feeds::{
    parse_csv, parse_json, parser_for, try_parse_json, CsvPayload, JsonPayload, PayloadParser,
};
pub use pipeline::{normalize, Pipeline};
