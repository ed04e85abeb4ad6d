//! assort-core — supplier assortment normalization core.
//!
//! This crate holds the decision logic of the pipeline and the types shared
//! with the parser and binary crates.
//!
//! # Architecture
//!
//! ```text
//! payload ──► PayloadParser ──► RawRecord* ──► ProductBuilder ──► Product*
//!                                                 │
//!                                   vocabulary ◄──┴──► numeric
//! ```
//!
//! Everything here is synchronous and pure; the only shared state is the
//! read-only vocabulary tables and the amount-token regex.

pub mod builder;
pub mod config;
pub mod error;
pub mod numeric;
pub mod product;
pub mod schema;
pub mod types;
pub mod vocabulary;

pub use builder::{build_product, ProductBuilder};
pub use error::{Error, NormalizationError, ParseError, Result};
pub use numeric::AmountPolicy;
pub use product::Product;
pub use schema::{FieldSchema, CSV_SCHEMA, JSON_SCHEMA};
pub use types::{BaseProductPackaging, BaseProductUnit, ContentType, Packaging, RawRecord};
