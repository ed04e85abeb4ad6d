//! Pipeline — content-type dispatch, payload parsing and per-record building.
//!
//! A parse failure aborts the batch. Under the strict amount policy the first
//! record that fails to build aborts it too, reported with its zero-based
//! index and the offending source field.

use assort_core::config::Config;
use assort_core::{ContentType, Error, Product, ProductBuilder, Result};
use assort_feeds::parser_for;

/// Normalizes payloads with one configuration.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse `payload` and build one [`Product`] per raw record.
    pub fn run(&self, payload: &str, content_type: ContentType) -> Result<Vec<Product>> {
        let parser = parser_for(content_type, &self.config.json);
        let records = parser.parse(payload)?;

        let builder = ProductBuilder::new(self.config.schema.resolve(content_type))
            .amount_policy(self.config.normalize.amount_policy);

        let products = records
            .iter()
            .enumerate()
            .map(|(index, record)| builder.build(record).map_err(|e| Error::record(index, e)))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            content_type = %content_type,
            records = records.len(),
            "payload normalized"
        );
        Ok(products)
    }

    /// Like [`run`](Self::run), taking the content type as a MIME string.
    pub fn run_mime(&self, payload: &str, mime: &str) -> Result<Vec<Product>> {
        self.run(payload, mime.parse()?)
    }
}

/// Normalize `payload` with the built-in defaults.
pub fn normalize(payload: &str, mime: &str) -> Result<Vec<Product>> {
    Pipeline::default().run_mime(payload, mime)
}
