//! Error types shared by the parse and build layers.

use thiserror::Error;

/// Result type alias for assort operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The payload could not be split into records at all. Aborts the whole batch.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Empty payload: there is no header row to consume.
    #[error("payload is empty")]
    EmptyPayload,

    /// A CSV line could not be split into fields.
    #[error("CSV line {line}: {message}")]
    Csv { line: usize, message: String },

    /// JSON decode failure.
    #[error("malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON payload decoded, but not to an array.
    #[error("JSON payload is not an array")]
    NotAnArray,

    /// An envelope key was configured but the payload does not carry it.
    #[error("JSON payload has no {key:?} envelope")]
    MissingEnvelope { key: String },
}

/// A single field of a record could not be normalized.
#[derive(Debug, Error, PartialEq)]
pub enum NormalizationError {
    /// No `digits[.digits]` token in the amount field (or the field is absent).
    #[error("no numeric amount in field {field:?} (raw value: {raw:?})")]
    MissingAmount { field: String, raw: Option<String> },

    /// Input to the decimal utility is not a number.
    #[error("not a decimal number: {raw:?}")]
    InvalidDecimal { raw: String },
}

/// Top-level errors surfaced by the pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Record `index` (zero-based, data rows only) failed to build.
    #[error("record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: NormalizationError,
    },

    #[error("no payload parser for content type {0:?}")]
    UnsupportedContentType(String),
}

impl Error {
    /// Attach a record index to a normalization failure.
    pub fn record(index: usize, source: NormalizationError) -> Self {
        Error::Record { index, source }
    }
}
