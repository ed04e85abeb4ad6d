//! Semicolon-delimited CSV payloads.
//!
//! The payload is trimmed and split into lines on any line break; each line is
//! trimmed and blank lines are dropped. The first line holds the headers.
//! Every other line is split with standard CSV quoting and zipped with the
//! headers by position. Missing trailing fields leave their headers out of the
//! record, and fields with an empty value are removed.

use crate::PayloadParser;
use assort_core::{ContentType, ParseError, RawRecord};

/// CSV parser. Defaults to `;` as the field separator.
#[derive(Debug, Clone, Copy)]
pub struct CsvPayload {
    delimiter: u8,
}

impl Default for CsvPayload {
    fn default() -> Self {
        Self { delimiter: b';' }
    }
}

impl CsvPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom field separator.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Split one line into fields. `line` is the 1-based line number among
    /// non-blank lines, used for error context.
    fn split_fields(&self, text: &str, line: usize) -> Result<Vec<String>, ParseError> {
        let mut reader = ::csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut record = ::csv::StringRecord::new();
        match reader.read_record(&mut record) {
            Ok(true) => Ok(record.iter().map(str::to_string).collect()),
            Ok(false) => Ok(Vec::new()),
            // Guards csv-crate reader errors; a single unterminated line does
            // not normally produce one.
            Err(err) => Err(ParseError::Csv {
                line,
                message: err.to_string(),
            }),
        }
    }
}

impl PayloadParser for CsvPayload {
    fn content_type(&self) -> ContentType {
        ContentType::Csv
    }

    fn parse(&self, payload: &str) -> Result<Vec<RawRecord>, ParseError> {
        if payload.is_empty() {
            return Err(ParseError::EmptyPayload);
        }

        let mut lines = payload
            .trim()
            .split(['\r', '\n'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(i, line)| (i + 1, line));

        let Some((header_line, header_text)) = lines.next() else {
            return Ok(Vec::new());
        };
        let headers = self.split_fields(header_text, header_line)?;

        let mut records = Vec::new();
        for (line, text) in lines {
            let fields = self.split_fields(text, line)?;
            if fields.len() > headers.len() {
                tracing::warn!(
                    line,
                    fields = fields.len(),
                    headers = headers.len(),
                    "CSV line has more fields than headers; extra fields dropped"
                );
            }

            let mut record: RawRecord = headers.iter().cloned().zip(fields).collect();
            record.retain_non_empty();
            tracing::debug!(line, fields = record.len(), "CSV line parsed");
            records.push(record);
        }
        Ok(records)
    }
}

/// Parse a `;`-delimited payload with a header row.
pub fn parse_csv(payload: &str) -> Result<Vec<RawRecord>, ParseError> {
    CsvPayload::default().parse(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_payload_is_an_error() {
        assert!(matches!(parse_csv(""), Err(ParseError::EmptyPayload)));
    }

    #[test]
    fn header_only_payload_has_no_records() {
        assert_eq!(parse_csv("id;ean").unwrap(), Vec::<RawRecord>::new());
        assert_eq!(parse_csv("  \n\t ").unwrap(), Vec::<RawRecord>::new());
    }

    #[test]
    fn quoted_separator_is_preserved() {
        let records = parse_csv("id;product\nA1;\"Wine; red\"").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text("product").as_deref(), Some("Wine; red"));
    }

    #[test]
    fn short_line_omits_trailing_headers() {
        let records = parse_csv("a;b;c\n1;2").unwrap();
        assert_eq!(records[0].keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn long_line_drops_extra_fields() {
        let records = parse_csv("a;b\n1;2;3").unwrap();
        assert_eq!(records[0].keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn empty_values_are_removed() {
        let records = parse_csv("a;b;c\n1;;3").unwrap();
        assert!(!records[0].contains_key("b"));
        assert_eq!(records[0].len(), 2);
    }

    #[test]
    fn blank_lines_and_crlf_are_skipped() {
        let records = parse_csv("\r\n a;b \r\n\r\n1;2\r\n   \r\n3;4\r\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].text("a").as_deref(), Some("3"));
    }

    #[test]
    fn custom_delimiter() {
        let records = CsvPayload::new().with_delimiter(b',').parse("a,b\n1,2").unwrap();
        assert_eq!(records[0].text("b").as_deref(), Some("2"));
    }
}
