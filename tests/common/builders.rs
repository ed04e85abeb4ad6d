//! Test builders — ergonomic constructors for raw records.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use assort::RawRecord;

/// Fluent builder for [`RawRecord`] fixtures.
///
/// # Example
///
/// ```rust
/// let record = RawRecordBuilder::new()
///     .field("PACKAGE", "box")
///     .field("BOTTLE_AMOUNT", 6)
///     .build();
/// ```
#[derive(Default)]
pub struct RawRecordBuilder {
    record: RawRecord,
}

impl RawRecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.record.insert(key, value);
        self
    }

    pub fn build(self) -> RawRecord {
        self.record
    }
}

/// A CSV-shaped record carrying only the code and numeric fields.
pub fn csv_record(packaging: &str, vessel: &str, amount: &str, quantity: &str) -> RawRecord {
    RawRecordBuilder::new()
        .field("packaging product", packaging)
        .field("packaging unit", vessel)
        .field("amount per unit", amount)
        .field("items on stock (availability)", quantity)
        .build()
}

/// A JSON-shaped record carrying only the code and numeric fields.
pub fn json_record(
    package: &str,
    vessel: &str,
    amount: impl Into<serde_json::Value>,
    quantity: impl Into<serde_json::Value>,
) -> RawRecord {
    RawRecordBuilder::new()
        .field("PACKAGE", package)
        .field("VESSEL", vessel)
        .field("LITERS_PER_BOTTLE", amount)
        .field("BOTTLE_AMOUNT", quantity)
        .build()
}
