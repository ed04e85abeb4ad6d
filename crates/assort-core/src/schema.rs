//! Field schemas — which source field feeds which canonical attribute.
//!
//! CSV and JSON suppliers name their fields differently and the two layouts
//! are not interchangeable, so each gets its own named constant. Callers may
//! also supply their own schema (see `[schema.*]` in the config file).

use crate::types::ContentType;
use serde::Deserialize;
use std::borrow::Cow;

/// Source field name for each canonical [`Product`](crate::Product) attribute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldSchema {
    pub id: Cow<'static, str>,
    pub gtin: Cow<'static, str>,
    pub manufacturer: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub packaging: Cow<'static, str>,
    pub base_product_packaging: Cow<'static, str>,
    pub base_product_unit: Cow<'static, str>,
    pub base_product_amount: Cow<'static, str>,
    pub base_product_quantity: Cow<'static, str>,
}

/// Header names of the semicolon-delimited supplier CSV.
pub const CSV_SCHEMA: FieldSchema = FieldSchema {
    id: Cow::Borrowed("id"),
    gtin: Cow::Borrowed("ean"),
    manufacturer: Cow::Borrowed("manufacturer"),
    name: Cow::Borrowed("product"),
    packaging: Cow::Borrowed("packaging product"),
    base_product_packaging: Cow::Borrowed("packaging unit"),
    base_product_unit: Cow::Borrowed("description"),
    base_product_amount: Cow::Borrowed("amount per unit"),
    base_product_quantity: Cow::Borrowed("items on stock (availability)"),
};

/// Member names of the supplier JSON objects.
pub const JSON_SCHEMA: FieldSchema = FieldSchema {
    id: Cow::Borrowed("PRODUCT_IDENTIFIER"),
    gtin: Cow::Borrowed("EAN_CODE_GTIN"),
    manufacturer: Cow::Borrowed("BRAND"),
    name: Cow::Borrowed("NAME"),
    packaging: Cow::Borrowed("PACKAGE"),
    base_product_packaging: Cow::Borrowed("VESSEL"),
    base_product_unit: Cow::Borrowed("ADDITIONAL_INFO"),
    base_product_amount: Cow::Borrowed("LITERS_PER_BOTTLE"),
    base_product_quantity: Cow::Borrowed("BOTTLE_AMOUNT"),
};

impl FieldSchema {
    /// The built-in schema for a content type.
    pub fn builtin(content_type: ContentType) -> &'static FieldSchema {
        match content_type {
            ContentType::Csv => &CSV_SCHEMA,
            ContentType::Json => &JSON_SCHEMA,
        }
    }
}
