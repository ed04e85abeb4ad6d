//! The canonical [`Product`] value type.

use crate::types::{BaseProductPackaging, BaseProductUnit, Packaging};
use crate::vocabulary;
use serde::Serialize;

/// A normalised product, one per raw record.
///
/// The three code fields can only hold a member of their vocabulary or `None`.
/// There is no in-place mutation: every `with_*` method consumes the product
/// and returns a new one, running the same normalization as the builder.
///
/// Serializes with the canonical camelCase field names in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: Option<String>,
    gtin: Option<String>,
    manufacturer: Option<String>,
    name: Option<String>,
    packaging: Option<Packaging>,
    base_product_packaging: Option<BaseProductPackaging>,
    base_product_unit: Option<BaseProductUnit>,
    base_product_amount: f64,
    base_product_quantity: i64,
}

impl Product {
    /// Supplier's own product identifier.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn gtin(&self) -> Option<&str> {
        self.gtin.as_deref()
    }

    pub fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn packaging(&self) -> Option<Packaging> {
        self.packaging
    }

    pub fn base_product_packaging(&self) -> Option<BaseProductPackaging> {
        self.base_product_packaging
    }

    pub fn base_product_unit(&self) -> Option<BaseProductUnit> {
        self.base_product_unit
    }

    /// Contents of one base product, in [`base_product_unit`](Self::base_product_unit).
    pub fn base_product_amount(&self) -> f64 {
        self.base_product_amount
    }

    /// Number of base products in the package.
    pub fn base_product_quantity(&self) -> i64 {
        self.base_product_quantity
    }

    pub fn with_id(self, id: Option<&str>) -> Self {
        Self {
            id: id.map(str::to_string),
            ..self
        }
    }

    pub fn with_gtin(self, gtin: Option<&str>) -> Self {
        Self {
            gtin: gtin.map(str::to_string),
            ..self
        }
    }

    pub fn with_manufacturer(self, manufacturer: Option<&str>) -> Self {
        Self {
            manufacturer: manufacturer.map(str::to_string),
            ..self
        }
    }

    pub fn with_name(self, name: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            ..self
        }
    }

    /// Replace the packaging from a free-text descriptor; unknown text clears it.
    pub fn with_packaging(self, raw: Option<&str>) -> Self {
        Self {
            packaging: vocabulary::packaging(raw),
            ..self
        }
    }

    pub fn with_base_product_packaging(self, raw: Option<&str>) -> Self {
        Self {
            base_product_packaging: vocabulary::base_product_packaging(raw),
            ..self
        }
    }

    pub fn with_base_product_unit(self, raw: Option<&str>) -> Self {
        Self {
            base_product_unit: vocabulary::base_product_unit(raw),
            ..self
        }
    }

    pub fn with_base_product_amount(self, amount: f64) -> Self {
        Self {
            base_product_amount: amount,
            ..self
        }
    }

    pub fn with_base_product_quantity(self, quantity: i64) -> Self {
        Self {
            base_product_quantity: quantity,
            ..self
        }
    }
}
