//! Product builder — turns one [`RawRecord`] into a [`Product`] through a
//! caller-supplied [`FieldSchema`].
//!
//! Pass-through fields are copied verbatim, code fields go through the
//! [`vocabulary`](crate::vocabulary) tables and the amount/quantity through
//! [`numeric`](crate::numeric). A record either builds completely or fails on
//! its amount under [`AmountPolicy::Strict`].

use crate::error::NormalizationError;
use crate::numeric::{self, AmountPolicy};
use crate::product::Product;
use crate::schema::FieldSchema;
use crate::types::RawRecord;

/// Builds products for one schema and amount policy.
#[derive(Debug, Clone, Copy)]
pub struct ProductBuilder<'s> {
    schema: &'s FieldSchema,
    policy: AmountPolicy,
}

impl<'s> ProductBuilder<'s> {
    pub fn new(schema: &'s FieldSchema) -> Self {
        Self {
            schema,
            policy: AmountPolicy::default(),
        }
    }

    pub fn amount_policy(mut self, policy: AmountPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(&self, record: &RawRecord) -> Result<Product, NormalizationError> {
        let schema = self.schema;
        let text = |field: &str| record.text(field);

        let amount = numeric::amount(
            text(&schema.base_product_amount).as_deref(),
            &schema.base_product_amount,
            self.policy,
        )?;
        let quantity = numeric::quantity(text(&schema.base_product_quantity).as_deref());

        let product = Product::default()
            .with_id(text(&schema.id).as_deref())
            .with_gtin(text(&schema.gtin).as_deref())
            .with_manufacturer(text(&schema.manufacturer).as_deref())
            .with_name(text(&schema.name).as_deref())
            .with_packaging(text(&schema.packaging).as_deref())
            .with_base_product_packaging(text(&schema.base_product_packaging).as_deref())
            .with_base_product_unit(text(&schema.base_product_unit).as_deref())
            .with_base_product_amount(amount)
            .with_base_product_quantity(quantity);

        tracing::debug!(id = ?product.id(), "product built");
        Ok(product)
    }
}

/// Build with the default (strict) amount policy.
pub fn build_product(
    record: &RawRecord,
    schema: &FieldSchema,
) -> Result<Product, NormalizationError> {
    ProductBuilder::new(schema).build(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CSV_SCHEMA, JSON_SCHEMA};
    use crate::types::{BaseProductPackaging, Packaging};
    use pretty_assertions::assert_eq;

    fn csv_record() -> RawRecord {
        [
            ("id", "ABC1"),
            ("ean", "054490"),
            ("manufacturer", "Bev Ltd"),
            ("product", "Beverage 23"),
            ("packaging product", "case"),
            ("packaging unit", "bottle"),
            ("description", "info"),
            ("amount per unit", "0,75"),
            ("items on stock (availability)", "6"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn builds_full_csv_record() {
        let product = build_product(&csv_record(), &CSV_SCHEMA).unwrap();
        assert_eq!(product.id(), Some("ABC1"));
        assert_eq!(product.gtin(), Some("054490"));
        assert_eq!(product.manufacturer(), Some("Bev Ltd"));
        assert_eq!(product.name(), Some("Beverage 23"));
        assert_eq!(product.packaging(), Some(Packaging::Case));
        assert_eq!(product.base_product_packaging(), Some(BaseProductPackaging::Bottle));
        assert_eq!(product.base_product_unit(), None);
        assert_eq!(product.base_product_amount(), 0.75);
        assert_eq!(product.base_product_quantity(), 6);
    }

    #[test]
    fn missing_amount_names_the_source_field() {
        let record: RawRecord = [("PRODUCT_IDENTIFIER", "X")].into_iter().collect();
        let err = build_product(&record, &JSON_SCHEMA).unwrap_err();
        assert_eq!(
            err,
            NormalizationError::MissingAmount {
                field: "LITERS_PER_BOTTLE".into(),
                raw: None,
            }
        );
    }

    #[test]
    fn lenient_policy_defaults_amount() {
        let record: RawRecord = [("PRODUCT_IDENTIFIER", "X")].into_iter().collect();
        let product = ProductBuilder::new(&JSON_SCHEMA)
            .amount_policy(AmountPolicy::Lenient)
            .build(&record)
            .unwrap();
        assert_eq!(product.id(), Some("X"));
        assert_eq!(product.base_product_amount(), 0.0);
        assert_eq!(product.base_product_quantity(), 0);
    }
}
