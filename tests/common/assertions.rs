//! Domain-specific assertion macros for assort harnesses.
//!
//! These add context to failures so it is clear which record and which
//! canonical field broke.

/// Assert the three code fields of a product, by two-letter code.
///
/// ```rust
/// assert_codes!(product, Some("CA"), Some("BO"), None);
/// ```
#[macro_export]
macro_rules! assert_codes {
    ($product:expr, $packaging:expr, $base_packaging:expr, $unit:expr) => {{
        let product: &assort::Product = &$product;
        let actual = (
            product.packaging().map(|c| c.code()),
            product.base_product_packaging().map(|c| c.code()),
            product.base_product_unit().map(|c| c.code()),
        );
        let expected: (Option<&str>, Option<&str>, Option<&str>) =
            ($packaging, $base_packaging, $unit);
        if actual != expected {
            panic!(
                "assert_codes! failed for product {:?}:\n  expected (packaging, base packaging, unit): {:?}\n  actual:   {:?}",
                product.id(),
                expected,
                actual
            );
        }
    }};
}

/// Assert amount and quantity of a product.
#[macro_export]
macro_rules! assert_measures {
    ($product:expr, $amount:expr, $quantity:expr) => {{
        let product: &assort::Product = &$product;
        let expected: (f64, i64) = ($amount, $quantity);
        let actual = (product.base_product_amount(), product.base_product_quantity());
        if actual != expected {
            panic!(
                "assert_measures! failed for product {:?}:\n  expected (amount, quantity): {:?}\n  actual:   {:?}",
                product.id(),
                expected,
                actual
            );
        }
    }};
}

/// Assert that a record has no key whose value is an empty string.
pub fn assert_no_empty_values(record: &assort::RawRecord) {
    for key in record.keys() {
        let value = record.get(key);
        assert!(
            value != Some(&serde_json::Value::String(String::new())),
            "record still carries empty field {key:?}: {record:?}"
        );
    }
}
