//! Vocabulary normalizer — maps free-text packaging and unit descriptors onto
//! the fixed two-letter codes.
//!
//! Lookups lower-case the input and consult a static table. Anything not in
//! the table, including `None`, resolves to `None`; a lookup never fails.

use crate::types::{BaseProductPackaging, BaseProductUnit, Packaging};
use phf::phf_map;

static PACKAGING: phf::Map<&'static str, Packaging> = phf_map! {
    "case" => Packaging::Case,
    "box" => Packaging::Box,
    "bottle" => Packaging::Bottle,
};

static BASE_PRODUCT_PACKAGING: phf::Map<&'static str, BaseProductPackaging> = phf_map! {
    "bottle" => BaseProductPackaging::Bottle,
    "can" => BaseProductPackaging::Can,
};

static BASE_PRODUCT_UNIT: phf::Map<&'static str, BaseProductUnit> = phf_map! {
    "liters" => BaseProductUnit::Liters,
    "grams" => BaseProductUnit::Grams,
};

fn lookup<T: Copy>(table: &phf::Map<&'static str, T>, raw: Option<&str>) -> Option<T> {
    let key = raw?.to_lowercase();
    table.get(key.as_str()).copied()
}

/// `case` → CA, `box` → BX, `bottle` → BO.
pub fn packaging(raw: Option<&str>) -> Option<Packaging> {
    lookup(&PACKAGING, raw)
}

/// `bottle` → BO, `can` → CN.
pub fn base_product_packaging(raw: Option<&str>) -> Option<BaseProductPackaging> {
    lookup(&BASE_PRODUCT_PACKAGING, raw)
}

/// `liters` → LT, `grams` → GR.
pub fn base_product_unit(raw: Option<&str>) -> Option<BaseProductUnit> {
    lookup(&BASE_PRODUCT_UNIT, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("case", Some(Packaging::Case))]
    #[case("CASE", Some(Packaging::Case))]
    #[case("Box", Some(Packaging::Box))]
    #[case("bottle", Some(Packaging::Bottle))]
    #[case("pallet", None)]
    #[case("", None)]
    #[case(" case", None)]
    fn packaging_table(#[case] raw: &str, #[case] expected: Option<Packaging>) {
        assert_eq!(packaging(Some(raw)), expected);
    }

    #[test]
    fn none_resolves_to_none() {
        assert_eq!(packaging(None), None);
        assert_eq!(base_product_packaging(None), None);
        assert_eq!(base_product_unit(None), None);
    }

    #[test]
    fn tables_are_independent() {
        // "case" is outer packaging only; "can" is base packaging only.
        assert_eq!(base_product_packaging(Some("case")), None);
        assert_eq!(packaging(Some("can")), None);
        assert_eq!(base_product_packaging(Some("Can")), Some(BaseProductPackaging::Can));
        assert_eq!(base_product_unit(Some("GRAMS")), Some(BaseProductUnit::Grams));
        assert_eq!(base_product_unit(Some("liter")), None);
    }
}
