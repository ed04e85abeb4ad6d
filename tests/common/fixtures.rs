//! Static supplier payloads used across harnesses.

/// Header row of the supplier CSV feed.
pub const CSV_HEADER: &str = "id;ean;manufacturer;product;packaging product;packaging unit;description;amount per unit;items on stock (availability)";

/// One complete CSV row: a case of six 0,75 bottles.
pub const CSV_SINGLE: &str = "id;ean;manufacturer;product;packaging product;packaging unit;description;amount per unit;items on stock (availability)\nABC1;054490;Bev Ltd;Beverage 23;case;bottle;info;0,75;6";

/// Several rows exercising case-insensitivity, unknown codes, quoting and
/// missing values.
pub const CSV_MIXED: &str = "\
id;ean;manufacturer;product;packaging product;packaging unit;description;amount per unit;items on stock (availability)
ABC1;054490;Bev Ltd;Beverage 23;CASE;Bottle;liters;0,75 L;6
ABC2;;Bev Ltd;\"Lemonade; cloudy\";box;can;Liters;0.33;24 cans
ABC3;0123;Brew Co;Stout;pallet;keg;grams;6 x 0.5;n/a
";

/// One complete JSON element: a box of cans.
pub const JSON_SINGLE: &str = r#"[{"PRODUCT_IDENTIFIER":"ABC1","PACKAGE":"box","VESSEL":"can","LITERS_PER_BOTTLE":"0.75","BOTTLE_AMOUNT":"6"}]"#;

/// JSON elements with numeric scalars and a missing amount.
pub const JSON_MIXED: &str = r#"[
  {"PRODUCT_IDENTIFIER":"J1","EAN_CODE_GTIN":"4006381333931","BRAND":"Water AG","NAME":"Still 12x1L","PACKAGE":"Case","VESSEL":"Bottle","ADDITIONAL_INFO":"LITERS","LITERS_PER_BOTTLE":1,"BOTTLE_AMOUNT":12},
  {"PRODUCT_IDENTIFIER":"J2","PACKAGE":"bottle","VESSEL":"glass","LITERS_PER_BOTTLE":"0,7","BOTTLE_AMOUNT":"1"}
]"#;

/// Build a CSV payload with `rows` data rows under [`CSV_HEADER`].
pub fn csv_with_rows(rows: usize) -> String {
    let mut payload = String::from(CSV_HEADER);
    for i in 0..rows {
        payload.push('\n');
        payload.push_str(&format!(
            "SKU{i};{:013};Maker {};Product {i};case;bottle;liters;0,{};{}",
            i,
            i % 7,
            (i % 9) + 1,
            i % 24
        ));
    }
    payload
}

/// Build a JSON payload with `rows` elements.
pub fn json_with_rows(rows: usize) -> String {
    let items: Vec<_> = (0..rows)
        .map(|i| {
            serde_json::json!({
                "PRODUCT_IDENTIFIER": format!("SKU{i}"),
                "PACKAGE": "box",
                "VESSEL": "can",
                "ADDITIONAL_INFO": "liters",
                "LITERS_PER_BOTTLE": "0.33",
                "BOTTLE_AMOUNT": i % 24,
            })
        })
        .collect();
    serde_json::to_string(&items).unwrap()
}
