use crate::models::{ProductInfo, RawProduct};

/// Kopecks per rouble
const MINOR_UNITS: i64 = 100;

/// Extracts name and price from a raw product card
///
/// Only the first size variant is considered. The price is converted from
/// kopecks to whole roubles, rounding down.
///
/// # Returns
/// `None` if the name is missing or empty, there are no sizes, or the first
/// size has no product price.
pub fn parse_product_info(product: &RawProduct) -> Option<ProductInfo> {
    let name = product.name.as_deref().filter(|n| !n.is_empty())?;
    let kopecks = product.first_size()?.price?.product?;

    Some(ProductInfo {
        name: name.to_string(),
        price: kopecks.div_euclid(MINOR_UNITS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(json: &str) -> RawProduct {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn extracts_name_and_price() {
        let p = product(r#"{"name":"Widget","sizes":[{"price":{"basic":25000,"product":19900}}]}"#);
        assert_eq!(
            parse_product_info(&p),
            Some(ProductInfo {
                name: "Widget".to_string(),
                price: 199,
            })
        );
    }

    #[test]
    fn price_is_floored() {
        let p = product(r#"{"name":"Widget","sizes":[{"price":{"product":19999}}]}"#);
        assert_eq!(parse_product_info(&p).unwrap().price, 199);

        let p = product(r#"{"name":"Widget","sizes":[{"price":{"product":99}}]}"#);
        assert_eq!(parse_product_info(&p).unwrap().price, 0);
    }

    #[test]
    fn only_first_size_counts() {
        let p = product(
            r#"{"name":"Widget","sizes":[{"price":{"product":50000}},{"price":{"product":10000}}]}"#,
        );
        assert_eq!(parse_product_info(&p).unwrap().price, 500);

        let p = product(r#"{"name":"Widget","sizes":[{},{"price":{"product":10000}}]}"#);
        assert_eq!(parse_product_info(&p), None);
    }

    #[test]
    fn missing_or_empty_name_is_absent() {
        let p = product(r#"{"sizes":[{"price":{"product":19900}}]}"#);
        assert_eq!(parse_product_info(&p), None);

        let p = product(r#"{"name":"","sizes":[{"price":{"product":19900}}]}"#);
        assert_eq!(parse_product_info(&p), None);
    }

    #[test]
    fn missing_or_empty_sizes_is_absent() {
        assert_eq!(parse_product_info(&product(r#"{"name":"Widget"}"#)), None);
        assert_eq!(parse_product_info(&product(r#"{"name":"Widget","sizes":[]}"#)), None);
        assert_eq!(parse_product_info(&product(r#"{"name":"Widget","sizes":null}"#)), None);
    }

    #[test]
    fn later_sizes_are_not_inspected() {
        let p = product(
            r#"{"name":"Widget","sizes":[{"price":{"product":19900}},{"price":{"product":1.5}},null]}"#,
        );
        assert_eq!(parse_product_info(&p).unwrap().price, 199);
    }

    #[test]
    fn odd_first_size_is_absent() {
        let p = product(r#"{"name":"Widget","sizes":[{"price":{"product":"19900"}}]}"#);
        assert_eq!(parse_product_info(&p), None);

        let p = product(r#"{"name":"Widget","sizes":[null]}"#);
        assert_eq!(parse_product_info(&p), None);
    }

    #[test]
    fn missing_price_is_absent() {
        let p = product(r#"{"name":"Widget","sizes":[{"optionId":1}]}"#);
        assert_eq!(parse_product_info(&p), None);

        let p = product(r#"{"name":"Widget","sizes":[{"price":{"basic":25000}}]}"#);
        assert_eq!(parse_product_info(&p), None);
    }
}
