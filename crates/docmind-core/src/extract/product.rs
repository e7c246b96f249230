//! Product detail extraction.

use crate::models::document::ProductDetails;

use super::rules::amounts::{extract_amounts, parse_amount};
use super::rules::patterns::{CATEGORY_KEYWORDS, NAME_LABEL, PRODUCT_LABEL, QUANTITY, UNIT_PRICE};
use super::rules::serial::extract_serial_numbers;

/// Extract product details from a document transcript.
pub fn extract_product_details(text: &str) -> ProductDetails {
    let ids = extract_serial_numbers(text);

    ProductDetails {
        name: extract_product_name(text),
        model: ids.model,
        serial_number: ids.serial.or(ids.imei),
        category: detect_category(text),
        quantity: QUANTITY
            .captures(text)
            .and_then(|caps| caps[1].parse().ok()),
        unit_price: UNIT_PRICE
            .captures(text)
            .and_then(|caps| parse_amount(&caps[1])),
        // The largest amount on a receipt is assumed to be the grand
        // total.
        total_price: extract_amounts(text).into_iter().map(|a| a.value).max(),
    }
}

/// Labeled product name. The product/item/description label is tried
/// before the bare name label; the first pattern that matches anywhere
/// wins.
fn extract_product_name(text: &str) -> Option<String> {
    PRODUCT_LABEL
        .captures(text)
        .or_else(|| NAME_LABEL.captures(text))
        .map(|caps| caps[2].trim().to_string())
        .filter(|name| !name.is_empty())
}

/// First category whose keyword appears in the lower-cased text.
fn detect_category(text: &str) -> Option<String> {
    let lower = text.to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| (*category).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    #[test]
    fn test_total_price_is_max_amount() {
        let text = "Handling ₹500, Washing Machine ₹4500, Delivery ₹120";
        let product = extract_product_details(text);
        assert_eq!(product.total_price, Some(Decimal::from(4500)));
    }

    #[test]
    fn test_product_label_beats_name_label() {
        let text = "Name: Sharma Electronics\nProduct: Washing Machine WM-700X";
        let product = extract_product_details(text);
        assert_eq!(product.name.as_deref(), Some("Washing Machine WM-700X"));
    }

    #[test]
    fn test_name_label_fallback() {
        let product = extract_product_details("Name: Espresso Machine");
        assert_eq!(product.name.as_deref(), Some("Espresso Machine"));
    }

    #[test]
    fn test_category_detection() {
        let product = extract_product_details("Invoice for one washing machine");
        assert_eq!(product.category.as_deref(), Some("appliance"));

        let product = extract_product_details("New laptop purchase");
        assert_eq!(product.category.as_deref(), Some("electronics"));

        let product = extract_product_details("Lorem ipsum");
        assert_eq!(product.category, None);
    }

    #[test]
    fn test_quantity_and_unit_price() {
        let text = "Item: Ceiling Fan\nQty: 3\nUnit Price: Rs. 1,450.00";
        let product = extract_product_details(text);

        assert_eq!(product.quantity, Some(3));
        assert_eq!(product.unit_price, Some(Decimal::new(145000, 2)));
    }

    #[test]
    fn test_serial_and_model_carried_over() {
        let text = "Product: Phone\nIMEI: 356789012345678";
        let product = extract_product_details(text);
        // No explicit serial, so the IMEI stands in.
        assert_eq!(product.serial_number.as_deref(), Some("356789012345678"));
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(extract_product_details(""), ProductDetails::default());
    }
}
