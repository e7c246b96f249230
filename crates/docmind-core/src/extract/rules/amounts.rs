//! Monetary amount extraction.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::document::{Currency, MonetaryAmount};

use super::patterns::AMOUNT;
use super::FieldExtractor;

/// Amount field extractor. Duplicate amounts are intentionally kept;
/// only the caller decides which occurrence matters.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = MonetaryAmount;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in AMOUNT.captures_iter(text) {
            let marker = &caps[1];
            if let Some(value) = parse_amount(&caps[2]) {
                let full_match = caps.get(0).unwrap();
                results.push(MonetaryAmount {
                    value,
                    currency: Currency::from_marker(marker),
                    raw: full_match.as_str().to_string(),
                });
            }
        }

        results
    }
}

/// Extract all monetary amounts from text, duplicates included.
pub fn extract_amounts(text: &str) -> Vec<MonetaryAmount> {
    AmountExtractor::new().extract_all(text)
}

/// Parse a numeric literal with optional thousands separators
/// (e.g. "1,499.00" or "4500").
pub fn parse_amount(s: &str) -> Option<Decimal> {
    Decimal::from_str(&s.replace(',', "")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("4500"), Decimal::from_str("4500").ok());
        assert_eq!(parse_amount("1,499.00"), Decimal::from_str("1499.00").ok());
        assert_eq!(parse_amount("12,345,678.90"), Decimal::from_str("12345678.90").ok());
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn test_extract_amounts_with_currencies() {
        let text = "Subtotal Rs. 1,200.00, shipping $15.50, discount €5";
        let amounts = extract_amounts(text);

        assert_eq!(amounts.len(), 3);
        assert_eq!(amounts[0].currency, Currency::Inr);
        assert_eq!(amounts[0].value, Decimal::from_str("1200.00").unwrap());
        assert_eq!(amounts[0].raw, "Rs. 1,200.00");
        assert_eq!(amounts[1].currency, Currency::Usd);
        assert_eq!(amounts[2].currency, Currency::Eur);
        assert_eq!(amounts[2].value, Decimal::from(5));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let amounts = extract_amounts("₹500 item, ₹500 item");
        assert_eq!(amounts.len(), 2);
        assert_eq!(amounts[0], amounts[1]);
    }

    #[test]
    fn test_no_marker_no_amount() {
        assert!(extract_amounts("total 4500 with no currency marker").is_empty());
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_amounts("").is_empty());
    }
}
