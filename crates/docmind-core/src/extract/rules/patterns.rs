//! Common regex patterns and keyword tables for scanned-document extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Date patterns
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{4})\b"
    ).unwrap();

    pub static ref DATE_YMD: Regex = Regex::new(
        r"\b(\d{4})[/\-.](\d{1,2})[/\-.](\d{1,2})\b"
    ).unwrap();

    // "March 5, 2024" (comma optional)
    pub static ref DATE_MONTH_DAY_YEAR: Regex = Regex::new(
        r"(?i)\b(january|february|march|april|may|june|july|august|september|october|november|december)\s+(\d{1,2}),?\s+(\d{4})\b"
    ).unwrap();

    // "5 March 2024"
    pub static ref DATE_DAY_MONTH_YEAR: Regex = Regex::new(
        r"(?i)\b(\d{1,2})\s+(january|february|march|april|may|june|july|august|september|october|november|december)\s+(\d{4})\b"
    ).unwrap();

    // Positional date in isolation, for the normalization fallback chain.
    pub static ref DATE_POSITIONAL: Regex = Regex::new(
        r"^(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{4})$"
    ).unwrap();

    // Phone patterns: Indian mobile, then a loose landline fallback.
    // Matches may contain a separator; normalization strips it afterwards.
    pub static ref PHONE_MOBILE: Regex = Regex::new(
        r"(?:\+91[\s-]?)?[6-9]\d{4}[\s-]?\d{5}"
    ).unwrap();

    pub static ref PHONE_LANDLINE: Regex = Regex::new(
        r"\b(?:0\d{2,4}[\s-]?)?\d{6,8}\b"
    ).unwrap();

    // Email pattern
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Indian tax identifiers
    pub static ref GSTIN: Regex = Regex::new(
        r"\b\d{2}[A-Z]{5}\d{4}[A-Z][A-Z0-9]Z[A-Z0-9]\b"
    ).unwrap();

    pub static ref PAN: Regex = Regex::new(
        r"\b[A-Z]{5}\d{4}[A-Z]\b"
    ).unwrap();

    // Currency amounts: marker followed by a numeric literal with
    // optional thousands separators and two decimal places.
    pub static ref AMOUNT: Regex = Regex::new(
        r"(?i)(Rs\.?|INR|₹|\$|USD|€|EUR)\s*(\d+(?:,\d{3})*(?:\.\d{2})?)"
    ).unwrap();

    // Serial / model / IMEI, keyword-anchored.
    pub static ref SERIAL_NO: Regex = Regex::new(
        r"(?i)\b(?:serial\s*no|s/n|sn)\b[:.]?\s*([A-Za-z0-9-]+)"
    ).unwrap();

    pub static ref MODEL_NO: Regex = Regex::new(
        r"(?i)\b(?:model\s*no|m/n)\b[:.]?\s*([A-Za-z0-9-]+)"
    ).unwrap();

    pub static ref IMEI: Regex = Regex::new(
        r"(?i)\bimei\b[:.]?\s*(\d{15})\b"
    ).unwrap();

    // Address: address-type keyword followed eventually by a 6-digit PIN.
    pub static ref ADDRESS: Regex = Regex::new(
        r"(?i)[^\n]{0,60}\b(?:road|street|lane|nagar|colony|sector)\b(?s:.{0,120}?)\b\d{6}\b"
    ).unwrap();

    // Product name labels, tried in this order.
    pub static ref PRODUCT_LABEL: Regex = Regex::new(
        r"(?i)(product|item|description)\s*[:.]?\s*(.+)"
    ).unwrap();

    pub static ref NAME_LABEL: Regex = Regex::new(
        r"(?i)(name)\s*[:.]?\s*(.+)"
    ).unwrap();

    // Quantity and unit price labels.
    pub static ref QUANTITY: Regex = Regex::new(
        r"(?i)\b(?:qty|quantity)\s*[:.]?\s*(\d+)\b"
    ).unwrap();

    pub static ref UNIT_PRICE: Regex = Regex::new(
        r"(?i)\b(?:unit\s+price|rate|price\s+per\s+unit)\s*[:.]?\s*(?:Rs\.?|INR|₹|\$|USD|€|EUR)?\s*(\d+(?:,\d{3})*(?:\.\d{2})?)"
    ).unwrap();

    // Service interval: "<number> <unit>" on a service-keyword line.
    pub static ref SERVICE_INTERVAL: Regex = Regex::new(
        r"(?i)(\d+)\s*(month|year|km|mile)"
    ).unwrap();

    // Run of 5+ digits, used to reject header lines as vendor names.
    pub static ref LONG_DIGIT_RUN: Regex = Regex::new(
        r"\d{5}"
    ).unwrap();
}

/// Warranty signal keywords. Each hit scores +2 for `warranty_card`.
pub const WARRANTY_KEYWORDS: &[&str] = &[
    "warranty",
    "guarantee",
    "valid until",
    "expires",
    "expiry",
    "coverage",
    "protection plan",
    "extended warranty",
];

/// Service signal keywords. Each hit scores +2 for `service_document`
/// and gates the service-interval pass.
pub const SERVICE_KEYWORDS: &[&str] = &[
    "service",
    "maintenance",
    "next service",
    "service due",
    "service interval",
    "annual service",
    "periodic",
];

/// Product category keywords. First category with a hit wins.
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "electronics",
        &[
            "tv",
            "television",
            "laptop",
            "mobile",
            "phone",
            "tablet",
            "camera",
            "headphone",
            "speaker",
        ],
    ),
    (
        "appliance",
        &[
            "refrigerator",
            "fridge",
            "washing machine",
            "microwave",
            "air conditioner",
            "water purifier",
            "geyser",
            "dishwasher",
        ],
    ),
    ("vehicle", &["vehicle", "motorcycle", "scooter", "bike"]),
    ("furniture", &["sofa", "wardrobe", "mattress", "dining table"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gstin_pattern_shape() {
        assert!(GSTIN.is_match("GSTIN: 27AAPFU0939F1ZV"));
        // 14th character must be Z.
        assert!(!GSTIN.is_match("27AAPFU0939F1XV"));
        // Too short.
        assert!(!GSTIN.is_match("27AAPFU0939F"));
    }

    #[test]
    fn test_amount_pattern_markers() {
        for sample in ["Rs. 1,499.00", "INR 500", "₹4500", "$99.95", "€20", "USD 1,000"] {
            assert!(AMOUNT.is_match(sample), "no match for {sample}");
        }
        // A bare number without a marker is not an amount.
        assert!(!AMOUNT.is_match("total 4500"));
    }

    #[test]
    fn test_serial_keyword_anchoring() {
        let caps = SERIAL_NO.captures("Serial No: SN-4412-A").unwrap();
        assert_eq!(&caps[1], "SN-4412-A");
        // "sn" inside an ordinary word must not anchor a serial.
        assert!(!SERIAL_NO.is_match("snacks on the counter"));
    }

    #[test]
    fn test_address_requires_pin() {
        let text = "12 MG Road, Indiranagar\nBengaluru 560038";
        assert!(ADDRESS.is_match(text));
        assert!(!ADDRESS.is_match("12 MG Road, Indiranagar"));
    }
}
