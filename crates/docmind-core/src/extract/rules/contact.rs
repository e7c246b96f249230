//! Phone number and email extraction.

use super::patterns::{EMAIL, PHONE_LANDLINE, PHONE_MOBILE};

/// Extract phone numbers. Indian mobile numbers are matched first; the
/// loose landline pattern is a fallback used only when no mobile number
/// is found. Separators are stripped after matching and duplicates
/// dropped, order preserved.
pub fn extract_phone_numbers(text: &str) -> Vec<String> {
    let mut results: Vec<String> = Vec::new();

    for m in PHONE_MOBILE.find_iter(text) {
        let normalized = normalize_phone(m.as_str());
        if !results.contains(&normalized) {
            results.push(normalized);
        }
    }

    if results.is_empty() {
        for m in PHONE_LANDLINE.find_iter(text) {
            let normalized = normalize_phone(m.as_str());
            if !results.contains(&normalized) {
                results.push(normalized);
            }
        }
    }

    results
}

/// Extract email addresses, lower-cased and deduplicated.
pub fn extract_emails(text: &str) -> Vec<String> {
    let mut results: Vec<String> = Vec::new();

    for m in EMAIL.find_iter(text) {
        let email = m.as_str().to_lowercase();
        if !results.contains(&email) {
            results.push(email);
        }
    }

    results
}

fn normalize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_mobile_with_prefix() {
        let phones = extract_phone_numbers("Call us: +91 98765 43210");
        assert_eq!(phones, vec!["+919876543210".to_string()]);
    }

    #[test]
    fn test_extract_mobile_plain() {
        let phones = extract_phone_numbers("Helpline 9876543210");
        assert_eq!(phones, vec!["9876543210".to_string()]);
    }

    #[test]
    fn test_landline_fallback() {
        // No mobile number present, so the landline pattern applies.
        let phones = extract_phone_numbers("Office: 080-22334455");
        assert_eq!(phones, vec!["08022334455".to_string()]);
    }

    #[test]
    fn test_mobile_wins_over_landline() {
        let phones = extract_phone_numbers("Mobile 9876543210, office 080-22334455");
        assert_eq!(phones, vec!["9876543210".to_string()]);
    }

    #[test]
    fn test_extract_emails_lowercased() {
        let emails = extract_emails("Write to Support@Shop.IN or support@shop.in");
        assert_eq!(emails, vec!["support@shop.in".to_string()]);
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_phone_numbers("").is_empty());
        assert!(extract_emails("").is_empty());
    }
}
