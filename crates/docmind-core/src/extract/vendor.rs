//! Vendor detail extraction.

use crate::models::document::VendorDetails;

use super::rules::contact::{extract_emails, extract_phone_numbers};
use super::rules::patterns::{ADDRESS, LONG_DIGIT_RUN};
use super::rules::tax_id::{extract_gstin, extract_pan};

/// Extract vendor details from a document transcript.
pub fn extract_vendor_details(text: &str) -> VendorDetails {
    VendorDetails {
        name: extract_vendor_name(text),
        address: ADDRESS.find(text).map(|m| m.as_str().trim().to_string()),
        phone: extract_phone_numbers(text).into_iter().next(),
        email: extract_emails(text).into_iter().next(),
        gstin: extract_gstin(text),
        pan: extract_pan(text),
    }
}

/// The vendor name is the first of the first 5 non-empty lines that
/// looks like a business name: 5-99 characters, no run of 5+ digits,
/// and not an "invoice"/"receipt" title line.
fn extract_vendor_name(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(5)
        .find(|line| {
            let len = line.chars().count();
            if !(5..=99).contains(&len) || LONG_DIGIT_RUN.is_match(line) {
                return false;
            }
            let lower = line.to_lowercase();
            !lower.contains("invoice") && !lower.contains("receipt")
        })
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
TAX INVOICE
Sharma Electronics Pvt Ltd
42 MG Road, Indiranagar, Bengaluru 560038
GSTIN: 27AAPFU0939F1ZV
Phone: +91 98765 43210  Email: sales@sharmaelectronics.in";

    #[test]
    fn test_extract_vendor_details() {
        let vendor = extract_vendor_details(SAMPLE);

        assert_eq!(vendor.name.as_deref(), Some("Sharma Electronics Pvt Ltd"));
        assert_eq!(
            vendor.address.as_deref(),
            Some("42 MG Road, Indiranagar, Bengaluru 560038")
        );
        assert_eq!(vendor.phone.as_deref(), Some("+919876543210"));
        assert_eq!(vendor.email.as_deref(), Some("sales@sharmaelectronics.in"));
        assert_eq!(vendor.gstin.as_deref(), Some("27AAPFU0939F1ZV"));
    }

    #[test]
    fn test_name_skips_title_lines() {
        // "TAX INVOICE" is rejected for containing "invoice"; the next
        // qualifying line wins.
        let vendor = extract_vendor_details("TAX INVOICE\nAcme Traders\n");
        assert_eq!(vendor.name.as_deref(), Some("Acme Traders"));
    }

    #[test]
    fn test_name_rejects_digit_runs() {
        let vendor = extract_vendor_details("22334 455667\nAcme Traders\n");
        assert_eq!(vendor.name.as_deref(), Some("Acme Traders"));
    }

    #[test]
    fn test_name_rejects_short_lines() {
        let vendor = extract_vendor_details("Ace\nAcme Traders\n");
        assert_eq!(vendor.name.as_deref(), Some("Acme Traders"));
    }

    #[test]
    fn test_name_only_scans_first_five_lines() {
        let text = "1\n2\n3\n4\n5\nAcme Traders appears too late\n";
        let vendor = extract_vendor_details(text);
        assert_eq!(vendor.name, None);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(extract_vendor_details(""), VendorDetails::default());
    }
}
