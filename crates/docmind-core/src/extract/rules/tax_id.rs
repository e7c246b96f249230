//! Indian tax identifier (GSTIN / PAN) extraction.

use super::patterns::{GSTIN, PAN};
use super::FieldExtractor;

/// GSTIN field extractor.
pub struct GstinExtractor;

impl GstinExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GstinExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for GstinExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<String> = Vec::new();

        for m in GSTIN.find_iter(text) {
            let gstin = m.as_str().to_string();
            if !results.contains(&gstin) {
                results.push(gstin);
            }
        }

        results
    }
}

/// PAN field extractor.
pub struct PanExtractor;

impl PanExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PanExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PanExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<String> = Vec::new();

        for m in PAN.find_iter(text) {
            let pan = m.as_str().to_string();
            if !results.contains(&pan) {
                results.push(pan);
            }
        }

        results
    }
}

/// Extract the first GSTIN from text.
pub fn extract_gstin(text: &str) -> Option<String> {
    GstinExtractor::new().extract(text)
}

/// Extract the first PAN from text.
pub fn extract_pan(text: &str) -> Option<String> {
    PanExtractor::new().extract(text)
}

/// Structural GSTIN validation: 15 characters with the fixed layout
/// `NN AAAAA NNNN A X Z X`. No checksum arithmetic is applied.
pub fn validate_gstin(gstin: &str) -> bool {
    gstin.len() == 15
        && GSTIN
            .find(gstin)
            .map(|m| m.start() == 0 && m.end() == gstin.len())
            .unwrap_or(false)
}

/// Structural PAN validation: `AAAAA NNNN A`, 10 characters.
pub fn validate_pan(pan: &str) -> bool {
    pan.len() == 10
        && PAN
            .find(pan)
            .map(|m| m.start() == 0 && m.end() == pan.len())
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_gstin_round_trip() {
        let text = "Acme Traders\nGSTIN: 27AAPFU0939F1ZV\nMumbai";
        assert_eq!(extract_gstin(text), Some("27AAPFU0939F1ZV".to_string()));
    }

    #[test]
    fn test_extract_pan() {
        let text = "PAN: AAPFU0939F quoted on the invoice";
        assert_eq!(extract_pan(text), Some("AAPFU0939F".to_string()));
    }

    #[test]
    fn test_pan_not_lifted_from_gstin() {
        // The PAN shape occurs inside every GSTIN but has no word
        // boundary there, so a lone GSTIN yields no PAN.
        let text = "GSTIN 27AAPFU0939F1ZV";
        assert_eq!(extract_pan(text), None);
    }

    #[test]
    fn test_validate_gstin() {
        assert!(validate_gstin("27AAPFU0939F1ZV"));
        assert!(!validate_gstin("27AAPFU0939F1XV")); // 14th char not Z
        assert!(!validate_gstin("27AAPFU0939F1Z")); // too short
        assert!(!validate_gstin(""));
    }

    #[test]
    fn test_validate_pan() {
        assert!(validate_pan("AAPFU0939F"));
        assert!(!validate_pan("AAPFU0939"));
        assert!(!validate_pan("1APFU0939F"));
    }

    #[test]
    fn test_extract_all_deduplicates() {
        let text = "27AAPFU0939F1ZV and again 27AAPFU0939F1ZV";
        assert_eq!(GstinExtractor::new().extract_all(text).len(), 1);
    }
}
