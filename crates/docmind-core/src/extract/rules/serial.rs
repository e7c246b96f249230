//! Serial, model and IMEI number extraction.

use super::patterns::{IMEI, MODEL_NO, SERIAL_NO};

/// Keyword-anchored identifiers found on a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SerialNumbers {
    /// Serial number ("Serial No" / "S/N" / "SN").
    pub serial: Option<String>,

    /// Model number ("Model No" / "M/N").
    pub model: Option<String>,

    /// 15-digit IMEI.
    pub imei: Option<String>,
}

/// Extract serial/model/IMEI identifiers; first match wins per kind.
pub fn extract_serial_numbers(text: &str) -> SerialNumbers {
    SerialNumbers {
        serial: SERIAL_NO.captures(text).map(|caps| caps[1].to_string()),
        model: MODEL_NO.captures(text).map(|caps| caps[1].to_string()),
        imei: IMEI.captures(text).map(|caps| caps[1].to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_all_kinds() {
        let text = "Model No: WM-700X\nSerial No. SR-2024-0042\nIMEI: 356789012345678";
        let ids = extract_serial_numbers(text);

        assert_eq!(ids.model.as_deref(), Some("WM-700X"));
        assert_eq!(ids.serial.as_deref(), Some("SR-2024-0042"));
        assert_eq!(ids.imei.as_deref(), Some("356789012345678"));
    }

    #[test]
    fn test_short_forms() {
        let ids = extract_serial_numbers("S/N: AB123 M/N: XC-9");
        assert_eq!(ids.serial.as_deref(), Some("AB123"));
        assert_eq!(ids.model.as_deref(), Some("XC-9"));
    }

    #[test]
    fn test_imei_length_is_strict() {
        // 14 digits is not an IMEI.
        let ids = extract_serial_numbers("IMEI: 35678901234567");
        assert_eq!(ids.imei, None);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(extract_serial_numbers(""), SerialNumbers::default());
    }
}
