//! Rule-based field extractors for scanned-document transcripts.

pub mod amounts;
pub mod contact;
pub mod dates;
pub mod patterns;
pub mod serial;
pub mod tax_id;

pub use amounts::{extract_amounts, parse_amount, AmountExtractor};
pub use contact::{extract_emails, extract_phone_numbers};
pub use dates::{extract_dates, parse_date, parse_date_with_order, DateExtractor};
pub use serial::{extract_serial_numbers, SerialNumbers};
pub use tax_id::{extract_gstin, extract_pan, validate_gstin, validate_pan};

/// Trait for field extractors.
///
/// Extractors are total: no match yields `None` or an empty vector,
/// never an error.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
