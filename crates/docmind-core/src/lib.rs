//! Core library for document reminder extraction.
//!
//! This crate provides:
//! - Pattern-based field extraction from raw OCR transcripts
//!   (vendor, product, dates, amounts, tax IDs, serial numbers)
//! - Keyword-scored document type classification
//! - Date-context association and reminder synthesis
//! - An aggregate extraction confidence score
//!
//! The OCR engine producing the transcript is an external
//! collaborator; everything here starts from a plain string and is a
//! pure, stateless transformation of it.

pub mod classify;
pub mod error;
pub mod extract;
pub mod models;
pub mod remind;

pub use classify::classify;
pub use error::{DocmindError, ExtractionError, Result};
pub use extract::rules::dates::{extract_dates, parse_date, parse_date_with_order};
pub use extract::{
    associate_dates, calculate_confidence, extract_product_details, extract_vendor_details,
    AnalysisResult, DocumentAnalyzer, TextAnalyzer,
};
pub use models::config::{DateOrder, DocmindConfig, ExtractionConfig};
pub use models::document::{
    Classification, Currency, DateDetails, DocumentType, ExtractedDocument, MonetaryAmount,
    Priority, ProductDetails, ReminderKind, ReminderSuggestion, VendorDetails,
};
pub use remind::generate_reminder_suggestions;
