//! Data models for extracted documents and pipeline configuration.

pub mod config;
pub mod document;

pub use config::{DateOrder, DocmindConfig, ExtractionConfig};
pub use document::{
    Classification, Currency, DateDetails, DocumentType, ExtractedDocument, MonetaryAmount,
    Priority, ProductDetails, ReminderKind, ReminderSuggestion, VendorDetails,
};
