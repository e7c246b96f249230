//! Document field extraction module.

pub mod associate;
pub mod confidence;
pub mod product;
pub mod rules;
pub mod vendor;

use std::path::Path;
use std::time::Instant;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::classify::classify;
use crate::error::{ExtractionError, Result};
use crate::models::config::DocmindConfig;
use crate::models::document::{DocumentType, ExtractedDocument};
use crate::remind::generate_reminder_suggestions;

pub use associate::associate_dates;
pub use confidence::calculate_confidence;
pub use product::extract_product_details;
pub use vendor::extract_vendor_details;

/// Result of one analysis pass over a transcript.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Extracted document data.
    pub document: ExtractedDocument,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for transcript analyzers.
pub trait TextAnalyzer {
    /// Analyze a raw OCR transcript.
    fn analyze(&self, text: &str) -> AnalysisResult;
}

/// Rule-based document analyzer.
///
/// Stateless and pure: every call transforms one transcript string
/// into an [`ExtractedDocument`], so concurrent use needs no
/// synchronization.
pub struct DocumentAnalyzer {
    config: DocmindConfig,
}

impl DocumentAnalyzer {
    /// Create an analyzer with default settings.
    pub fn new() -> Self {
        Self {
            config: DocmindConfig::default(),
        }
    }

    /// Create an analyzer with explicit configuration.
    pub fn with_config(config: DocmindConfig) -> Self {
        Self { config }
    }

    /// Normalize a raw date string using the configured positional
    /// interpretation order.
    pub fn normalize_date(&self, raw: &str) -> Option<NaiveDate> {
        rules::dates::parse_date_with_order(raw, self.config.extraction.date_order)
    }

    /// Read a transcript file and analyze it. A file that is not valid
    /// UTF-8 text is rejected as invalid input.
    pub fn analyze_file(&self, path: &Path) -> Result<AnalysisResult> {
        let bytes = std::fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|_| {
            ExtractionError::InvalidInput(format!(
                "{} is not valid UTF-8 text",
                path.display()
            ))
        })?;
        Ok(self.analyze(&text))
    }
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer for DocumentAnalyzer {
    fn analyze(&self, text: &str) -> AnalysisResult {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("Analyzing transcript of {} characters", text.len());

        let vendor = extract_vendor_details(text);
        let product = extract_product_details(text);
        let amounts = rules::amounts::extract_amounts(text);
        let dates = associate_dates(text);
        let classification = classify(text);
        let reminders = generate_reminder_suggestions(&dates, classification.document_type);
        let confidence = calculate_confidence(&vendor, &product, &dates);

        if self.config.extraction.collect_warnings {
            if vendor.name.is_none() {
                warnings.push("Could not extract vendor name".to_string());
            }
            if dates.filled_field_count() == 0 {
                warnings.push("No dates found in document".to_string());
            }
            if amounts.is_empty() {
                warnings.push("No monetary amounts found".to_string());
            }
            if classification.document_type == DocumentType::Unknown {
                warnings.push("Document type could not be classified".to_string());
            }
        }

        debug!(
            "Classified as {} (confidence {:.2}), {} reminder(s), extraction confidence {:.2}",
            classification.document_type,
            classification.confidence,
            reminders.len(),
            confidence
        );

        AnalysisResult {
            document: ExtractedDocument {
                vendor,
                product,
                dates,
                amounts,
                classification,
                reminders,
                confidence,
            },
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
