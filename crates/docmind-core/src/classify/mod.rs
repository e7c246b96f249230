//! Keyword-scored document type classification.
//!
//! A weighted-vote classifier over six typed buckets. Buckets are
//! evaluated in a fixed order and the maximum is tracked with a strict
//! comparison, so a tie keeps the first-encountered bucket.

use crate::extract::rules::patterns::{SERVICE_KEYWORDS, WARRANTY_KEYWORDS};
use crate::models::document::{Classification, DocumentType};

/// Bucket evaluation order. Ties resolve to the earliest entry.
const SCORED_TYPES: [DocumentType; 6] = [
    DocumentType::Invoice,
    DocumentType::Bill,
    DocumentType::WarrantyCard,
    DocumentType::Receipt,
    DocumentType::ProductManual,
    DocumentType::ServiceDocument,
];

/// Classify a document transcript by keyword scoring.
///
/// The confidence is a heuristic surrogate, not a probability:
/// `min(0.95, max_score/total_score + 0.3)`, or 0.1 when nothing
/// scored at all.
pub fn classify(text: &str) -> Classification {
    let lower = text.to_lowercase();

    let mut best = DocumentType::Unknown;
    let mut best_score = 0u32;
    let mut total_score = 0u32;

    for document_type in SCORED_TYPES {
        let score = score_bucket(document_type, &lower);
        total_score += score;
        if score > best_score {
            best_score = score;
            best = document_type;
        }
    }

    if best_score == 0 {
        return Classification::default();
    }

    Classification {
        document_type: best,
        confidence: (f64::from(best_score) / f64::from(total_score) + 0.3).min(0.95),
    }
}

fn score_bucket(document_type: DocumentType, t: &str) -> u32 {
    match document_type {
        DocumentType::Invoice => score_invoice(t),
        DocumentType::Bill => score_bill(t),
        DocumentType::WarrantyCard => score_warranty_card(t),
        DocumentType::Receipt => score_receipt(t),
        DocumentType::ProductManual => score_product_manual(t),
        DocumentType::ServiceDocument => score_service_document(t),
        DocumentType::Unknown => 0,
    }
}

fn score_invoice(t: &str) -> u32 {
    let mut score = 0;
    if t.contains("invoice") {
        score += 3;
    }
    if t.contains("invoice no") {
        score += 2;
    }
    if t.contains("bill to") || t.contains("ship to") {
        score += 2;
    }
    if t.contains("gstin") || t.contains("gst") {
        score += 1;
    }
    score
}

fn score_bill(t: &str) -> u32 {
    let mut score = 0;
    if t.contains("electricity bill") || t.contains("water bill") {
        score += 3;
    }
    if t.contains("consumer no") || t.contains("account no") {
        score += 2;
    }
    if t.contains("due date") || t.contains("payment due") {
        score += 1;
    }
    score
}

fn score_warranty_card(t: &str) -> u32 {
    let mut score = 2 * keyword_hits(t, WARRANTY_KEYWORDS);
    if t.contains("terms and conditions") {
        score += 1;
    }
    score
}

fn score_receipt(t: &str) -> u32 {
    let mut score = 0;
    if t.contains("receipt") {
        score += 3;
    }
    if t.contains("thank you") && t.contains("visit") {
        score += 2;
    }
    if t.contains("cash") || t.contains("card") {
        score += 1;
    }
    score
}

fn score_product_manual(t: &str) -> u32 {
    let mut score = 0;
    if t.contains("user manual") || t.contains("user guide") {
        score += 3;
    }
    if t.contains("instructions") || t.contains("how to") {
        score += 2;
    }
    if t.contains("safety") || t.contains("caution") {
        score += 1;
    }
    score
}

fn score_service_document(t: &str) -> u32 {
    let mut score = 2 * keyword_hits(t, SERVICE_KEYWORDS);
    if t.contains("technician") || t.contains("engineer") {
        score += 1;
    }
    score
}

fn keyword_hits(t: &str, keywords: &[&str]) -> u32 {
    keywords.iter().filter(|k| t.contains(*k)).count() as u32
}
