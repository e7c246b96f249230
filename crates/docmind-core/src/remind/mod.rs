//! Reminder synthesis from associated dates and document type.

use crate::models::document::{
    DateDetails, DocumentType, Priority, ReminderKind, ReminderSuggestion,
};

const WARRANTY_DESCRIPTION: &str =
    "Warranty is about to expire. Review the coverage and raise any claims before the expiry date.";
const SERVICE_DESCRIPTION: &str =
    "Scheduled service is due. Book a service appointment before the due date.";
const PAYMENT_DESCRIPTION: &str = "Bill payment is due.";

/// Derive reminder suggestions from associated dates and the document
/// classification. Rules fire in a fixed order, which is also the
/// output order; there is no priority sort.
///
/// Payment reminders are gated on the `bill` type: an invoice or
/// receipt carrying only an invoice date yields no reminders at all.
pub fn generate_reminder_suggestions(
    dates: &DateDetails,
    document_type: DocumentType,
) -> Vec<ReminderSuggestion> {
    let mut suggestions = Vec::new();

    if let Some(expiry) = &dates.warranty_expiry {
        suggestions.push(ReminderSuggestion {
            kind: ReminderKind::WarrantyExpiry,
            date: expiry.clone(),
            description: WARRANTY_DESCRIPTION.to_string(),
            priority: Priority::High,
        });
    }

    if let Some(due) = &dates.next_service_due {
        suggestions.push(ReminderSuggestion {
            kind: ReminderKind::ServiceDue,
            date: due.clone(),
            description: SERVICE_DESCRIPTION.to_string(),
            priority: Priority::Medium,
        });
    }

    if document_type == DocumentType::Bill {
        if let Some(invoice_date) = &dates.invoice_date {
            suggestions.push(ReminderSuggestion {
                kind: ReminderKind::PaymentDue,
                date: invoice_date.clone(),
                description: PAYMENT_DESCRIPTION.to_string(),
                priority: Priority::High,
            });
        }
    }

    suggestions
}
