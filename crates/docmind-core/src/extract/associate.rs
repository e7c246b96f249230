//! Date-context association.
//!
//! Walks the transcript line by line and assigns the first date on
//! each line to a role based on keywords found on the same line. Later
//! lines overwrite earlier assignments for the same role.

use crate::models::document::DateDetails;

use super::rules::dates::extract_dates;
use super::rules::patterns::{SERVICE_INTERVAL, SERVICE_KEYWORDS};

/// Associate dates found in the transcript with their semantic roles.
pub fn associate_dates(text: &str) -> DateDetails {
    let mut dates = DateDetails::default();

    for line in text.lines() {
        let Some(date) = extract_dates(line).into_iter().next() else {
            continue;
        };
        let lower = line.to_lowercase();

        if lower.contains("purchase") || lower.contains("bought") {
            dates.purchase_date = Some(date);
        } else if lower.contains("warranty")
            && (lower.contains("expir") || lower.contains("until") || lower.contains("valid"))
        {
            dates.warranty_expiry = Some(date);
        } else if lower.contains("next service") || lower.contains("service due") {
            dates.next_service_due = Some(date);
        } else if lower.contains("invoice date") || lower.contains("date of invoice") {
            dates.invoice_date = Some(date);
        }
    }

    // Independent pass: a service interval like "6 months" on any line
    // carrying a service keyword.
    for line in text.lines() {
        let lower = line.to_lowercase();
        if SERVICE_KEYWORDS.iter().any(|k| lower.contains(k)) {
            if let Some(caps) = SERVICE_INTERVAL.captures(line) {
                dates.service_interval = Some(format!("{} {}", &caps[1], &caps[2]));
            }
        }
    }

    if dates.purchase_date.is_none() {
        dates.purchase_date = dates
            .invoice_date
            .clone()
            .or_else(|| extract_dates(text).into_iter().next());
    }

    dates
}
