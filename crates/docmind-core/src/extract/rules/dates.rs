//! Date extraction and normalization.
//!
//! Extraction returns the raw matched substrings; [`parse_date`]
//! normalizes them downstream with a fixed fallback chain whose order
//! determines the result for ambiguous two-digit day/month inputs.

use chrono::NaiveDate;

use crate::models::config::DateOrder;

use super::patterns::{
    DATE_DAY_MONTH_YEAR, DATE_DMY, DATE_MONTH_DAY_YEAR, DATE_POSITIONAL, DATE_YMD,
};
use super::FieldExtractor;

/// Date field extractor. Produces raw substrings, deduplicated across
/// the four supported shapes in pattern order.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<String> = Vec::new();

        for pattern in [&*DATE_DMY, &*DATE_YMD, &*DATE_MONTH_DAY_YEAR, &*DATE_DAY_MONTH_YEAR] {
            for m in pattern.find_iter(text) {
                let matched = m.as_str().to_string();
                if !results.contains(&matched) {
                    results.push(matched);
                }
            }
        }

        results
    }
}

/// Extract every date-shaped substring from text, deduplicated.
pub fn extract_dates(text: &str) -> Vec<String> {
    DateExtractor::new().extract_all(text)
}

/// Normalize a raw date string to a [`NaiveDate`].
///
/// Fallback chain, in order: ISO `YYYY-MM-DD`, positional day-first
/// (`DD.MM.YYYY` / `DD/MM/YYYY` / `DD-MM-YYYY`), positional
/// month-first, then textual-month formats. Returns `None` on total
/// failure. The same positional shape serves both interpretations, so
/// "03/04/2025" always normalizes as day 3, month 4.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    parse_date_with_order(s, DateOrder::DayFirst)
}

/// [`parse_date`] with an explicit positional interpretation order,
/// for callers that opt into US-style month-first parsing.
pub fn parse_date_with_order(s: &str, order: DateOrder) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }

    if let Some(caps) = DATE_POSITIONAL.captures(s) {
        let first: u32 = caps[1].parse().unwrap_or(0);
        let second: u32 = caps[2].parse().unwrap_or(0);
        let year: i32 = caps[3].parse().unwrap_or(0);

        let attempts = match order {
            // (month, day) per attempt
            DateOrder::DayFirst => [(second, first), (first, second)],
            DateOrder::MonthFirst => [(first, second), (second, first)],
        };

        for (month, day) in attempts {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                return Some(date);
            }
        }
    }

    // Last resort: textual-month and slash/dot ISO-like shapes.
    const TEXTUAL_FORMATS: &[&str] = &[
        "%Y/%m/%d",
        "%Y.%m.%d",
        "%B %d, %Y",
        "%B %d %Y",
        "%d %B %Y",
        "%b %d, %Y",
        "%d %b %Y",
    ];

    for format in TEXTUAL_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    None
}
