//! Value types produced by one extraction pass over a scanned document.
//!
//! Everything here is an immutable value constructed fresh per call;
//! nothing carries identity beyond the call that produced it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Vendor (seller/issuer) details extracted from the document header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorDetails {
    /// Vendor/business name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Postal address (keyword-anchored, ends with a 6-digit PIN).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Contact phone number, separators stripped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Contact email, lower-cased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Indian GST identification number (15 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gstin: Option<String>,

    /// Indian permanent account number (10 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
}

impl VendorDetails {
    /// Number of fields this struct contributes to the confidence ratio.
    pub const FIELD_COUNT: usize = 6;

    /// Count of fields that were actually extracted.
    pub fn filled_field_count(&self) -> usize {
        [
            self.name.is_some(),
            self.address.is_some(),
            self.phone.is_some(),
            self.email.is_some(),
            self.gstin.is_some(),
            self.pan.is_some(),
        ]
        .iter()
        .filter(|f| **f)
        .count()
    }
}

/// Product details extracted from the document body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    /// Product name from a labeled line (product/item/description/name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Model number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Serial number or IMEI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    /// Coarse product category (electronics, appliance, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Quantity from a labeled qty line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    /// Unit price from a labeled rate line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,

    /// Grand total, taken as the largest amount on the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Decimal>,
}

impl ProductDetails {
    /// Number of fields this struct contributes to the confidence ratio.
    pub const FIELD_COUNT: usize = 7;

    /// Count of fields that were actually extracted.
    pub fn filled_field_count(&self) -> usize {
        [
            self.name.is_some(),
            self.model.is_some(),
            self.serial_number.is_some(),
            self.category.is_some(),
            self.quantity.is_some(),
            self.unit_price.is_some(),
            self.total_price.is_some(),
        ]
        .iter()
        .filter(|f| **f)
        .count()
    }
}

/// Dates discovered in the document, stored as the raw matched
/// substrings. Normalization to [`chrono::NaiveDate`] happens
/// downstream via [`crate::extract::rules::dates::parse_date`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateDetails {
    /// Purchase date (or fallback: invoice date, then first date found).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,

    /// Warranty expiry date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_expiry: Option<String>,

    /// Service interval as a raw "<number> <unit>" string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_interval: Option<String>,

    /// Next scheduled service date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_service_due: Option<String>,

    /// Invoice/billing date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<String>,
}

impl DateDetails {
    /// Number of fields this struct contributes to the confidence ratio.
    pub const FIELD_COUNT: usize = 5;

    /// Count of fields that were actually extracted.
    pub fn filled_field_count(&self) -> usize {
        [
            self.purchase_date.is_some(),
            self.warranty_expiry.is_some(),
            self.service_interval.is_some(),
            self.next_service_due.is_some(),
            self.invoice_date.is_some(),
        ]
        .iter()
        .filter(|f| **f)
        .count()
    }
}

/// Supported currencies for monetary amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    /// Indian rupee (Rs./INR/₹). Default when the marker is ambiguous.
    #[default]
    #[serde(rename = "INR")]
    Inr,
    /// US dollar ($/USD).
    #[serde(rename = "USD")]
    Usd,
    /// Euro (€/EUR).
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// Map a matched currency marker to its currency, defaulting to INR.
    pub fn from_marker(marker: &str) -> Self {
        match marker.to_uppercase().as_str() {
            "$" | "USD" => Currency::Usd,
            "€" | "EUR" => Currency::Eur,
            _ => Currency::Inr,
        }
    }
}

/// A monetary amount found on the document. Duplicates are kept; the
/// caller decides which one matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonetaryAmount {
    /// Numeric value with thousands separators removed.
    pub value: Decimal,

    /// Currency inferred from the matched marker.
    pub currency: Currency,

    /// The raw matched substring, untouched.
    pub raw: String,
}

/// Classified document type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Tax invoice.
    Invoice,
    /// Utility or consumer bill.
    Bill,
    /// Warranty/guarantee card.
    WarrantyCard,
    /// Point-of-sale receipt.
    Receipt,
    /// User manual or guide.
    ProductManual,
    /// Service/maintenance record.
    ServiceDocument,
    /// No keyword bucket scored.
    #[default]
    Unknown,
}

impl DocumentType {
    /// Stable snake_case name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Invoice => "invoice",
            DocumentType::Bill => "bill",
            DocumentType::WarrantyCard => "warranty_card",
            DocumentType::Receipt => "receipt",
            DocumentType::ProductManual => "product_manual",
            DocumentType::ServiceDocument => "service_document",
            DocumentType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document classification with a heuristic confidence surrogate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Highest-scoring document type, or `Unknown` at score zero.
    pub document_type: DocumentType,

    /// Heuristic confidence in [0.1, 0.95]. Not a probability.
    pub confidence: f64,
}

impl Default for Classification {
    fn default() -> Self {
        Self {
            document_type: DocumentType::Unknown,
            confidence: 0.1,
        }
    }
}

/// Kind of synthesized reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    /// Warranty is approaching its expiry date.
    WarrantyExpiry,
    /// A scheduled service is coming up.
    ServiceDue,
    /// A bill payment is due.
    PaymentDue,
}

/// Reminder priority, which also determines the notify-before window
/// applied by the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Notify 3 days ahead.
    Low,
    /// Notify 7 days ahead.
    Medium,
    /// Notify 14 days ahead.
    High,
}

impl Priority {
    /// Days before the reminder date that a notification should fire.
    pub fn lead_time_days(&self) -> u32 {
        match self {
            Priority::Low => 3,
            Priority::Medium => 7,
            Priority::High => 14,
        }
    }
}

/// A single reminder suggestion. Synthesized once per extraction and
/// consumed immediately by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderSuggestion {
    /// What the reminder is for.
    pub kind: ReminderKind,

    /// The raw date string the reminder is anchored to.
    pub date: String,

    /// Human-readable description.
    pub description: String,

    /// Priority, input to the notify-before-day mapping.
    pub priority: Priority,
}

/// Complete output of one extraction pass, ready to hand to the
/// persistence layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Vendor details.
    pub vendor: VendorDetails,

    /// Product details.
    pub product: ProductDetails,

    /// Associated dates.
    pub dates: DateDetails,

    /// Every monetary amount found, duplicates included.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amounts: Vec<MonetaryAmount>,

    /// Document type classification.
    pub classification: Classification,

    /// Ordered reminder suggestions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reminders: Vec<ReminderSuggestion>,

    /// Overall extraction confidence: filled fields / total fields.
    pub confidence: f64,
}
