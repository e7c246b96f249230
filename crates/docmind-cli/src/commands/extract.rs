//! Extract command - process a single transcript file.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::{debug, info};

use docmind_core::{AnalysisResult, DocmindConfig, DocumentAnalyzer, ReminderKind};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input transcript file (plain text from an OCR engine)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Print extraction confidence and warnings to stderr
    #[arg(long)]
    pub show_confidence: bool,
}

/// Supported output formats.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Structured JSON
    Json,
    /// One CSV row of key fields
    Csv,
    /// Human-readable summary
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing transcript: {}", args.input.display());

    let analyzer = DocumentAnalyzer::with_config(config);
    let result = analyzer.analyze_file(&args.input)?;

    debug!("Analysis took {}ms", result.processing_time_ms);

    let output = render(&analyzer, &result, args.format)?;

    match &args.output {
        Some(path) => {
            fs::write(path, output)?;
            println!("{} Output written to {}", style("✓").green(), path.display());
        }
        None => println!("{output}"),
    }

    if args.show_confidence {
        eprintln!(
            "Extraction confidence: {:.2} ({} classified at {:.2})",
            result.document.confidence,
            result.document.classification.document_type,
            result.document.classification.confidence,
        );
        for warning in &result.warnings {
            eprintln!("{} {}", style("warning:").yellow(), warning);
        }
    }

    Ok(())
}

/// Load configuration from the given path, or fall back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<DocmindConfig> {
    match config_path {
        Some(path) => {
            let config = DocmindConfig::from_file(Path::new(path))?;
            info!("Loaded config from {path}");
            Ok(config)
        }
        None => Ok(DocmindConfig::default()),
    }
}

/// Render an analysis result in the requested format.
pub fn render(
    analyzer: &DocumentAnalyzer,
    result: &AnalysisResult,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result.document)?),
        OutputFormat::Csv => render_csv(result),
        OutputFormat::Text => Ok(render_text(analyzer, result)),
    }
}

/// Fields shared by the single-file CSV output and the batch summary.
pub const CSV_HEADERS: [&str; 9] = [
    "vendor_name",
    "document_type",
    "classification_confidence",
    "purchase_date",
    "warranty_expiry",
    "invoice_date",
    "total_price",
    "reminders",
    "confidence",
];

/// One CSV record for a result. Missing fields become empty cells.
pub fn csv_record(result: &AnalysisResult) -> Vec<String> {
    let doc = &result.document;
    vec![
        doc.vendor.name.clone().unwrap_or_default(),
        doc.classification.document_type.to_string(),
        format!("{:.2}", doc.classification.confidence),
        doc.dates.purchase_date.clone().unwrap_or_default(),
        doc.dates.warranty_expiry.clone().unwrap_or_default(),
        doc.dates.invoice_date.clone().unwrap_or_default(),
        doc.product
            .total_price
            .map(|p| p.to_string())
            .unwrap_or_default(),
        doc.reminders.len().to_string(),
        format!("{:.2}", doc.confidence),
    ]
}

fn render_csv(result: &AnalysisResult) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;
    writer.write_record(csv_record(result))?;
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("csv buffer error: {e}"))?;
    Ok(String::from_utf8(bytes)?)
}

fn render_text(analyzer: &DocumentAnalyzer, result: &AnalysisResult) -> String {
    let doc = &result.document;
    let mut out = String::new();

    out.push_str(&format!(
        "Document type: {} (confidence {:.2})\n",
        doc.classification.document_type, doc.classification.confidence
    ));

    out.push_str("\nVendor:\n");
    push_field(&mut out, "Name", doc.vendor.name.as_deref());
    push_field(&mut out, "Address", doc.vendor.address.as_deref());
    push_field(&mut out, "Phone", doc.vendor.phone.as_deref());
    push_field(&mut out, "Email", doc.vendor.email.as_deref());
    push_field(&mut out, "GSTIN", doc.vendor.gstin.as_deref());
    push_field(&mut out, "PAN", doc.vendor.pan.as_deref());

    out.push_str("\nProduct:\n");
    push_field(&mut out, "Name", doc.product.name.as_deref());
    push_field(&mut out, "Model", doc.product.model.as_deref());
    push_field(&mut out, "Serial", doc.product.serial_number.as_deref());
    push_field(&mut out, "Category", doc.product.category.as_deref());
    if let Some(price) = doc.product.total_price {
        out.push_str(&format!("  Total:    {price}\n"));
    }

    out.push_str("\nDates:\n");
    push_date(&mut out, analyzer, "Purchase", doc.dates.purchase_date.as_deref());
    push_date(&mut out, analyzer, "Warranty expiry", doc.dates.warranty_expiry.as_deref());
    push_date(&mut out, analyzer, "Next service", doc.dates.next_service_due.as_deref());
    push_date(&mut out, analyzer, "Invoice", doc.dates.invoice_date.as_deref());
    push_field(&mut out, "Service interval", doc.dates.service_interval.as_deref());

    if doc.reminders.is_empty() {
        out.push_str("\nNo reminders suggested.\n");
    } else {
        out.push_str("\nReminders:\n");
        for reminder in &doc.reminders {
            let kind = match reminder.kind {
                ReminderKind::WarrantyExpiry => "warranty expiry",
                ReminderKind::ServiceDue => "service due",
                ReminderKind::PaymentDue => "payment due",
            };
            out.push_str(&format!(
                "  {} on {} ({:?}, notify {} days ahead)\n",
                kind,
                reminder.date,
                reminder.priority,
                reminder.priority.lead_time_days()
            ));
        }
    }

    out.push_str(&format!("\nExtraction confidence: {:.2}\n", doc.confidence));
    out
}

fn push_field(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        out.push_str(&format!("  {label}: {value}\n"));
    }
}

/// Raw date plus its normalized ISO form when it parses.
fn push_date(out: &mut String, analyzer: &DocumentAnalyzer, label: &str, value: Option<&str>) {
    if let Some(raw) = value {
        match analyzer.normalize_date(raw) {
            Some(date) => out.push_str(&format!("  {label}: {raw} ({date})\n")),
            None => out.push_str(&format!("  {label}: {raw}\n")),
        }
    }
}
