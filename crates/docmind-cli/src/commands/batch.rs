//! Batch command - process many transcript files at once.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use docmind_core::{AnalysisResult, DocumentAnalyzer};

use super::extract::{self, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (e.g. "scans/*.txt")
    #[arg(required = true)]
    pub input: String,

    /// Output directory for per-file results
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Output format for per-file results
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Write a summary CSV alongside the per-file results
    #[arg(long)]
    pub summary: bool,

    /// Keep going when a file fails instead of aborting
    #[arg(long)]
    pub continue_on_error: bool,
}

struct FileOutcome {
    path: PathBuf,
    result: Result<AnalysisResult, String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = extract::load_config(config_path)?;
    let files = collect_files(&args.input)?;

    if files.is_empty() {
        anyhow::bail!("No input files matched: {}", args.input);
    }

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    info!("Processing {} file(s)", files.len());

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let analyzer = DocumentAnalyzer::with_config(config);
    let mut outcomes = Vec::with_capacity(files.len());

    for path in files {
        progress.set_message(
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );

        let result = process_file(&analyzer, &path, &args);
        if let Err(message) = &result {
            if !args.continue_on_error {
                progress.abandon();
                anyhow::bail!("{}: {}", path.display(), message);
            }
            warn!("Skipping {}: {}", path.display(), message);
        }

        outcomes.push(FileOutcome { path, result });
        progress.inc(1);
    }

    progress.finish_with_message("done");

    if args.summary {
        write_summary(&outcomes, args.output_dir.as_deref())?;
    }

    let succeeded = outcomes.iter().filter(|o| o.result.is_ok()).count();
    let failed = outcomes.len() - succeeded;
    println!(
        "{} {} file(s) processed, {} failed",
        style("✓").green(),
        succeeded,
        failed
    );

    Ok(())
}

/// Expand a glob pattern (or literal path) into a sorted file list.
fn collect_files(pattern: &str) -> anyhow::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = glob::glob(pattern)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    Ok(files)
}

fn process_file(
    analyzer: &DocumentAnalyzer,
    path: &PathBuf,
    args: &BatchArgs,
) -> Result<AnalysisResult, String> {
    let result = analyzer.analyze_file(path).map_err(|e| e.to_string())?;

    if let Some(dir) = &args.output_dir {
        let rendered =
            extract::render(analyzer, &result, args.format).map_err(|e| e.to_string())?;
        let extension = match args.format {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        };
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        let out_path = dir.join(format!("{stem}.{extension}"));
        fs::write(&out_path, rendered).map_err(|e| e.to_string())?;
    }

    Ok(result)
}

/// Write one summary row per successful file, `summary.csv` in the
/// output directory (or the working directory when none was given).
fn write_summary(outcomes: &[FileOutcome], output_dir: Option<&std::path::Path>) -> anyhow::Result<()> {
    let summary_path = output_dir
        .map(|d| d.join("summary.csv"))
        .unwrap_or_else(|| PathBuf::from("summary.csv"));

    let mut writer = csv::Writer::from_path(&summary_path)?;

    let mut headers = vec!["file"];
    headers.extend(extract::CSV_HEADERS);
    writer.write_record(&headers)?;

    for outcome in outcomes {
        let Ok(result) = &outcome.result else { continue };
        let mut record = vec![outcome.path.display().to_string()];
        record.extend(extract::csv_record(result));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    println!("Summary written to {}", summary_path.display());
    Ok(())
}
