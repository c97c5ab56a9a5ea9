//! Batch processing command for multiple document text files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use tracing::{debug, warn};

use inkoop_core::order::{ExtractionPipeline, ExtractionResult};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (e.g. "documents/*.txt")
    #[arg(required = true)]
    pub input: String,

    /// Output directory for per-file results
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: super::process::OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    pub summary: bool,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    result: Option<ExtractionResult>,
    error: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!("{} Found {} files to process", style("\u{2139}").blue(), files.len());

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pipeline = ExtractionPipeline::from_config(&config.extraction);
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        // Extraction is total; only reading the file can fail.
        match fs::read_to_string(&path) {
            Ok(text) => {
                let result = pipeline.process(&text);
                results.push(FileResult {
                    path,
                    result: Some(result),
                    error: None,
                });
            }
            Err(e) => {
                warn!("failed to read {}: {}", path.display(), e);
                results.push(FileResult {
                    path,
                    result: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    // Write per-file outputs
    if let Some(ref output_dir) = args.output_dir {
        for file in results.iter().filter(|f| f.result.is_some()) {
            let result = file.result.as_ref().unwrap();
            let stem = file
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("order");

            let extension = match args.format {
                super::process::OutputFormat::Json => "json",
                super::process::OutputFormat::Csv => "csv",
                super::process::OutputFormat::Text => "txt",
            };

            let output_path = output_dir.join(format!("{stem}.{extension}"));
            let content =
                super::process::format_result(result, args.format, config.output.pretty)?;
            fs::write(&output_path, content)?;
            debug!("wrote output to {}", output_path.display());
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|dir| dir.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("\u{2713}").green(),
            summary_path.display()
        );
    }

    let processed = results.iter().filter(|f| f.result.is_some()).count();
    let failed = results.len() - processed;
    let needs_review: Vec<&FileResult> = results
        .iter()
        .filter(|f| {
            f.result
                .as_ref()
                .is_some_and(|r| r.confidence_score < config.extraction.min_confidence)
        })
        .collect();

    println!();
    println!(
        "{} Processed {} files in {:?} ({} failed)",
        style("\u{2713}").green(),
        processed,
        start.elapsed(),
        failed
    );

    if !needs_review.is_empty() {
        println!();
        println!("{}", style("Low confidence, needs review:").yellow());
        for file in needs_review {
            let score = file.result.as_ref().map(|r| r.confidence_score).unwrap_or(0.0);
            println!("  - {} ({score:.2})", file.path.display());
        }
    }

    Ok(())
}

fn write_summary(path: &PathBuf, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "order_number",
        "date",
        "supplier",
        "item_count",
        "total",
        "totals_match",
        "confidence_score",
        "error",
    ])?;

    for file in results {
        let filename = file
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        if let Some(result) = &file.result {
            let order = &result.order;
            wtr.write_record([
                filename.to_string(),
                "success".to_string(),
                order.order_number.clone().unwrap_or_default(),
                order.date.clone().unwrap_or_default(),
                order.supplier.clone().unwrap_or_default(),
                order.items.len().to_string(),
                order.total.map(|d| d.to_string()).unwrap_or_default(),
                result.validation.totals_match.to_string(),
                format!("{:.2}", result.confidence_score),
                String::new(),
            ])?;
        } else {
            wtr.write_record([
                filename.to_string(),
                "error".to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                file.error.clone().unwrap_or_default(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
