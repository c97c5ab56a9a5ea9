//! Process command - extract data from a single document text file.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use console::style;
use tracing::info;

use inkoop_core::order::{ExtractionPipeline, ExtractionResult};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input text file (raw document text from PDF/OCR conversion)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Show extraction confidence and timing
    #[arg(long)]
    pub show_confidence: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read input file {}", args.input.display()))?;

    info!("processing file: {}", args.input.display());

    let pipeline = ExtractionPipeline::from_config(&config.extraction);
    let result = pipeline.process(&text);

    let output = format_result(&result, args.format, config.output.pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("\u{2713}").green(),
            output_path.display()
        );
    } else {
        println!("{output}");
    }

    if !result.warnings.is_empty() {
        eprintln!("{}", style("Warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {warning}");
        }
    }

    if args.show_confidence {
        println!();
        println!(
            "{} Extraction confidence: {:.0}%",
            style("\u{2139}").blue(),
            result.confidence_score * 100.0
        );
        if let Some(time_ms) = result.processing_time_ms {
            println!("{} Processing time: {}ms", style("\u{2139}").blue(), time_ms);
        }
    }

    Ok(())
}

pub fn format_result(
    result: &ExtractionResult,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "order_number",
        "date",
        "supplier",
        "item_count",
        "subtotal",
        "vat_rate",
        "vat_amount",
        "total",
        "totals_match",
        "confidence_score",
    ])?;

    let order = &result.order;
    wtr.write_record([
        order.order_number.clone().unwrap_or_default(),
        order.date.clone().unwrap_or_default(),
        order.supplier.clone().unwrap_or_default(),
        order.items.len().to_string(),
        order.subtotal.map(|d| d.to_string()).unwrap_or_default(),
        order.vat_rate.map(|d| d.to_string()).unwrap_or_default(),
        order.vat_amount.map(|d| d.to_string()).unwrap_or_default(),
        order.total.map(|d| d.to_string()).unwrap_or_default(),
        result.validation.totals_match.to_string(),
        format!("{:.2}", result.confidence_score),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ExtractionResult) -> String {
    let order = &result.order;
    let mut output = String::new();

    output.push_str(&format!(
        "Order:    {}\n",
        order.order_number.as_deref().unwrap_or("(not found)")
    ));
    output.push_str(&format!(
        "Date:     {}\n",
        order.date.as_deref().unwrap_or("(not found)")
    ));
    output.push_str(&format!(
        "Supplier: {}\n",
        order.supplier.as_deref().unwrap_or("(not found)")
    ));

    if !order.items.is_empty() {
        output.push_str("\nItems:\n");
        for item in &order.items {
            output.push_str(&format!(
                "  {} x {} @ {} = {}\n",
                item.quantity, item.product, item.unit_price, item.total
            ));
        }
    }

    output.push_str("\nTotals:\n");
    if let Some(subtotal) = order.subtotal {
        output.push_str(&format!("  Subtotal: {subtotal}\n"));
    }
    if let (Some(rate), Some(amount)) = (order.vat_rate, order.vat_amount) {
        output.push_str(&format!("  VAT ({}%): {amount}\n", rate * rust_decimal::Decimal::ONE_HUNDRED));
    }
    if let Some(total) = order.total {
        output.push_str(&format!("  Total:    {total}\n"));
    }

    if let Some(address) = &order.delivery_address {
        output.push_str(&format!("\nDeliver to: {}, {}\n", address.company, address.address));
    }

    output.push_str(&format!("\nConfidence: {:.2}\n", result.confidence_score));

    output
}
