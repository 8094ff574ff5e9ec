//! Scan command - extract contact details from a single card.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use cardex_core::{CardExtractor, CardParser, ScanPipeline};

use super::config::load_config;
use super::output::{format_record, OutputFormat};

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Input file (card image, or plain text with --text)
    #[arg(required = true)]
    input: PathBuf,

    /// Treat the input as already recognized text and skip OCR
    #[arg(long)]
    text: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also print the recognized text
    #[arg(long)]
    raw: bool,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Scanning {}", args.input.display());

    let (record, raw_text) = if args.text {
        let text = fs::read_to_string(&args.input)?;
        let parser = CardParser::from_config(&config.extraction);
        (parser.extract(&text), text)
    } else {
        let bytes = fs::read(&args.input)?;
        let pipeline = ScanPipeline::from_config(&config);

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Running OCR...");

        let outcome = pipeline.scan_bytes(&bytes);
        pb.finish_and_clear();

        let outcome = outcome?;
        debug!("OCR took {}ms", outcome.processing_time_ms);
        (outcome.record, outcome.raw_text)
    };

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.raw {
        eprintln!();
        eprintln!("{}", style("Recognized text:").blue());
        eprintln!("{}", raw_text.trim_end());
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
