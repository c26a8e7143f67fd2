//! docingest CLI

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use docingest::{batch_ingest, ingest_with_config, IngestConfig, IngestionRecord};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Output rendering
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON records
    Json,
    /// Short header followed by the extracted content
    Text,
}

#[derive(Parser)]
#[command(name = "docingest")]
#[command(version, about = "Ingest documents into normalized records", long_about = None)]
struct Cli {
    /// Files to ingest
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Configuration file (.toml, .yaml, .yml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Bytes previewed for unrecognized files (overrides the config file)
    #[arg(short = 'p', long)]
    preview_bytes: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let total = cli.paths.len();
    let results = if total == 1 {
        vec![ingest_with_config(&cli.paths[0], &config)]
    } else {
        batch_ingest(cli.paths.clone(), &config).await
    };

    let mut records = Vec::with_capacity(total);
    let mut failures = 0usize;

    for (path, result) in cli.paths.iter().zip(results) {
        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                failures += 1;
                eprintln!("Error: {}: {}", path.display(), e);
            }
        }
    }

    render(&records, cli.format, total)?;

    if failures > 0 {
        anyhow::bail!("{} of {} path(s) could not be ingested", failures, total);
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<IngestConfig> {
    let mut config = match &cli.config {
        Some(path) => IngestConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => IngestConfig::default(),
    };

    if let Some(preview_bytes) = cli.preview_bytes {
        config.binary_preview_bytes = preview_bytes;
    }
    config.validate().context("Invalid configuration")?;

    Ok(config)
}

fn render(records: &[IngestionRecord], format: OutputFormat, total: usize) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let rendered = if total == 1 {
                match records.first() {
                    Some(record) => serde_json::to_string_pretty(record)?,
                    None => return Ok(()),
                }
            } else {
                serde_json::to_string_pretty(records)?
            };
            println!("{}", rendered);
        }
        OutputFormat::Text => {
            for record in records {
                println!(
                    "== {} ({}, {} bytes) ==",
                    record.filename,
                    record.mime_type.as_deref().unwrap_or("unknown"),
                    record.size_bytes
                );
                if !record.notes.is_empty() {
                    println!("notes: {}", record.notes);
                }
                if let Some(content) = &record.extracted_content {
                    println!("{}", content);
                }
                println!();
            }
        }
    }
    Ok(())
}
