//! CLI Adapter.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, ConfigOverrides, SummarizeOptions, resolve_config};
use crate::domain::{AppError, SummarizerBackend};

#[derive(Parser)]
#[command(name = "wosum")]
#[command(version)]
#[command(
    about = "Summarize maintenance work orders in batches with a local language model",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a work order CSV batch by batch, then into a master summary
    #[clap(visible_alias = "s")]
    Summarize {
        /// Work order CSV file
        #[arg(long, alias = "csv_file")]
        csv_file: PathBuf,
        /// Rows per batch
        #[arg(long, alias = "chunk_size")]
        chunk_size: Option<usize>,
        /// Sampling temperature passed to the model
        #[arg(long)]
        temperature: Option<f64>,
        /// Model name
        #[arg(long)]
        model: Option<String>,
        /// TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Directory the artifacts are written under
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Summarizer transport (command, http)
        #[arg(long)]
        backend: Option<SummarizerBackend>,
        /// Print every batch prompt without calling the model or writing files
        #[arg(long)]
        prompt_preview: bool,
    },
    /// Write only the per-asset failure statistics
    Stats {
        /// Work order CSV file
        #[arg(long, alias = "csv_file")]
        csv_file: PathBuf,
        /// TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Directory the artifact is written under
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Summarize {
            csv_file,
            chunk_size,
            temperature,
            model,
            config,
            output_dir,
            backend,
            prompt_preview,
        } => {
            let overrides =
                ConfigOverrides { chunk_size, temperature, model, backend, output_dir };
            run_summarize(csv_file, config, overrides, prompt_preview)
        }
        Commands::Stats { csv_file, config, output_dir } => {
            run_stats(csv_file, config, ConfigOverrides { output_dir, ..Default::default() })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_summarize(
    csv_file: PathBuf,
    config: Option<PathBuf>,
    overrides: ConfigOverrides,
    prompt_preview: bool,
) -> Result<(), AppError> {
    let config = resolve_config(config.as_deref(), overrides)?;

    if prompt_preview {
        let prompts = api::prompt_preview(&csv_file, &config)?;
        if prompts.is_empty() {
            println!("No full batch of {} rows in {}", config.batch.chunk_size, csv_file.display());
        }
        for (index, prompt) in prompts.iter().enumerate() {
            println!("===== Batch {} prompt =====", index + 1);
            println!("{}", prompt);
        }
        return Ok(());
    }

    let report = api::summarize(&SummarizeOptions { csv_file, config })?;
    if report.skipped_rows > 0 {
        println!(
            "⚠️  {} trailing row(s) did not fill a batch and were not summarized",
            report.skipped_rows
        );
    }
    Ok(())
}

fn run_stats(
    csv_file: PathBuf,
    config: Option<PathBuf>,
    overrides: ConfigOverrides,
) -> Result<(), AppError> {
    let config = resolve_config(config.as_deref(), overrides)?;
    api::asset_stats(&csv_file, &config.output)?;
    Ok(())
}
