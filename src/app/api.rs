//! API Facade for the application.
//!
//! Wires filesystem, embedded prompt assets and the configured summarizer into
//! the commands.

use std::path::{Path, PathBuf};

use crate::app::{
    AppContext,
    commands::{preview, stats, summarize},
};
use crate::domain::{OutputConfig, PromptBuilder, RunConfig};
use crate::services::{
    FilesystemArtifactStore, embedded_prompt_templates, load_table, summarizer_from_config,
};

pub use crate::app::commands::summarize::RunReport;
pub use crate::app::config::{ConfigOverrides, resolve_config};
pub use crate::domain::AppError;

/// Inputs of a summarization run.
#[derive(Debug, Clone)]
pub struct SummarizeOptions {
    pub csv_file: PathBuf,
    pub config: RunConfig,
}

/// Run the full pipeline: batch summaries, combined, master and asset statistics.
pub fn summarize(options: &SummarizeOptions) -> Result<RunReport, AppError> {
    let table = load_table(&options.csv_file)?;
    let summarizer = summarizer_from_config(&options.config.summarizer)?;
    let artifacts = FilesystemArtifactStore::new(options.config.output.root.clone());
    let prompts = PromptBuilder::new(embedded_prompt_templates()?);
    let ctx = AppContext::new(summarizer, artifacts, prompts);

    summarize::execute(&ctx, &table, &options.config)
}

/// Write only the whole-table asset statistics artifact.
pub fn asset_stats(csv_file: &Path, output: &OutputConfig) -> Result<PathBuf, AppError> {
    let table = load_table(csv_file)?;
    let artifacts = FilesystemArtifactStore::new(output.root.clone());
    stats::execute(&artifacts, &table, output)
}

/// Render the batch prompts a run would send, without calling the model.
pub fn prompt_preview(csv_file: &Path, config: &RunConfig) -> Result<Vec<String>, AppError> {
    let table = load_table(csv_file)?;
    let prompts = PromptBuilder::new(embedded_prompt_templates()?);
    preview::execute(&prompts, &table, &config.batch)
}
