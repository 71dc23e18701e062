mod artifact_filesystem;
mod csv_table_loader;
mod prompt_assets;
mod summarizer_command;
mod summarizer_http;

pub use artifact_filesystem::FilesystemArtifactStore;
pub use csv_table_loader::{load_table, read_table};
pub use prompt_assets::embedded_prompt_templates;
pub use summarizer_command::CommandSummarizer;
pub use summarizer_http::HttpSummarizer;

use crate::domain::{AppError, SummarizerBackend, SummarizerConfig};
use crate::ports::Summarizer;

/// Build the summarizer selected by configuration.
pub fn summarizer_from_config(config: &SummarizerConfig) -> Result<Box<dyn Summarizer>, AppError> {
    tracing::info!(backend = %config.backend, model = %config.model, "selected summarizer");
    match config.backend {
        SummarizerBackend::Command => Ok(Box::new(CommandSummarizer::new(&config.command))),
        SummarizerBackend::Http => Ok(Box::new(HttpSummarizer::new(&config.http)?)),
    }
}
