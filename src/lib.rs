//! wosum: batch summarization of maintenance work orders with a local language model.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

pub use app::api::{ConfigOverrides, RunReport, SummarizeOptions, resolve_config};
pub use domain::{
    AppError, AssetFailureStat, AssetFailures, BatchSummary, OutputConfig, RunConfig,
    SummarizerBackend, WorkOrderTable,
};

/// Summarize a work order CSV: per-batch, combined, master and asset statistics artifacts.
pub fn summarize(options: &SummarizeOptions) -> Result<RunReport, AppError> {
    app::api::summarize(options)
}

/// Write only the per-asset failure statistics for a work order CSV.
pub fn asset_stats(csv_file: &Path, output: &OutputConfig) -> Result<PathBuf, AppError> {
    app::api::asset_stats(csv_file, output)
}

/// Render every batch prompt without calling the model.
pub fn prompt_preview(csv_file: &Path, config: &RunConfig) -> Result<Vec<String>, AppError> {
    app::api::prompt_preview(csv_file, config)
}
