//! Batch summarization run.
//!
//! Validate, then per batch: group failures, build the prompt, summarize and write
//! the batch artifact. Afterwards write the combined artifact, summarize the batch
//! summaries into the master artifact and write the whole-table asset statistics.
//! The first error ends the run; artifacts already written are left in place.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::stats;
use crate::domain::schema::prepare_table;
use crate::domain::{
    AppError, Batch, Batches, BatchSummary, CombinedSummaries, MasterSummary, RunConfig,
    WorkOrderTable, group_failures, remainder_rows, to_json_bytes,
};
use crate::ports::{ArtifactStore, Summarizer, SummaryRequest};

/// Paths written by a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Per-batch artifacts in batch order.
    pub batch_files: Vec<PathBuf>,
    /// Trailing rows that did not fill a batch.
    pub skipped_rows: usize,
    pub combined_file: PathBuf,
    pub master_file: PathBuf,
    pub asset_stats_file: PathBuf,
}

pub fn execute<S: Summarizer, A: ArtifactStore>(
    ctx: &AppContext<S, A>,
    table: &WorkOrderTable,
    config: &RunConfig,
) -> Result<RunReport, AppError> {
    let table = prepare_table(table)?;
    let batches = Batches::new(&table, config.batch.chunk_size)?;

    let skipped_rows = remainder_rows(table.len(), config.batch.chunk_size);
    if skipped_rows > 0 {
        tracing::warn!(
            skipped_rows,
            chunk_size = config.batch.chunk_size,
            "trailing rows do not fill a batch and are left out of batch summaries"
        );
    }
    tracing::info!(
        rows = table.len(),
        batches = batches.len(),
        backend = ctx.summarizer().backend(),
        "starting summarization"
    );

    let mut summaries = Vec::with_capacity(batches.len());
    let mut batch_files = Vec::with_capacity(batches.len());
    for batch in batches {
        let summary = summarize_batch(ctx, config, batch)?;
        let path = ctx.artifacts().write_artifact(
            &config.output.batch_file(summary.batch_number),
            &to_json_bytes(&summary)?,
        )?;
        println!("✅ Saved {}", path.display());
        batch_files.push(path);
        summaries.push(summary);
    }

    let combined = CombinedSummaries { batches: summaries };
    let combined_file =
        ctx.artifacts().write_artifact(&config.output.combined_file, &to_json_bytes(&combined)?)?;
    println!("✅ Combined batch summaries saved to {}", combined_file.display());

    let master = summarize_master(ctx, config, &combined.batches)?;
    let master_file =
        ctx.artifacts().write_artifact(&config.output.master_file, &to_json_bytes(&master)?)?;
    println!("✅ Master summary saved to {}", master_file.display());

    let asset_stats_file = stats::write_asset_stats(ctx.artifacts(), &table, &config.output)?;

    Ok(RunReport { batch_files, skipped_rows, combined_file, master_file, asset_stats_file })
}

fn summarize_batch<S: Summarizer, A: ArtifactStore>(
    ctx: &AppContext<S, A>,
    config: &RunConfig,
    batch: Batch<'_>,
) -> Result<BatchSummary, AppError> {
    let assets_failure_details = group_failures(batch.rows)?;
    let prompt = ctx.prompts().batch_prompt(batch.rows)?;
    config.batch.check_prompt(&format!("batch {}", batch.number), &prompt)?;

    tracing::debug!(
        batch = batch.number,
        prompt_chars = prompt.chars().count(),
        "summarizing batch"
    );
    let summary = ctx.summarizer().summarize(&request(config, prompt))?;

    Ok(BatchSummary { batch_number: batch.number, assets_failure_details, summary })
}

fn summarize_master<S: Summarizer, A: ArtifactStore>(
    ctx: &AppContext<S, A>,
    config: &RunConfig,
    batches: &[BatchSummary],
) -> Result<MasterSummary, AppError> {
    if batches.is_empty() {
        tracing::warn!("no full batches were processed; master summary left empty");
        return Ok(MasterSummary { master_summary: String::new() });
    }

    let prompt = ctx.prompts().master_prompt(batches)?;
    config.batch.check_prompt("master summary", &prompt)?;

    tracing::debug!(
        batches = batches.len(),
        prompt_chars = prompt.chars().count(),
        "summarizing batch summaries"
    );
    let master_summary = ctx.summarizer().summarize(&request(config, prompt))?;
    Ok(MasterSummary { master_summary })
}

fn request(config: &RunConfig, prompt: String) -> SummaryRequest {
    SummaryRequest::new(prompt, config.summarizer.model.clone(), config.summarizer.temperature)
}
