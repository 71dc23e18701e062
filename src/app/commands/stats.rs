//! Whole-table asset failure statistics.

use std::path::PathBuf;

use crate::domain::schema::prepare_table;
use crate::domain::{
    AppError, AssetFailureSummary, OutputConfig, WorkOrderTable, asset_failure_stats,
    to_json_bytes,
};
use crate::ports::ArtifactStore;

/// Validate the table and write only the asset statistics artifact.
pub fn execute<A: ArtifactStore>(
    store: &A,
    table: &WorkOrderTable,
    output: &OutputConfig,
) -> Result<PathBuf, AppError> {
    let table = prepare_table(table)?;
    write_asset_stats(store, &table, output)
}

/// Tally failures per asset over every row, including rows outside full batches.
pub(crate) fn write_asset_stats<A: ArtifactStore>(
    store: &A,
    table: &WorkOrderTable,
    output: &OutputConfig,
) -> Result<PathBuf, AppError> {
    let summary = AssetFailureSummary { asset_summary: asset_failure_stats(table.view())? };
    tracing::info!(assets = summary.asset_summary.len(), "computed asset failure statistics");

    let path = store.write_artifact(&output.asset_stats_file, &to_json_bytes(&summary)?)?;
    println!("✅ Per-asset failure summary saved to {}", path.display());
    Ok(path)
}
