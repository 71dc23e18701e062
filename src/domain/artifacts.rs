//! JSON artifact shapes written by a run.

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::domain::{AppError, AssetFailureStat, AssetFailures};

/// `batch_summaries/batch_summary_<N>.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub batch_number: usize,
    pub assets_failure_details: Vec<AssetFailures>,
    pub summary: String,
}

/// `all_batch_summaries.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedSummaries {
    pub batches: Vec<BatchSummary>,
}

/// `master_summary.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterSummary {
    pub master_summary: String,
}

/// `asset_failure_summary.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetFailureSummary {
    pub asset_summary: Vec<AssetFailureStat>,
}

/// Serialize with four-space indentation.
pub fn to_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, AppError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(buffer)
}
