pub mod artifacts;
pub mod batch;
pub mod configuration;
pub mod error;
pub mod grouping;
pub mod prompt;
pub mod schema;
pub mod table;

pub use artifacts::{
    AssetFailureSummary, BatchSummary, CombinedSummaries, MasterSummary, to_json_bytes,
};
pub use batch::{Batch, Batches, batch_count, remainder_rows};
pub use configuration::{
    BatchConfig, CommandBackendConfig, HttpBackendConfig, OutputConfig, RunConfig,
    SummarizerBackend, SummarizerConfig,
};
pub use error::AppError;
pub use grouping::{AssetFailureStat, AssetFailures, asset_failure_stats, group_failures};
pub use prompt::{PromptBuilder, PromptTemplates};
pub use table::{Row, RowSlice, WorkOrderTable};
