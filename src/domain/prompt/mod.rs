//! Batch-level and master-level prompt construction.

mod builder;

pub use builder::{
    BATCH_TEMPLATE_NAME, MASTER_TEMPLATE_NAME, PREDICTION_MAX_DAYS, PREDICTION_MIN_DAYS,
    PromptBuilder, PromptTemplates, join_batch_summaries,
};
