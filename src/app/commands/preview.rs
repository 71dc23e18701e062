//! Batch prompt preview without contacting the model.

use crate::domain::schema::prepare_table;
use crate::domain::{AppError, BatchConfig, Batches, PromptBuilder, WorkOrderTable};

/// Render the prompt of every full batch, in batch order.
pub fn execute(
    prompts: &PromptBuilder,
    table: &WorkOrderTable,
    batch: &BatchConfig,
) -> Result<Vec<String>, AppError> {
    let table = prepare_table(table)?;
    Batches::new(&table, batch.chunk_size)?
        .map(|entry| {
            let prompt = prompts.batch_prompt(entry.rows)?;
            batch.check_prompt(&format!("batch {}", entry.number), &prompt)?;
            Ok(prompt)
        })
        .collect()
}
