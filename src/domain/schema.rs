//! Work order column names and the required-column check.

use crate::domain::{AppError, WorkOrderTable};

pub const WORK_ORDER_ID: &str = "Work Order ID";
pub const ASSET_ID: &str = "Asset ID";
pub const FAILURE_DESCRIPTION: &str = "Failure Description";
pub const RESOLUTION: &str = "Resolution";
pub const TECHNICIAN_COMMENTS: &str = "Technician Comments";

/// Columns every source table must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = [WORK_ORDER_ID, ASSET_ID, FAILURE_DESCRIPTION, RESOLUTION];

/// Columns carried into batches only when present.
pub const OPTIONAL_COLUMNS: [&str; 1] = [TECHNICIAN_COMMENTS];

/// Fail on the first required column the table lacks.
pub fn validate_columns(table: &WorkOrderTable) -> Result<(), AppError> {
    for column in REQUIRED_COLUMNS {
        if !table.has_column(column) {
            return Err(AppError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

/// Required columns followed by whichever optional columns the table has.
pub fn columns_to_use(table: &WorkOrderTable) -> Vec<&'static str> {
    REQUIRED_COLUMNS
        .into_iter()
        .chain(OPTIONAL_COLUMNS.into_iter().filter(|column| table.has_column(column)))
        .collect()
}

/// Validate, then project to the columns the pipeline reads.
pub fn prepare_table(table: &WorkOrderTable) -> Result<WorkOrderTable, AppError> {
    validate_columns(table)?;
    table.project(&columns_to_use(table))
}
