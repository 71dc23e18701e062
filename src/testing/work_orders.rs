use crate::domain::WorkOrderTable;
use crate::domain::schema::{ASSET_ID, FAILURE_DESCRIPTION, RESOLUTION, WORK_ORDER_ID};

/// Table with the required columns; rows are `(asset, failure)` and work order IDs
/// are numbered `WO-1`, `WO-2`, ...
pub fn work_order_table(rows: &[(&str, Option<&str>)]) -> WorkOrderTable {
    WorkOrderTable::new(
        [WORK_ORDER_ID, ASSET_ID, FAILURE_DESCRIPTION, RESOLUTION].map(String::from).to_vec(),
        rows.iter()
            .enumerate()
            .map(|(index, (asset, failure))| {
                vec![
                    Some(format!("WO-{}", index + 1)),
                    Some(asset.to_string()),
                    failure.map(str::to_string),
                    Some("Fixed".to_string()),
                ]
            })
            .collect(),
    )
}
