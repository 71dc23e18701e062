//! Delimited work order table loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::domain::{AppError, Row, WorkOrderTable};

/// Cell texts read as missing values.
const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Load a CSV file with a header row.
pub fn load_table(path: &Path) -> Result<WorkOrderTable, AppError> {
    if !path.is_file() {
        return Err(AppError::TableNotFound(path.display().to_string()));
    }
    let table = read_table(File::open(path)?)?;
    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.headers().len(),
        "loaded work order table"
    );
    Ok(table)
}

/// Read CSV text with a header row. Short rows are padded with missing cells.
pub fn read_table<R: Read>(reader: R) -> Result<WorkOrderTable, AppError> {
    let mut reader = ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);

    let headers = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let header = if index == 0 { header.trim_start_matches('\u{feff}') } else { header };
            header.to_string()
        })
        .collect::<Vec<_>>();

    let mut rows: Vec<Row> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(parse_cell).collect());
    }

    Ok(WorkOrderTable::new(headers, rows))
}

fn parse_cell(raw: &str) -> Option<String> {
    if MISSING_TOKENS.contains(&raw.trim()) { None } else { Some(raw.to_string()) }
}
