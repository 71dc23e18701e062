//! In-memory work order table.

use std::ops::Range;

use crate::domain::AppError;

/// Text shown for a missing cell when a table is rendered.
pub const MISSING_CELL_TEXT: &str = "NaN";

/// One source row; `None` marks a missing value.
pub type Row = Vec<Option<String>>;

/// Headers plus rows of string cells, read once and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkOrderTable {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl WorkOrderTable {
    /// Build a table; rows shorter than the header are padded with missing cells
    /// and longer rows are truncated.
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Keep only `columns`, in the given order.
    pub fn project(&self, columns: &[&str]) -> Result<WorkOrderTable, AppError> {
        let indexes = columns
            .iter()
            .map(|name| {
                self.column_index(name).ok_or_else(|| AppError::MissingColumn(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let headers = columns.iter().map(|name| name.to_string()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| indexes.iter().map(|&index| row[index].clone()).collect())
            .collect();

        Ok(WorkOrderTable { headers, rows })
    }

    /// Borrow every row.
    pub fn view(&self) -> RowSlice<'_> {
        RowSlice { headers: &self.headers, rows: &self.rows }
    }

    /// Borrow a contiguous range of rows. The range is clamped to the table length.
    pub fn slice(&self, range: Range<usize>) -> RowSlice<'_> {
        let end = range.end.min(self.rows.len());
        let start = range.start.min(end);
        RowSlice { headers: &self.headers, rows: &self.rows[start..end] }
    }
}

/// Borrowed view over a contiguous run of rows sharing the table's headers.
#[derive(Debug, Clone, Copy)]
pub struct RowSlice<'a> {
    headers: &'a [String],
    rows: &'a [Row],
}

impl<'a> RowSlice<'a> {
    pub fn headers(&self) -> &'a [String] {
        self.headers
    }

    pub fn rows(&self) -> &'a [Row] {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Fixed-width text rendering: a header line then one line per row, each column
    /// right-aligned to its widest cell and separated by a single space.
    pub fn render_text(&self) -> String {
        let cell_text = |cell: &'a Option<String>| cell.as_deref().unwrap_or(MISSING_CELL_TEXT);

        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                self.rows
                    .iter()
                    .map(|row| cell_text(&row[index]).chars().count())
                    .fold(header.chars().count(), usize::max)
            })
            .collect();

        let render_line = |cells: Vec<&str>| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:>width$}", cell, width = *width))
                .collect::<Vec<_>>()
                .join(" ")
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(render_line(self.headers.iter().map(String::as_str).collect()));
        for row in self.rows {
            lines.push(render_line(row.iter().map(cell_text).collect()));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    fn sample() -> WorkOrderTable {
        WorkOrderTable::new(
            vec!["Asset ID".to_string(), "Failure Description".to_string(), "Extra".to_string()],
            vec![
                vec![cell("A-1"), cell("Seal leak"), cell("x")],
                vec![cell("B-22"), None],
                vec![cell("A-1"), cell("Bearing noise"), cell("y"), cell("overflow")],
            ],
        )
    }

    #[test]
    fn new_pads_and_truncates_rows() {
        let table = sample();
        assert_eq!(table.len(), 3);
        assert!(table.view().rows().iter().all(|row| row.len() == 3));
        assert_eq!(table.view().rows()[1][2], None);
    }

    #[test]
    fn project_keeps_requested_order() {
        let table = sample();
        let projected = table.project(&["Failure Description", "Asset ID"]).unwrap();
        assert_eq!(projected.headers(), ["Failure Description", "Asset ID"]);
        assert_eq!(projected.view().rows()[0], vec![cell("Seal leak"), cell("A-1")]);
    }

    #[test]
    fn project_rejects_unknown_column() {
        let err = sample().project(&["Resolution"]).unwrap_err();
        assert!(matches!(err, AppError::MissingColumn(name) if name == "Resolution"));
    }

    #[test]
    fn slice_is_clamped() {
        let table = sample();
        assert_eq!(table.slice(1..10).len(), 2);
        assert!(table.slice(5..8).is_empty());
    }

    #[test]
    fn render_text_right_aligns_columns() {
        let table = sample().project(&["Asset ID", "Failure Description"]).unwrap();
        let text = table.view().render_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Asset ID Failure Description");
        assert_eq!(lines[1], "     A-1           Seal leak");
        assert_eq!(lines[2], "    B-22                 NaN");
        assert_eq!(lines[3], "     A-1       Bearing noise");
    }

    #[test]
    fn render_text_of_empty_slice_is_header_only() {
        let table = sample();
        assert_eq!(table.slice(0..0).render_text(), "Asset ID Failure Description Extra");
    }
}
