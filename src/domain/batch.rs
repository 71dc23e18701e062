//! Fixed-size contiguous batching.

use crate::domain::{AppError, RowSlice, WorkOrderTable};

/// Number of full batches; the trailing partial batch is not counted.
pub fn batch_count(row_count: usize, chunk_size: usize) -> usize {
    if chunk_size == 0 { 0 } else { row_count / chunk_size }
}

/// Rows left over after the last full batch.
pub fn remainder_rows(row_count: usize, chunk_size: usize) -> usize {
    row_count - batch_count(row_count, chunk_size) * chunk_size
}

/// One batch: 1-based number plus its rows.
#[derive(Debug, Clone, Copy)]
pub struct Batch<'a> {
    pub number: usize,
    pub rows: RowSlice<'a>,
}

/// Lazy sequence of full batches over a table, in row order.
///
/// Cloning restarts from the clone's current position.
#[derive(Debug, Clone)]
pub struct Batches<'a> {
    table: &'a WorkOrderTable,
    chunk_size: usize,
    next: usize,
    count: usize,
}

impl<'a> Batches<'a> {
    pub fn new(table: &'a WorkOrderTable, chunk_size: usize) -> Result<Self, AppError> {
        if chunk_size == 0 {
            return Err(AppError::config_error("chunk_size must be greater than 0"));
        }
        Ok(Self { table, chunk_size, next: 0, count: batch_count(table.len(), chunk_size) })
    }
}

impl<'a> Iterator for Batches<'a> {
    type Item = Batch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let start = self.next * self.chunk_size;
        let rows = self.table.slice(start..start + self.chunk_size);
        self.next += 1;
        Some(Batch { number: self.next, rows })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Batches<'_> {}
