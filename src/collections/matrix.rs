//! `Matrix`: a sparse 2D map addressed by a `(row, column)` key pair.
//!
//! Unlike a dense matrix, rows and columns are arbitrary `Hash + Eq` values and
//! only written cells are stored. Reading an unwritten cell yields the default
//! value supplied at construction, so lookups never fail.
//!
//! Row buckets are created lazily on the first write to a row and are kept in
//! insertion order.

use core::fmt;
use core::hash::Hash;

use crate::collections::hash::IndexMap;

/// A sparse two-key map with a fixed default value.
#[derive(Clone)]
pub struct Matrix<R, C, T> {
    rows: IndexMap<R, IndexMap<C, T>>,
    default_value: T,
}

impl<R, C, T> Matrix<R, C, T> {
    /// Creates an empty matrix whose unwritten cells read as `default_value`.
    pub fn new(default_value: T) -> Self {
        Self {
            rows: IndexMap::new(),
            default_value,
        }
    }

    /// The value reported for cells that were never written.
    #[inline(always)]
    pub fn default_value(&self) -> &T {
        &self.default_value
    }

    /// Number of row buckets currently allocated.
    #[inline(always)]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterates stored cells as `(row, column, value)` in row insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&R, &C, &T)> + '_ {
        self.rows
            .iter()
            .flat_map(|(row, cells)| cells.iter().map(move |(col, value)| (row, col, value)))
    }
}

impl<R, C, T> Matrix<R, C, T>
where
    R: Eq + Hash,
    C: Eq + Hash,
{
    /// Writes `value` at `(row, column)`, overwriting any previous value.
    pub fn set(&mut self, row: R, column: C, value: T) {
        self.rows
            .get_or_insert_with(row, IndexMap::new)
            .insert(column, value);
    }

    /// Reads the cell at `(row, column)`, or the default value if it was never written.
    pub fn get(&self, row: &R, column: &C) -> &T {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .unwrap_or(&self.default_value)
    }

    /// Clears a single cell back to the default value.
    ///
    /// Returns the previously stored value, if any.
    pub fn delete(&mut self, row: &R, column: &C) -> Option<T> {
        self.rows.get_mut(row)?.shift_remove(column)
    }

    /// Removes the whole row bucket.
    pub fn delete_row(&mut self, row: &R) {
        self.rows.shift_remove(row);
    }

    /// Removes `column` from every row bucket. O(rows).
    pub fn delete_column(&mut self, column: &C) {
        for cells in self.rows.values_mut() {
            cells.shift_remove(column);
        }
    }

    /// Stored cells of one row, in insertion order.
    pub fn row(&self, row: &R) -> impl Iterator<Item = (&C, &T)> + '_ {
        self.rows.get(row).into_iter().flat_map(|cells| cells.iter())
    }
}

impl<R, C, T> PartialEq for Matrix<R, C, T>
where
    R: Eq + Hash,
    C: Eq + Hash,
    T: PartialEq,
{
    /// Compares the matrices cell by cell as observed through [`Matrix::get`].
    ///
    /// Stored cells holding the default value and empty row buckets are
    /// indistinguishable from absent ones.
    fn eq(&self, other: &Self) -> bool {
        self.default_value == other.default_value
            && self
                .iter()
                .all(|(row, col, value)| other.get(row, col) == value)
            && other
                .iter()
                .all(|(row, col, value)| self.get(row, col) == value)
    }
}

impl<R: fmt::Debug, C: fmt::Debug, T: fmt::Debug> fmt::Debug for Matrix<R, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("default_value", &self.default_value)
            .field("rows", &self.rows)
            .finish()
    }
}
