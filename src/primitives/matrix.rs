//! Row-major matrix of categorical feature codes.

use super::FeatureCode;
use crate::error::{NbError, Result};

/// A 2D matrix of feature codes, one row per sample.
///
/// Every row has exactly `n_features` codes; ragged input is rejected at
/// construction time.
///
/// # Examples
///
/// ```
/// use categorical_nb::primitives::FeatureMatrix;
///
/// let x = FeatureMatrix::from_rows(&[vec![0, 2, 0, 1], vec![1, 2, 0, 1]])
///     .expect("rows share one width");
/// assert_eq!(x.shape(), (2, 4));
/// assert_eq!(x.row(1), &[1, 2, 0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureMatrix {
    data: Vec<FeatureCode>,
    rows: usize,
    cols: usize,
}

impl FeatureMatrix {
    /// Creates a matrix from flat row-major data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols, or if the
    /// matrix would have no rows or no columns.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<FeatureCode>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(NbError::empty_input("feature matrix needs rows and columns"));
        }
        let expected = rows.checked_mul(cols).ok_or_else(|| NbError::DimensionMismatch {
            expected: format!("{rows}x{cols} codes addressable in memory"),
            actual: format!("{} codes", data.len()),
        })?;
        if data.len() != expected {
            return Err(NbError::DimensionMismatch {
                expected: format!("{rows}x{cols} = {expected} codes"),
                actual: format!("{} codes", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from a list of rows.
    ///
    /// The first row fixes the width.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` for no rows (or an empty first row) and
    /// `DimensionMismatch` naming the first ragged row.
    pub fn from_rows<R: AsRef<[FeatureCode]>>(rows: &[R]) -> Result<Self> {
        let first = rows
            .first()
            .ok_or_else(|| NbError::empty_input("no feature vectors"))?;
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(NbError::empty_input("feature vectors have no dimensions"));
        }

        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(NbError::DimensionMismatch {
                    expected: format!("{cols} features per row"),
                    actual: format!("{} features in row {i}", row.len()),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Returns the shape as (rows, features).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of feature dimensions.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.cols
    }

    /// Gets the code at (row, feature).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> FeatureCode {
        self.data[row * self.cols + col]
    }

    /// Returns a row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row_idx` is out of bounds.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> &[FeatureCode] {
        let start = row_idx * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterates over rows in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[FeatureCode]> + '_ {
        self.data.chunks_exact(self.cols)
    }

    /// Returns one feature column.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vec<FeatureCode> {
        (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[FeatureCode] {
        &self.data
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
