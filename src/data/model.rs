use serde::{Deserialize, Serialize};

use crate::error::{CurvyError, Result};

// ---------------------------------------------------------------------------
// Matrix – the property field, row-major
// ---------------------------------------------------------------------------

/// A 2D grid of `f32` samples stored row-major in a single owned buffer.
///
/// Row 0 is the top of the model. `values.len() == n_rows * n_cols` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    values: Vec<f32>,
    n_rows: usize,
    n_cols: usize,
}

impl Matrix {
    /// Wrap a flat buffer, deriving the row count from `n_cols`.
    pub fn from_values(values: Vec<f32>, n_cols: usize) -> Result<Self> {
        if n_cols == 0 {
            return Err(CurvyError::domain("the number of columns must be positive"));
        }
        if values.len() % n_cols != 0 {
            return Err(CurvyError::format(format!(
                "The number of values ({}) is not divisible by the number of columns {n_cols}",
                values.len()
            )));
        }
        let n_rows = values.len() / n_cols;
        if n_rows == 0 {
            return Err(CurvyError::domain("the matrix has no rows"));
        }
        Ok(Matrix {
            values,
            n_rows,
            n_cols,
        })
    }

    /// Build a matrix by evaluating `f(row, col)` for every cell.
    pub fn from_fn(
        n_rows: usize,
        n_cols: usize,
        mut f: impl FnMut(usize, usize) -> f32,
    ) -> Result<Self> {
        let mut values = Vec::with_capacity(n_rows * n_cols);
        for row in 0..n_rows {
            for col in 0..n_cols {
                values.push(f(row, col));
            }
        }
        Self::from_values(values, n_cols)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.n_rows && col < self.n_cols);
        row * self.n_cols + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.values[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        let idx = self.index(row, col);
        self.values[idx] = value;
    }

    /// The `n_rows` values of one column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = f32> + '_ {
        self.values.iter().skip(col).step_by(self.n_cols).copied()
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f32> {
        self.values
    }

    /// Smallest and largest finite value, `None` if nothing is finite.
    pub fn value_range(&self) -> Option<(f32, f32)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

// ---------------------------------------------------------------------------
// InterfaceBaseline – detected interface height per column
// ---------------------------------------------------------------------------

/// Where the interface was found in one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterfacePoint {
    /// Last row above the step (`row` and `row + 1` differ by more than the tolerance).
    pub row: usize,
    /// `row * cell_size`.
    pub height: f64,
}

/// Per-column interface heights. `None` marks a column with no discontinuity.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceBaseline {
    points: Vec<Option<InterfacePoint>>,
    cell_size: f64,
}

impl InterfaceBaseline {
    pub fn new(points: Vec<Option<InterfacePoint>>, cell_size: f64) -> Self {
        InterfaceBaseline { points, cell_size }
    }

    /// Baseline with every column at the same detected row.
    pub fn uniform(n_cols: usize, row: usize, cell_size: f64) -> Self {
        let point = InterfacePoint {
            row,
            height: row as f64 * cell_size,
        };
        Self::new(vec![Some(point); n_cols], cell_size)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn point(&self, col: usize) -> Option<InterfacePoint> {
        self.points.get(col).copied().flatten()
    }

    /// Physical height of the interface in `col`, if one was detected.
    pub fn height(&self, col: usize) -> Option<f64> {
        self.point(col).map(|p| p.height)
    }

    pub fn points(&self) -> &[Option<InterfacePoint>] {
        &self.points
    }

    /// Columns without a detected interface, ascending.
    pub fn missing_columns(&self) -> Vec<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_none())
            .map(|(col, _)| col)
            .collect()
    }
}
