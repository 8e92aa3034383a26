use crate::data::model::{InterfaceBaseline, InterfacePoint, Matrix};
use crate::error::{CurvyError, Result};

use super::is_step;

/// Find the interface in every column.
///
/// Rows are scanned top to bottom and the first pair `(row, row + 1)` whose
/// difference exceeds [`super::TOLERANCE`] wins. Columns with no such pair get
/// `None`. The matrix is only read.
pub fn locate(matrix: &Matrix, cell_size: f64) -> Result<InterfaceBaseline> {
    if !(cell_size.is_finite() && cell_size > 0.0) {
        return Err(CurvyError::domain(format!(
            "cell size must be a positive finite number, got {cell_size}"
        )));
    }

    let last_pair = matrix.n_rows().saturating_sub(1);
    let points: Vec<Option<InterfacePoint>> = (0..matrix.n_cols())
        .map(|col| {
            (0..last_pair)
                .find(|&row| is_step(matrix, row, col))
                .map(|row| InterfacePoint {
                    row,
                    height: row as f64 * cell_size,
                })
        })
        .collect();

    Ok(InterfaceBaseline::new(points, cell_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_layer(n_rows: usize, n_cols: usize, last_upper_row: usize) -> Matrix {
        Matrix::from_fn(n_rows, n_cols, |row, _| {
            if row <= last_upper_row {
                100.0
            } else {
                200.0
            }
        })
        .unwrap()
    }

    #[test]
    fn finds_single_step() {
        let m = two_layer(10, 4, 4);
        let b = locate(&m, 2.5).unwrap();
        for col in 0..4 {
            assert_eq!(b.point(col).unwrap().row, 4);
            assert_eq!(b.height(col), Some(10.0));
        }
    }

    #[test]
    fn first_step_wins() {
        // Steps after row 1 and after row 5.
        let m = Matrix::from_fn(8, 1, |row, _| match row {
            0..=1 => 1.0,
            2..=5 => 5.0,
            _ => 9.0,
        })
        .unwrap();
        let b = locate(&m, 1.0).unwrap();
        assert_eq!(b.point(0).unwrap().row, 1);
    }

    #[test]
    fn difference_equal_to_tolerance_is_not_a_step() {
        let m = Matrix::from_fn(6, 2, |row, col| {
            if col == 0 {
                row as f32 // differences of exactly 1.0
            } else {
                row as f32 * 0.5
            }
        })
        .unwrap();
        let b = locate(&m, 1.0).unwrap();
        assert_eq!(b.height(0), None);
        assert_eq!(b.height(1), None);
        assert_eq!(b.missing_columns(), vec![0, 1]);
    }

    #[test]
    fn step_at_row_zero_is_distinct_from_missing() {
        let m = Matrix::from_fn(4, 2, |row, col| {
            if col == 0 && row == 0 {
                50.0
            } else {
                0.0
            }
        })
        .unwrap();
        let b = locate(&m, 3.0).unwrap();
        assert_eq!(b.height(0), Some(0.0));
        assert_eq!(b.height(1), None);
    }

    #[test]
    fn single_row_has_no_interface() {
        let m = Matrix::from_values(vec![1.0, 500.0], 2).unwrap();
        let b = locate(&m, 1.0).unwrap();
        assert_eq!(b.missing_columns(), vec![0, 1]);
    }

    #[test]
    fn rejects_bad_cell_size() {
        let m = two_layer(4, 1, 1);
        assert!(locate(&m, 0.0).is_err());
        assert!(locate(&m, -1.0).is_err());
        assert!(locate(&m, f64::NAN).is_err());
    }
}
