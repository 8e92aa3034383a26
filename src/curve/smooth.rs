use clap::ValueEnum;

use crate::data::model::{InterfaceBaseline, Matrix};
use crate::error::{CurvyError, Result};

/// What to do with a column whose baseline has no detected interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MissingPolicy {
    /// Leave the column as loaded.
    #[default]
    Skip,
    /// Abort the run.
    Fail,
}

/// What a smooth pass changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmoothSummary {
    pub rewritten: usize,
    pub skipped: Vec<usize>,
    /// Transition row written into each column, `None` for skipped columns.
    pub transition_rows: Vec<Option<usize>>,
}

/// Sum of the three harmonics for column `col` (0-based).
pub fn harmonic_offset(col: usize) -> f64 {
    let x = (col + 1) as f64;
    (x / 2.0).sin() + (x / 3.0).sin() + (x / 4.0).sin()
}

/// Row at which the synthesized interface starts, clamped to `0..=n_rows`.
pub fn transition_row(
    baseline_height: f64,
    jump: f64,
    cell_size: f64,
    col: usize,
    n_rows: usize,
) -> usize {
    let height = baseline_height + jump * harmonic_offset(col);
    let row = (height / cell_size).floor();
    if row <= 0.0 {
        0
    } else if row >= n_rows as f64 {
        n_rows
    } else {
        row as usize
    }
}

/// Redraw every column as a two-level step at a sinusoidally displaced height.
///
/// The value above the step is the top-left sample and the value below is
/// the bottom-right sample. Rows `< transition` get the upper value, the rest
/// the lower one; all other structure in the column is discarded.
pub fn displace(
    matrix: &mut Matrix,
    jump: i32,
    cell_size: f64,
    baseline: &InterfaceBaseline,
    policy: MissingPolicy,
) -> Result<SmoothSummary> {
    if !(cell_size.is_finite() && cell_size > 0.0) {
        return Err(CurvyError::domain(format!(
            "cell size must be a positive finite number, got {cell_size}"
        )));
    }
    if baseline.len() != matrix.n_cols() {
        return Err(CurvyError::domain(format!(
            "baseline has {} columns but the matrix has {}",
            baseline.len(),
            matrix.n_cols()
        )));
    }
    if policy == MissingPolicy::Fail {
        if let Some(&col) = baseline.missing_columns().first() {
            return Err(CurvyError::domain(format!("no interface found in column {col}")));
        }
    }

    let n_rows = matrix.n_rows();
    let above = matrix.get(0, 0);
    let below = matrix.get(n_rows - 1, matrix.n_cols() - 1);
    let jump = f64::from(jump);

    let mut summary = SmoothSummary {
        rewritten: 0,
        skipped: Vec::new(),
        transition_rows: Vec::with_capacity(matrix.n_cols()),
    };
    for col in 0..matrix.n_cols() {
        let Some(height) = baseline.height(col) else {
            log::debug!("column {col}: no interface, left unchanged");
            summary.skipped.push(col);
            summary.transition_rows.push(None);
            continue;
        };
        let split = transition_row(height, jump, cell_size, col, n_rows);
        for row in 0..n_rows {
            matrix.set(row, col, if row < split { above } else { below });
        }
        summary.rewritten += 1;
        summary.transition_rows.push(Some(split));
    }

    if !summary.skipped.is_empty() {
        log::warn!(
            "Skipped {} columns without an interface",
            summary.skipped.len()
        );
    }
    Ok(summary)
}
