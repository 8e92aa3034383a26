use std::ops::Range;

use crate::data::model::Matrix;
use crate::error::{CurvyError, Result};

use super::is_step;

// ---------------------------------------------------------------------------
// Direction – which way the band extends from the interface row
// ---------------------------------------------------------------------------

/// Direction of the displacement band relative to the interface row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Band covers `row, row + 1, ...`, filled from `row - 1`.
    Down,
    /// Band covers `row, row - 1, ...`, filled from `row + 1`.
    Up,
}

impl Direction {
    /// `Down` for positive `jump`, `Up` for negative.
    pub fn of(jump: i32) -> Option<Self> {
        match jump.signum() {
            1 => Some(Direction::Down),
            -1 => Some(Direction::Up),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
        }
    }

    /// Source row and band rows for an interface at `row`, or `None` when any
    /// of them would fall outside `0..n_rows`.
    fn band(self, row: usize, band: usize, n_rows: usize) -> Option<(usize, Range<usize>)> {
        match self {
            Direction::Down => {
                let source = row.checked_sub(1)?;
                let end = row + band;
                (end <= n_rows).then_some((source, row..end))
            }
            Direction::Up => {
                let source = row + 1;
                let start = (row + 1).checked_sub(band)?;
                (source < n_rows).then_some((source, start..row + 1))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Displacement
// ---------------------------------------------------------------------------

/// What a discrete pass changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscreteSummary {
    /// Columns where an interface was found and a band rewritten.
    pub displaced: usize,
    /// Columns whose scan range held no interface.
    pub untouched: usize,
    /// Direction carried out of the last column.
    pub final_direction: Direction,
}

/// Shift a `|jump|`-cell band across the interface in every column.
///
/// The direction starts at `sign(jump)` and is threaded through the columns in
/// order; it flips whenever an interface is found in a column with
/// `col % width == 0`. Only the first interface row in `0..n_rows - |jump|`
/// is used per column. A band that would leave the matrix aborts the pass with
/// [`CurvyError::Bounds`] before that column is written.
pub fn displace(matrix: &mut Matrix, width: usize, jump: i32) -> Result<DiscreteSummary> {
    if width == 0 {
        return Err(CurvyError::domain("width must be positive"));
    }
    let start = Direction::of(jump).ok_or_else(|| CurvyError::domain("jump must be non-zero"))?;
    let band = jump.unsigned_abs() as usize;
    if band >= matrix.n_rows() {
        log::warn!(
            "Jump of {band} cells leaves no rows to scan in a {}-row matrix",
            matrix.n_rows()
        );
    }

    let mut displaced = 0;
    let final_direction = (0..matrix.n_cols()).try_fold(start, |direction, col| {
        let (direction, hit) = displace_column(matrix, col, width, band, direction)?;
        displaced += usize::from(hit);
        Ok::<_, CurvyError>(direction)
    })?;

    Ok(DiscreteSummary {
        displaced,
        untouched: matrix.n_cols() - displaced,
        final_direction,
    })
}

fn displace_column(
    matrix: &mut Matrix,
    col: usize,
    width: usize,
    band: usize,
    direction: Direction,
) -> Result<(Direction, bool)> {
    let n_rows = matrix.n_rows();
    let scan_end = n_rows.saturating_sub(band);
    let Some(row) = (0..scan_end).find(|&row| is_step(matrix, row, col)) else {
        return Ok((direction, false));
    };

    let direction = if col % width == 0 {
        direction.flipped()
    } else {
        direction
    };

    let (source, rows) = direction.band(row, band, n_rows).ok_or(CurvyError::Bounds {
        col,
        row,
        band,
        n_rows,
    })?;
    let fill = matrix.get(source, col);
    log::debug!("column {col}: interface at row {row}, {direction:?} band {rows:?} <- {fill}");
    for r in rows {
        matrix.set(r, col, fill);
    }
    Ok((direction, true))
}
