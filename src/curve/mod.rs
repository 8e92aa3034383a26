//! Interface detection and the two displacement variants.
//!
//! ```text
//!   Matrix ──► locator ──► InterfaceBaseline ──► smooth   (sinusoidal curve)
//!     │
//!     └───────────────────────────────────────► discrete (staircase band)
//! ```

pub mod discrete;
pub mod locator;
pub mod smooth;

use crate::data::model::Matrix;

/// Vertical difference that marks the interface step.
pub const TOLERANCE: f32 = 1.0;

/// Whether `row` and `row + 1` in `col` straddle the interface.
#[inline]
pub(crate) fn is_step(matrix: &Matrix, row: usize, col: usize) -> bool {
    (matrix.get(row, col) - matrix.get(row + 1, col)).abs() > TOLERANCE
}
