use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::error::{CurvyError, Result};

use super::model::Matrix;

/// Size in bytes of one stored sample.
pub const ELEMENT_SIZE: usize = std::mem::size_of::<f32>();

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Load a headerless binary file of native-endian `f32` values.
///
/// The row count follows from the file length and `n_cols`. Fails with a
/// format error when the byte length is not a whole number of floats or the
/// element count does not split evenly into `n_cols` columns.
pub fn load_binary(path: &Path, n_cols: usize) -> Result<Matrix> {
    if n_cols == 0 {
        return Err(CurvyError::domain("the number of columns must be positive"));
    }

    let mut file = File::open(path).map_err(|e| CurvyError::io(path, e))?;
    let length = file
        .metadata()
        .map_err(|e| CurvyError::io(path, e))?
        .len() as usize;

    if length % ELEMENT_SIZE != 0 {
        return Err(CurvyError::format(format!(
            "The number of bytes in the file '{}' is not divisible by {ELEMENT_SIZE}",
            path.display()
        )));
    }
    let n_values = length / ELEMENT_SIZE;
    if n_values % n_cols != 0 {
        return Err(CurvyError::format(format!(
            "The number of values in the file '{}' is not divisible by the number of columns {n_cols}",
            path.display()
        )));
    }

    let mut bytes = Vec::with_capacity(length);
    file.read_to_end(&mut bytes)
        .map_err(|e| CurvyError::io(path, e))?;
    if bytes.len() != length {
        return Err(CurvyError::ShortRead {
            path: path.to_path_buf(),
            expected: length,
            actual: bytes.len(),
        });
    }

    let values: Vec<f32> = bytes
        .chunks_exact(ELEMENT_SIZE)
        .map(|chunk| f32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    log::info!(
        "Loaded {} values ({} x {n_cols}) from {}",
        values.len(),
        n_values / n_cols,
        path.display()
    );
    Matrix::from_values(values, n_cols)
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Write the matrix back in the same raw layout it was loaded from.
pub fn save_binary(path: &Path, matrix: &Matrix) -> Result<()> {
    let file = File::create(path).map_err(|e| CurvyError::io(path, e))?;
    let mut out = BufWriter::new(file);
    for value in matrix.values() {
        out.write_all(&value.to_ne_bytes())
            .map_err(|e| CurvyError::io(path, e))?;
    }
    out.flush().map_err(|e| CurvyError::io(path, e))?;

    log::info!(
        "Wrote {} x {} matrix to {}",
        matrix.n_rows(),
        matrix.n_cols(),
        path.display()
    );
    Ok(())
}
