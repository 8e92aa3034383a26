use std::path::Path;

use image::RgbImage;

use crate::color::ValueRamp;
use crate::data::model::Matrix;
use crate::error::{CurvyError, Result};

/// One pixel per cell, row 0 at the top, coloured over the matrix value range.
pub fn render(matrix: &Matrix) -> RgbImage {
    let (min, max) = matrix.value_range().unwrap_or((0.0, 0.0));
    let ramp = ValueRamp::new(min, max);
    RgbImage::from_fn(matrix.n_cols() as u32, matrix.n_rows() as u32, |x, y| {
        ramp.color_for(matrix.get(y as usize, x as usize))
    })
}

/// Render the matrix and save it as a PNG.
pub fn write_png(path: &Path, matrix: &Matrix) -> Result<()> {
    render(matrix)
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| CurvyError::Render {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("Preview written to {}", path.display());
    Ok(())
}
