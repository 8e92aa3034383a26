use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// CurvyError – every failure the library can report
// ---------------------------------------------------------------------------

/// Errors raised while loading, displacing, or writing a property matrix.
///
/// All variants are "caught" failures: the binary maps them to exit status 2.
#[derive(Error, Debug)]
pub enum CurvyError {
    /// A file could not be opened, read, or written.
    #[error("File '{}' can't be opened", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fewer bytes came back from the file than its length promised.
    #[error(
        "The number of successfully read bytes ({actual}) is different from the expected one ({expected})"
    )]
    ShortRead {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    /// Byte length or element count does not fit the expected layout.
    #[error("{message}")]
    Format { message: String },

    /// A parameter handed to a core algorithm is outside its domain.
    #[error("Invalid parameter: {message}")]
    Domain { message: String },

    /// A displacement band would reach past the top or bottom of the matrix.
    #[error(
        "Interface band of {band} cells at row {row} in column {col} leaves the matrix ({n_rows} rows)"
    )]
    Bounds {
        col: usize,
        row: usize,
        band: usize,
        n_rows: usize,
    },

    /// The PNG preview could not be encoded or written.
    #[error("Preview '{}' can't be written", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The baseline report could not be serialized.
    #[error("Baseline report '{}' can't be written", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CurvyError>;

impl CurvyError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_cause_appears_once_in_error_chain() {
        let err = CurvyError::io(
            "model.bin",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.to_string(), "File 'model.bin' can't be opened");

        let chain = format!("{:#}", anyhow::Error::new(err).context("processing 'model.bin'"));
        assert_eq!(chain.matches("no such file").count(), 1, "{chain}");
        assert!(chain.starts_with("processing 'model.bin': File 'model.bin' can't be opened"));
    }
}
