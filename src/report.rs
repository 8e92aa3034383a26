use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::curve::TOLERANCE;
use crate::data::model::InterfaceBaseline;
use crate::error::{CurvyError, Result};

/// One column of the baseline report. `row`/`height` are `null` when no
/// interface was detected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnEntry {
    pub col: usize,
    pub row: Option<usize>,
    pub height: Option<f64>,
}

/// The detected interface, as written by `--baseline`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineReport {
    pub input: PathBuf,
    pub n_cols: usize,
    pub n_rows: usize,
    pub cell_size: f64,
    pub tolerance: f32,
    pub columns: Vec<ColumnEntry>,
}

impl BaselineReport {
    pub fn new(input: &Path, n_rows: usize, baseline: &InterfaceBaseline) -> Self {
        let columns = baseline
            .points()
            .iter()
            .enumerate()
            .map(|(col, point)| ColumnEntry {
                col,
                row: point.map(|p| p.row),
                height: point.map(|p| p.height),
            })
            .collect();
        BaselineReport {
            input: input.to_path_buf(),
            n_cols: baseline.len(),
            n_rows,
            cell_size: baseline.cell_size(),
            tolerance: TOLERANCE,
            columns,
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| CurvyError::io(path, e))?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut out, self).map_err(|source| CurvyError::Report {
            path: path.to_path_buf(),
            source,
        })?;
        out.flush().map_err(|e| CurvyError::io(path, e))?;
        log::info!("Baseline report written to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::InterfacePoint;

    #[test]
    fn missing_columns_serialize_as_null() {
        let point = InterfacePoint { row: 3, height: 7.5 };
        let baseline = InterfaceBaseline::new(vec![Some(point), None], 2.5);
        let report = BaselineReport::new(Path::new("model.bin"), 8, &baseline);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["n_cols"], 2);
        assert_eq!(json["columns"][0]["row"], 3);
        assert_eq!(json["columns"][0]["height"], 7.5);
        assert!(json["columns"][1]["row"].is_null());
        assert!(json["columns"][1]["height"].is_null());
    }

    #[test]
    fn written_report_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("baseline.json");
        let baseline = InterfaceBaseline::uniform(3, 4, 1.0);
        let report = BaselineReport::new(Path::new("in.bin"), 10, &baseline);
        report.write_json(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let back: BaselineReport = serde_json::from_str(&text).unwrap();
        assert_eq!(back, report);
    }
}
