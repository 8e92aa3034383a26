use std::path::PathBuf;

use log::Level;

use crate::config::{Config, Mode};
use crate::curve::{discrete, locator, smooth};
use crate::data::loader::{load_binary, save_binary};
use crate::error::Result;
use crate::preview;
use crate::report::BaselineReport;

/// Outcome of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub mode: Mode,
    pub n_rows: usize,
    pub n_cols: usize,
    /// Columns whose contents were changed.
    pub displaced: usize,
    /// Columns left as loaded.
    pub untouched: usize,
}

/// Load, displace, and write one model.
///
/// Nothing is written until the whole matrix has been displaced. The baseline
/// report describes the interface as loaded, before displacement.
pub fn run(config: &Config) -> Result<RunSummary> {
    let mut matrix = load_binary(&config.input, config.n_cols)?;
    let baseline = locator::locate(&matrix, config.cell_size)?;
    let missing = baseline.missing_columns().len();
    if missing > 0 {
        log::log!(
            missing_interface_level(config),
            "No interface found in {missing} of {} columns",
            matrix.n_cols()
        );
    }

    log::info!(
        "Mode: {:?}, width {}, jump {}, cell size {}",
        config.mode,
        config.width,
        config.jump,
        config.cell_size
    );
    let (displaced, untouched) = match config.mode {
        Mode::Discrete => {
            let summary = discrete::displace(&mut matrix, config.width, config.jump)?;
            (summary.displaced, summary.untouched)
        }
        Mode::Smooth => {
            let summary = smooth::displace(
                &mut matrix,
                config.jump,
                config.cell_size,
                &baseline,
                config.on_missing,
            )?;
            (summary.rewritten, summary.skipped.len())
        }
    };

    save_binary(&config.output, &matrix)?;
    if let Some(path) = &config.baseline {
        BaselineReport::new(&config.input, matrix.n_rows(), &baseline).write_json(path)?;
    }
    if let Some(path) = &config.preview {
        preview::write_png(path, &matrix)?;
    }

    Ok(RunSummary {
        output: config.output.clone(),
        mode: config.mode,
        n_rows: matrix.n_rows(),
        n_cols: matrix.n_cols(),
        displaced,
        untouched,
    })
}

/// Missing interfaces matter only when the baseline is used or reported.
fn missing_interface_level(config: &Config) -> Level {
    if config.mode == Mode::Smooth || config.baseline.is_some() {
        Level::Warn
    } else {
        Level::Debug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::smooth::MissingPolicy;

    fn config(mode: Mode, baseline: Option<PathBuf>) -> Config {
        Config {
            input: PathBuf::from("model.bin"),
            output: PathBuf::from("model_curvy.bin"),
            n_cols: 4,
            width: 2,
            jump: 2,
            cell_size: 1.0,
            mode,
            on_missing: MissingPolicy::Skip,
            preview: None,
            baseline,
        }
    }

    #[test]
    fn missing_interface_is_quiet_in_plain_discrete_runs() {
        assert_eq!(missing_interface_level(&config(Mode::Discrete, None)), Level::Debug);
        assert_eq!(
            missing_interface_level(&config(Mode::Discrete, Some(PathBuf::from("b.json")))),
            Level::Warn
        );
        assert_eq!(missing_interface_level(&config(Mode::Smooth, None)), Level::Warn);
    }
}
