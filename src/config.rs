//! Command line parsing and validation.
//!
//! ```bash
//! # Staircase displacement (discrete)
//! curvy-interface model.bin 500 20 4
//!
//! # Sinusoidal displacement; a cell size selects smooth mode
//! curvy-interface model.bin 500 20 4 12.5 --baseline baseline.json --preview model.png
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::curve::smooth::MissingPolicy;
use crate::data::path::curvy_output_path;
use crate::error::{CurvyError, Result};

/// Displacement algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Shift a `jump`-cell band across the interface, alternating every `width` columns.
    Discrete,
    /// Redraw each column as a step at a sinusoidally displaced height.
    Smooth,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "curvy-interface",
    version,
    about = "Make the interface of a binary media-property model curvy",
    long_about = None,
)]
pub struct Args {
    /// Binary file (raw f32, row-major) containing media properties
    pub input: PathBuf,

    /// Number of columns in the binary file
    #[arg(allow_negative_numbers = true)]
    pub n_cols: i64,

    /// Size of the part of the interface for one jump (in cells)
    #[arg(allow_negative_numbers = true)]
    pub width: i64,

    /// Height of the jump of the interface (in cells)
    #[arg(allow_negative_numbers = true)]
    pub jump: i64,

    /// Physical size of one cell; selects smooth mode unless --mode is given
    #[arg(allow_negative_numbers = true)]
    pub cell_size: Option<f64>,

    /// Displacement algorithm [default: smooth with a cell size, discrete without]
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Smooth mode: what to do with columns where no interface is found
    #[arg(long, value_enum, default_value_t = MissingPolicy::Skip)]
    pub on_missing: MissingPolicy,

    /// Output file [default: <input stem>_curvy.bin in the current directory]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also render the displaced model as a PNG
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// Write the detected interface baseline as JSON
    #[arg(long)]
    pub baseline: Option<PathBuf>,
}

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub n_cols: usize,
    pub width: usize,
    pub jump: i32,
    pub cell_size: f64,
    pub mode: Mode,
    pub on_missing: MissingPolicy,
    pub preview: Option<PathBuf>,
    pub baseline: Option<PathBuf>,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let n_cols = positive(args.n_cols, "the number of columns")?;
        let width = positive(args.width, "width")?;
        let jump = i32::try_from(args.jump)
            .ok()
            .filter(|&j| j != 0)
            .ok_or_else(|| {
                CurvyError::domain(format!(
                    "jump must be a non-zero cell count, got {}",
                    args.jump
                ))
            })?;

        let cell_size = args.cell_size.unwrap_or(1.0);
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(CurvyError::domain(format!(
                "cell size must be a positive finite number, got {cell_size}"
            )));
        }

        let mode = args.mode.unwrap_or(if args.cell_size.is_some() {
            Mode::Smooth
        } else {
            Mode::Discrete
        });
        let output = args
            .output
            .unwrap_or_else(|| curvy_output_path(&args.input));

        Ok(Config {
            input: args.input,
            output,
            n_cols,
            width,
            jump,
            cell_size,
            mode,
            on_missing: args.on_missing,
            preview: args.preview,
            baseline: args.baseline,
        })
    }
}

fn positive(value: i64, what: &str) -> Result<usize> {
    usize::try_from(value)
        .ok()
        .filter(|&v| v > 0)
        .ok_or_else(|| CurvyError::domain(format!("{what} must be positive, got {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Config> {
        let argv = std::iter::once("curvy-interface").chain(argv.iter().copied());
        let args = Args::try_parse_from(argv).expect("arguments should parse");
        Config::from_args(args)
    }

    #[test]
    fn four_positionals_select_discrete() {
        let cfg = parse(&["/data/model.bin", "500", "20", "4"]).unwrap();
        assert_eq!(cfg.mode, Mode::Discrete);
        assert_eq!(cfg.n_cols, 500);
        assert_eq!(cfg.width, 20);
        assert_eq!(cfg.jump, 4);
        assert_eq!(cfg.cell_size, 1.0);
        assert_eq!(cfg.output, PathBuf::from("model_curvy.bin"));
    }

    #[test]
    fn cell_size_selects_smooth() {
        let cfg = parse(&["model.bin", "500", "20", "4", "12.5"]).unwrap();
        assert_eq!(cfg.mode, Mode::Smooth);
        assert_eq!(cfg.cell_size, 12.5);
        assert_eq!(cfg.on_missing, MissingPolicy::Skip);
    }

    #[test]
    fn explicit_mode_and_options_win() {
        let cfg = parse(&[
            "model.bin", "10", "2", "-3", "2.0", "--mode", "discrete", "--on-missing", "fail", "-o",
            "out.bin",
        ])
        .unwrap();
        assert_eq!(cfg.mode, Mode::Discrete);
        assert_eq!(cfg.jump, -3);
        assert_eq!(cfg.on_missing, MissingPolicy::Fail);
        assert_eq!(cfg.output, PathBuf::from("out.bin"));
    }

    #[test]
    fn wrong_argument_count_is_a_parse_error() {
        assert!(Args::try_parse_from(["curvy-interface", "model.bin", "10", "2"]).is_err());
        let extra = ["curvy-interface", "m.bin", "1", "2", "3", "4", "5"];
        assert!(Args::try_parse_from(extra).is_err());
    }

    #[test]
    fn invalid_numbers_are_domain_errors() {
        for argv in [
            ["m.bin", "0", "2", "3"],
            ["m.bin", "-4", "2", "3"],
            ["m.bin", "4", "0", "3"],
            ["m.bin", "4", "2", "0"],
        ] {
            assert!(matches!(parse(&argv), Err(CurvyError::Domain { .. })), "{argv:?}");
        }
        assert!(matches!(
            parse(&["m.bin", "4", "2", "3", "-1.0"]),
            Err(CurvyError::Domain { .. })
        ));
    }
}
