use std::panic;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use curvy_interface::config::{Args, Config};
use curvy_interface::{pipeline, CurvyError};

const EXIT_USAGE: u8 = 1;
const EXIT_CAUGHT: u8 = 2;
const EXIT_UNKNOWN: u8 = 3;

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            log::debug!("argument error: {e}");
            println!("\n{}", Args::command().render_help());
            return ExitCode::from(EXIT_USAGE);
        }
    };

    match panic::catch_unwind(|| run(args)) {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(e)) => {
            println!("\n{e:#}\n");
            ExitCode::from(exit_code(&e))
        }
        Err(_) => {
            println!("\n\n\nUnknown exception!\n\n");
            ExitCode::from(EXIT_UNKNOWN)
        }
    }
}

/// `CurvyError`s anywhere in the chain are caught failures, the rest are unknown.
fn exit_code(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<CurvyError>().is_some() {
        EXIT_CAUGHT
    } else {
        EXIT_UNKNOWN
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::from_args(args)?;
    let summary = pipeline::run(&config)
        .with_context(|| format!("processing '{}'", config.input.display()))?;
    log::info!(
        "{:?}: displaced {} of {} columns ({} x {}) -> {}",
        summary.mode,
        summary.displaced,
        summary.n_cols,
        summary.n_rows,
        summary.n_cols,
        summary.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curvy_errors_exit_with_two() {
        let err = anyhow::Error::new(CurvyError::domain("width must be positive"));
        assert_eq!(exit_code(&err), EXIT_CAUGHT);

        let wrapped = anyhow::Error::new(CurvyError::format("ragged")).context("processing");
        assert_eq!(exit_code(&wrapped), EXIT_CAUGHT);
    }

    #[test]
    fn other_errors_exit_with_three() {
        let err = anyhow::anyhow!("something unexpected");
        assert_eq!(exit_code(&err), EXIT_UNKNOWN);

        let source = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let io = anyhow::Error::new(source).context("writing");
        assert_eq!(exit_code(&io), EXIT_UNKNOWN);
    }
}
