// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// convert-tasting-webp — converts every JPEG/PNG in
// `<install-root>/server/public/media/dishes/tasting/` to a WEBP sibling.
//
// Entry point. Initialises logging, locates the install root from the
// executable path, runs the batch, and maps failures to exit status 1.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use mediawerk_convert::BatchConverter;
use mediawerk_core::config::install_root_for;
use mediawerk_core::error::{MediawerkError, Result};
use mediawerk_core::human_errors::{Stage, humanize_error};
use mediawerk_core::{ConverterConfig, RunSummary};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    match run() {
        Ok(summary) => {
            tracing::info!(converted = summary.converted(), "done");
            ExitCode::SUCCESS
        }
        Err(err) => report(&err),
    }
}

fn run() -> Result<RunSummary> {
    let config = ConverterConfig::for_install_root(install_root()?);
    tracing::debug!(target_dir = %config.target_dir.display(), "resolved target folder");
    BatchConverter::new(config)?.run()
}

/// Two levels above the running executable.
fn install_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe = exe.canonicalize().unwrap_or(exe);
    install_root_for(&exe).map(PathBuf::from).ok_or_else(|| {
        MediawerkError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("no install root above {}", exe.display()),
        ))
    })
}

/// Print the diagnostic for `err` and pick the exit status.
///
/// Startup diagnostics go to stdout alongside the progress lines; a failure
/// mid-run is reported on stderr.
fn report(err: &MediawerkError) -> ExitCode {
    let human = humanize_error(err);
    match human.stage {
        Stage::Environment | Stage::Configuration => println!("{}", human.message),
        Stage::Conversion => {
            tracing::warn!(suggestion = %human.suggestion, "conversion aborted");
            eprintln!("Error: {}", human.message);
        }
    }
    tracing::debug!(error = ?err, suggestion = %human.suggestion, "exiting");
    ExitCode::from(human.exit_code)
}
