//! Main entry point for the epubfix CLI application.
//!
//! Parses arguments, runs the repackaging pass and maps its outcome to the
//! process exit code: `0` on success, `1` on any failure.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use epubfix::{Cli, Progress, RepackReport, Repackager};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are not failures
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        }
    };

    init_tracing(&cli);

    match run(&cli) {
        Ok(report) => {
            if !cli.quiet {
                println!();
            }
            println!("Success! Fixed file saved at: {}", report.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, honoring `RUST_LOG` when set.
fn init_tracing(cli: &Cli) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .init();
}

/// Repackage the input named on the command line.
///
/// Progress lines go to stdout unless `-q` is given.
fn run(cli: &Cli) -> Result<RepackReport> {
    let input = cli.input_path();
    let output = cli.output_path();
    let quiet = cli.quiet;

    if !quiet {
        println!("Opening TAR: {}", input.display());
    }

    Repackager::new(cli.options())
        .on_progress(move |event| {
            if !quiet {
                print_progress(event);
            }
        })
        .run(&input, &output)
        .with_context(|| format!("failed to repackage {}", input.display()))
}

fn print_progress(event: Progress<'_>) {
    match event {
        Progress::RootDetected(prefix) => {
            println!("Detected root directory: {prefix} (it will be stripped)")
        }
        Progress::AlreadyAtRoot => println!("The file is already at the root level."),
        Progress::Writing(path) => println!("Creating ZIP: {}", path.display()),
        Progress::Added(name) => println!("  + {name}"),
    }
}
