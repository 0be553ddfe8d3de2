//! StereoPair CLI - pairwise stereo merging of WAV files
//!
//! Merges every unordered pair of `.wav` files in a source directory into a
//! two-channel WAV file in a target directory.

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use stereopair_cli::commands;
use stereopair_cli::logging;

/// StereoPair - merge every pair of WAV files into a stereo file
#[derive(Parser)]
#[command(name = "stereopair")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing the input .wav files
    source_dir: PathBuf,

    /// Directory to write merged files to (created if absent)
    target_dir: PathBuf,

    /// Output a machine-readable JSON batch report (no colored output)
    #[arg(long)]
    json: bool,

    /// Also write the JSON batch report to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Enable debug logging on stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let result = commands::merge_all::run(
        &cli.source_dir,
        &cli.target_dir,
        cli.json,
        cli.report.as_deref(),
    );

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
