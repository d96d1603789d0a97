//! CLI module for the clay generator
//!
//! ## Usage
//!
//! `clay [FOLDERS]... [-c DIR] [-v MODE]`
//!
//! Each folder argument is one independent generation run: its tree is
//! scanned for test sources and `clay_main.c` + `clay.h` are written back
//! into it. With no folders, the current directory is scanned.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros. Command
//! functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::assets::{AssetStore, DirAssets, EmbeddedAssets};
use crate::builder::HarnessBuilder;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Clay test harness generator
#[derive(Parser, Debug)]
#[command(name = "clay")]
#[command(version = VERSION)]
#[command(about = "Generate a Clay test harness from C test sources", long_about = None)]
pub struct Cli {
    /// Folders to scan for test sources (default: current directory)
    #[arg(value_name = "FOLDERS")]
    pub folders: Vec<PathBuf>,

    /// Load templates and support modules from DIR instead of the
    /// embedded copies
    #[arg(short = 'c', long = "clay-path", value_name = "DIR")]
    pub clay_path: Option<PathBuf>,

    /// Report output style (selects the clay_print_<MODE>.c module)
    #[arg(short = 'v', long = "report-to", value_name = "MODE", default_value = "default")]
    pub print_mode: String,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute one generation run per folder argument.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let folders = if cli.folders.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        cli.folders
    };

    let embedded = EmbeddedAssets;
    let external = cli.clay_path.map(DirAssets::new);
    let assets: &dyn AssetStore = match &external {
        Some(dir) => dir,
        None => &embedded,
    };

    let builder = HarnessBuilder::new(assets, cli.print_mode.as_str());
    for folder in &folders {
        builder
            .generate(folder)
            .map_err(|e| CliError::failure(e.to_string()))?;
    }

    Ok(ExitCode::SUCCESS)
}
