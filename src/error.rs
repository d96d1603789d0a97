//! Generator error taxonomy
//!
//! One-shot batch tool: every variant is fatal and surfaces immediately.
//! The CLI layer turns these into a user-facing message plus exit code.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum GenError {
    /// The scanned tree contained no suite with at least one ordinary test.
    /// Raised before any output file is written.
    #[error("No tests found under \"{}\"", .root.display())]
    NoSuites { root: PathBuf },

    /// Two source units produced the same canonical suite name.
    #[error("suite \"{name}\" was registered twice")]
    DuplicateSuite { name: String },

    /// A template or support module is missing from the asset store.
    #[error("missing asset \"{name}\"")]
    MissingAsset { name: String },

    /// A template referenced a placeholder the renderer has no value for.
    #[error("template placeholder \"${{{name}}}\" has no value")]
    UnresolvedPlaceholder { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for generator operations.
pub type GenResult<T> = Result<T, GenError>;
