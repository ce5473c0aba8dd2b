//! Error types emitted by the StaySuite CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use staysuite_core::{QuoteError, UnknownCategory};
use staysuite_scorer::RuleTableError;
use thiserror::Error;

/// Errors emitted by the StaySuite CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without the leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A referenced input path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag that named the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag that named the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag that named the path.
        field: &'static str,
        /// The path being inspected.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Reading the catalog file failed.
    #[error("failed to read catalog at {path:?}: {source}")]
    OpenCatalog {
        /// Catalog file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The catalog file is not a valid listing array.
    #[error("failed to parse catalog JSON at {path:?}: {source}")]
    ParseCatalog {
        /// Catalog file path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Loading a custom rule table failed.
    #[error(transparent)]
    LoadRules(#[from] RuleTableError),
    /// The `--category` value is not a known category.
    #[error(transparent)]
    InvalidCategory(#[from] UnknownCategory),
    /// No listing has the requested identifier.
    #[error("no listing with id '{id}' in the catalog")]
    UnknownListing {
        /// Requested identifier.
        id: String,
    },
    /// The stay could not be quoted.
    #[error(transparent)]
    Quote(#[from] QuoteError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
