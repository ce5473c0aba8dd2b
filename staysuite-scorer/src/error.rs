//! Error types raised while building or loading rule tables.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while validating or loading a [`RuleTable`](crate::RuleTable).
#[derive(Debug, Error)]
pub enum RuleTableError {
    /// A bonus rule is malformed.
    #[error("bonus rule {index} is invalid: {reason}")]
    InvalidRule {
        /// Position of the rule in the table.
        index: usize,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// Opening or reading the rule file failed.
    #[error("failed to read rule table at {path}")]
    Open {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The rule file is not a valid JSON rule table.
    #[error("failed to parse rule table at {path}")]
    Parse {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}
