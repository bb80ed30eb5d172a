//! Fatal configuration errors
//!
//! Everything here aborts the run: configuration is read once at startup,
//! so a broken file or a violated lookup contract is surfaced loudly
//! instead of degrading into silent non-matches. Each variant carries an
//! identifying numeric code in its message.

use std::path::PathBuf;
use thiserror::Error;

/// A fatal configuration problem.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file {}: {source} (error 1493289135)", .path.display())]
    UnreadableFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {}: {message} (error 1493289136)", .path.display())]
    InvalidYaml { path: PathBuf, message: String },

    #[error("Invalid glob pattern \"{pattern}\": {message} (error 1493289137)")]
    InvalidGlob { pattern: String, message: String },

    #[error("Identifier \"{0}\" is not configured to be removed (error 1493289133)")]
    NotRemoved(String),

    #[error("Classname \"{0}\" is not legacy (error 1493289134)")]
    NotLegacy(String),

    #[error("Configured feature \"{0}\" is not a known feature (error 1493115488)")]
    UnknownFeature(String),

    #[error("Failed to write mapping file {}: {source} (error 1493289138)", .path.display())]
    PersistFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}
