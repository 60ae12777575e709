// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Cytally error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Repository identifier without the expected `org-` prefix separator
    #[error("malformed repository identifier (expected a hyphenated owner/name): {identifier}")]
    MalformedRepoIdentifier { identifier: String },

    /// Manifest file unreadable or not the expected JSON shape
    #[error("manifest error: {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Walker error
    #[error("walk error: {message}")]
    Walk { message: String },
}

/// Result type using cytally Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Scan completed with no failures
    Success = 0,
    /// Scan completed but some sources failed (strict mode)
    ScanFailed = 1,
    /// Argument or input-shape error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::MalformedRepoIdentifier { .. } | Error::Manifest { .. } | Error::Argument(_) => {
                ExitCode::ConfigError
            }
            Error::Io { .. } | Error::Walk { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
