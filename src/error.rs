//! Top-level error types.
//!
//! Wraps packaging and CLI failures and attaches recovery hints for the user.

use crate::bundler::{self, ContentHazard};
use std::io;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Packaging errors
    #[error(transparent)]
    Bundler(#[from] bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            BundlerError::Bundler(bundler::Error::Read { slot, path, source }) => {
                let mut hints = Vec::new();
                match source.kind() {
                    io::ErrorKind::NotFound => hints.push(format!(
                        "Check that {} exists, or pass --source-dir / --{} to point at it",
                        path.display(),
                        slot
                    )),
                    io::ErrorKind::PermissionDenied => {
                        hints.push(format!("Check read permissions on {}", path.display()))
                    }
                    io::ErrorKind::InvalidData => {
                        hints.push("Module sources must be UTF-8 text".to_string())
                    }
                    _ => {}
                }
                hints
            }
            BundlerError::Bundler(bundler::Error::Write { path, source }) => match source.kind() {
                io::ErrorKind::InvalidInput => vec![
                    "The package name is used as the file name; drop any path separators"
                        .to_string(),
                ],
                io::ErrorKind::PermissionDenied => vec![format!(
                    "Check write permissions on the directory containing {}",
                    path.display()
                )],
                _ => vec!["Check that the output directory is writable and has free space".to_string()],
            },
            BundlerError::Bundler(bundler::Error::ContentHazard(hazards)) => {
                let mut hints: Vec<String> = hazards
                    .iter()
                    .map(|hazard| match hazard {
                        ContentHazard::CdataTerminator { slot, .. } => format!(
                            "Split \"]]>\" in the {slot} module (e.g. \"]]\" .. \">\") or run without --strict"
                        ),
                        ContentHazard::NameMarkup { .. } => {
                            "Choose a root name without '<', '>' or '&'".to_string()
                        }
                    })
                    .collect();
                hints.dedup();
                hints
            }
            BundlerError::Cli(_) => vec!["Run with --help to see the accepted arguments".to_string()],
        }
    }
}
