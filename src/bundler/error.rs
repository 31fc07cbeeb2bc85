//! Error types for packaging operations.
//!
//! Every failure is fatal to the invocation and carries the path and slot
//! involved so the caller can report something actionable.

use super::{hazard::ContentHazard, module::ModuleSlot};
use std::{io, path::Path, path::PathBuf};
use thiserror::Error;

/// Result type alias for packaging operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Packaging errors.
#[derive(Error, Debug)]
pub enum Error {
    /// A module source could not be located or read.
    #[error("failed to read {slot} module from {}: {source}", .path.display())]
    Read {
        /// Slot the file was meant to fill
        slot: ModuleSlot,
        /// Path that was read
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: io::Error,
    },

    /// The package file could not be created or written.
    #[error("failed to write package to {}: {source}", .path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: io::Error,
    },

    /// Strict mode found content that would corrupt the document.
    #[error("refusing to write package: {}", describe_hazards(.0))]
    ContentHazard(Vec<ContentHazard>),
}

fn describe_hazards(hazards: &[ContentHazard]) -> String {
    hazards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Attaches packaging context to I/O results.
pub trait ErrorExt<T> {
    /// Maps an I/O failure to [`Error::Read`] for the given slot and path.
    fn read_context(self, slot: ModuleSlot, path: &Path) -> Result<T>;

    /// Maps an I/O failure to [`Error::Write`] for the given destination.
    fn write_context(self, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn read_context(self, slot: ModuleSlot, path: &Path) -> Result<T> {
        self.map_err(|source| Error::Read {
            slot,
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
