//! NetShrink bundler library
//!
//! Packages the NetShrink Luau modules (the root module plus its
//! `Compression`, `Decode` and `Encode` children) into a single Roblox XML
//! model file that Studio can import.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
