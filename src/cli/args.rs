//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, and converts the
//! parsed arguments into packaging [`Settings`].

use crate::bundler::{ModuleSlot, Settings, SettingsBuilder};
use clap::Parser;
use std::path::PathBuf;

/// Packages the NetShrink modules into a Roblox model
#[derive(Parser, Debug)]
#[command(
    name = "netshrink_bundler",
    version,
    about = "Packages the NetShrink modules into a Roblox model (.rbxmx)",
    long_about = "Embeds NetShrink.lua, Compression.lua, Decode.lua and Encode.lua into a single
Roblox XML model with NetShrink as the parent ModuleScript and the other three as its children.

Usage:
  netshrink_bundler
  netshrink_bundler Demo
  netshrink_bundler Demo --source-dir src --output-dir dist

The package is written to <NAME>.rbxmx, replacing any existing file.
Exit code 0 = package written."
)]
pub struct Args {
    /// Name of the root module and of the output file (default: NetShrink)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Directory containing the module sources
    #[arg(short = 's', long, value_name = "DIR", default_value = ".")]
    pub source_dir: PathBuf,

    /// Directory to write the package to
    #[arg(short = 'o', long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Root module source (default: <SOURCE_DIR>/NetShrink.lua)
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Compression module source (default: <SOURCE_DIR>/Compression.lua)
    #[arg(long, value_name = "PATH")]
    pub compression: Option<PathBuf>,

    /// Decode module source (default: <SOURCE_DIR>/Decode.lua)
    #[arg(long, value_name = "PATH")]
    pub decode: Option<PathBuf>,

    /// Encode module source (default: <SOURCE_DIR>/Encode.lua)
    #[arg(long, value_name = "PATH")]
    pub encode: Option<PathBuf>,

    /// Fail instead of warning when a source contains "]]>" or the name contains XML markup
    #[arg(long)]
    pub strict: bool,

    /// Print every step
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Print nothing on success
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        for (flag, path) in self.module_overrides() {
            if path.as_os_str().is_empty() {
                return Err(format!("--{flag} cannot be empty"));
            }
        }

        Ok(())
    }

    /// Build packaging settings from the arguments.
    pub fn settings(&self) -> Settings {
        let mut builder = SettingsBuilder::new()
            .source_dir(&self.source_dir)
            .output_dir(&self.output_dir)
            .strict(self.strict);

        if let Some(name) = &self.name {
            builder = builder.root_name(name.as_str());
        }
        for (slot, path) in self.module_overrides() {
            builder = builder.module_path(slot, path);
        }

        builder.build()
    }

    fn module_overrides(&self) -> impl Iterator<Item = (ModuleSlot, &PathBuf)> {
        [
            (ModuleSlot::Root, &self.root),
            (ModuleSlot::Compression, &self.compression),
            (ModuleSlot::Decode, &self.decode),
            (ModuleSlot::Encode, &self.encode),
        ]
        .into_iter()
        .filter_map(|(slot, path)| path.as_ref().map(|p| (slot, p)))
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(args.verbose, args.quiet);

        Self { output }
    }
}

impl RuntimeConfig {
    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) {
        report(self.output.verbose(message));
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) {
        report(self.output.warn(message));
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) {
        report(self.output.success(message));
    }

    /// Print progress message
    pub fn progress(&self, message: &str) {
        report(self.output.progress(message));
    }

    /// Print indented text
    pub fn indent(&self, message: &str) {
        report(self.output.indent(message));
    }
}

/// Status lines are best-effort; a closed or full terminal never fails the run.
fn report(result: std::io::Result<()>) {
    if let Err(e) = result {
        log::debug!("Failed to write status output: {}", e);
    }
}
