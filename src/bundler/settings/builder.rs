//! Builder for constructing Settings.

use super::Settings;
use crate::bundler::{
    module::ModuleSlot,
    template::{DocumentTemplate, ROBLOX_MODEL},
};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

/// Builder for constructing [`Settings`].
///
/// Every field has a default: the current directory for sources and output,
/// the template's default root name, the NetShrink model template, and
/// non-strict hazard handling.
#[derive(Debug)]
pub struct SettingsBuilder {
    root_name: Option<String>,
    source_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    module_paths: HashMap<ModuleSlot, PathBuf>,
    strict: bool,
    template: DocumentTemplate,
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self {
            root_name: None,
            source_dir: None,
            output_dir: None,
            module_paths: HashMap::new(),
            strict: false,
            template: ROBLOX_MODEL,
        }
    }
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the root module's display name, which is also the output file stem.
    ///
    /// An empty name falls back to the template default.
    pub fn root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = Some(name.into());
        self
    }

    /// Sets the directory the four module files are read from.
    ///
    /// Default: `.`
    pub fn source_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the directory the package is written to.
    ///
    /// Default: `.`
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Reads `slot` from `path` instead of the source directory.
    pub fn module_path<P: AsRef<Path>>(mut self, slot: ModuleSlot, path: P) -> Self {
        self.module_paths.insert(slot, path.as_ref().to_path_buf());
        self
    }

    /// Aborts before writing when the input would corrupt the document.
    ///
    /// Default: false (hazards are logged and the package is written anyway)
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Replaces the document skeleton.
    ///
    /// Default: [`ROBLOX_MODEL`]
    pub fn template(mut self, template: DocumentTemplate) -> Self {
        self.template = template;
        self
    }

    /// Builds the settings.
    pub fn build(self) -> Settings {
        Settings {
            root_name: self.root_name,
            source_dir: self.source_dir.unwrap_or_else(|| PathBuf::from(".")),
            output_dir: self.output_dir.unwrap_or_else(|| PathBuf::from(".")),
            module_paths: self.module_paths,
            strict: self.strict,
            template: self.template,
        }
    }
}
