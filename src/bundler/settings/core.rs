//! Core Settings struct and implementations.

use crate::bundler::{module::ModuleSlot, template::DocumentTemplate};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

/// Settings for one packaging run.
///
/// # Examples
///
/// ```
/// use netshrink_bundler::bundler::{ModuleSlot, SettingsBuilder};
/// use std::path::Path;
///
/// let settings = SettingsBuilder::new()
///     .root_name("Demo")
///     .source_dir("src/lua")
///     .output_dir("dist")
///     .build();
///
/// assert_eq!(settings.output_path(), Path::new("dist").join("Demo.rbxmx"));
/// assert_eq!(
///     settings.module_path(ModuleSlot::Decode),
///     Path::new("src/lua").join("Decode.lua")
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Display name of the root module; `None` means the template default.
    pub(super) root_name: Option<String>,

    /// Directory holding the module files.
    pub(super) source_dir: PathBuf,

    /// Directory the package is written to.
    pub(super) output_dir: PathBuf,

    /// Per-slot file paths that replace `source_dir/<default file name>`.
    pub(super) module_paths: HashMap<ModuleSlot, PathBuf>,

    /// Refuse to write when the input would corrupt the document.
    pub(super) strict: bool,

    /// Document skeleton.
    pub(super) template: DocumentTemplate,
}

impl Settings {
    /// Root name as configured, before defaulting.
    pub fn requested_name(&self) -> Option<&str> {
        self.root_name.as_deref()
    }

    /// Root name after defaulting.
    pub fn root_name(&self) -> &str {
        self.template.resolve_name(self.root_name.as_deref())
    }

    /// Directory the package is written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path the given module is read from.
    pub fn module_path(&self, slot: ModuleSlot) -> PathBuf {
        self.module_paths
            .get(&slot)
            .cloned()
            .unwrap_or_else(|| self.source_dir.join(slot.default_file_name()))
    }

    /// Path the package is written to.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.root_name(), self.template.extension()))
    }

    /// Whether content hazards abort the run.
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Document skeleton.
    pub fn template(&self) -> &DocumentTemplate {
        &self.template
    }
}
