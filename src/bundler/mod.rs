//! Packaging engine.
//!
//! Embeds four Luau module sources into the fixed Roblox XML model skeleton:
//! a root `ModuleScript` with `Compression`, `Decode` and `Encode` children.
//! Sources are transported verbatim inside CDATA blocks and never inspected
//! beyond an optional scan for sequences that would break the XML.

pub mod builder;
pub mod error;
pub mod hazard;
pub mod module;
pub mod package;
pub mod settings;
pub mod template;
pub mod utils;

pub use builder::{BundledArtifact, Bundler};
pub use error::{Error, ErrorExt, Result};
pub use hazard::{ContentHazard, scan_hazards};
pub use module::{ModuleSlot, ModuleSource, ModuleTree, load_module};
pub use package::{PackageOutput, build_package, write_package};
pub use settings::{Settings, SettingsBuilder};
pub use template::{CDATA_TERMINATOR, DocumentTemplate, ROBLOX_MODEL};
