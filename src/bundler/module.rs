//! Module sources and the fixed module tree.

use super::{
    error::{ErrorExt, Result},
    settings::Settings,
};
use std::{fmt, path::Path};

/// One of the four module positions in the package.
///
/// `Root` is the parent container; the other three are its children, in the
/// order they appear in the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModuleSlot {
    /// Top-level module; its display name is supplied by the caller.
    Root,
    /// First child.
    Compression,
    /// Second child.
    Decode,
    /// Third child.
    Encode,
}

impl ModuleSlot {
    /// All slots in document order.
    pub const ALL: [ModuleSlot; 4] = [
        ModuleSlot::Root,
        ModuleSlot::Compression,
        ModuleSlot::Decode,
        ModuleSlot::Encode,
    ];

    /// File name looked up in the source directory when no path override is set.
    pub fn default_file_name(self) -> &'static str {
        match self {
            ModuleSlot::Root => "NetShrink.lua",
            ModuleSlot::Compression => "Compression.lua",
            ModuleSlot::Decode => "Decode.lua",
            ModuleSlot::Encode => "Encode.lua",
        }
    }

    /// Display name baked into the document. `None` for the root.
    pub fn fixed_name(self) -> Option<&'static str> {
        match self {
            ModuleSlot::Root => None,
            ModuleSlot::Compression => Some("Compression"),
            ModuleSlot::Decode => Some("Decode"),
            ModuleSlot::Encode => Some("Encode"),
        }
    }
}

impl fmt::Display for ModuleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ModuleSlot::Root => "root",
            ModuleSlot::Compression => "compression",
            ModuleSlot::Decode => "decode",
            ModuleSlot::Encode => "encode",
        };
        f.write_str(label)
    }
}

/// Raw text of one module. Never parsed or validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleSource {
    slot: ModuleSlot,
    text: String,
}

impl ModuleSource {
    /// Wraps already-loaded text.
    pub fn new(slot: ModuleSlot, text: impl Into<String>) -> Self {
        Self {
            slot,
            text: text.into(),
        }
    }

    /// Slot this source fills.
    pub fn slot(&self) -> ModuleSlot {
        self.slot
    }

    /// Source text, verbatim.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Reads the whole file at `path` as the source for `slot`.
///
/// Missing, unreadable and non-UTF-8 files all fail with [`Error::Read`](super::Error::Read).
pub async fn load_module(slot: ModuleSlot, path: &Path) -> Result<ModuleSource> {
    let text = tokio::fs::read_to_string(path)
        .await
        .read_context(slot, path)?;

    log::debug!(
        "Loaded {} module from {} ({} bytes)",
        slot,
        path.display(),
        text.len()
    );

    Ok(ModuleSource { slot, text })
}

/// Root module with exactly three children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleTree {
    root: ModuleSource,
    children: [ModuleSource; 3],
}

impl ModuleTree {
    /// Builds a tree from four source texts in document order.
    pub fn new(
        root: impl Into<String>,
        compression: impl Into<String>,
        decode: impl Into<String>,
        encode: impl Into<String>,
    ) -> Self {
        Self {
            root: ModuleSource::new(ModuleSlot::Root, root),
            children: [
                ModuleSource::new(ModuleSlot::Compression, compression),
                ModuleSource::new(ModuleSlot::Decode, decode),
                ModuleSource::new(ModuleSlot::Encode, encode),
            ],
        }
    }

    /// Loads all four modules at the paths given by `settings`.
    ///
    /// Files are read one after another in document order; the first failure
    /// aborts the load.
    pub async fn load(settings: &Settings) -> Result<Self> {
        let root = load_module(ModuleSlot::Root, &settings.module_path(ModuleSlot::Root)).await?;
        let compression = load_module(
            ModuleSlot::Compression,
            &settings.module_path(ModuleSlot::Compression),
        )
        .await?;
        let decode =
            load_module(ModuleSlot::Decode, &settings.module_path(ModuleSlot::Decode)).await?;
        let encode =
            load_module(ModuleSlot::Encode, &settings.module_path(ModuleSlot::Encode)).await?;

        Ok(Self {
            root,
            children: [compression, decode, encode],
        })
    }

    /// Root module.
    pub fn root(&self) -> &ModuleSource {
        &self.root
    }

    /// Child modules in document order.
    pub fn children(&self) -> &[ModuleSource; 3] {
        &self.children
    }

    /// All four modules in document order.
    pub fn iter(&self) -> impl Iterator<Item = &ModuleSource> {
        std::iter::once(&self.root).chain(self.children.iter())
    }
}
