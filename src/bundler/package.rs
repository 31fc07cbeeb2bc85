//! Package assembly and output.

use super::{
    error::{Error, Result},
    module::ModuleTree,
    template::DocumentTemplate,
    utils::fs,
};
use std::{
    io,
    path::{Path, PathBuf},
};

/// Assembled package document, ready to be written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageOutput {
    name: String,
    extension: &'static str,
    document: String,
}

impl PackageOutput {
    /// Resolved root name (never empty).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full document text.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// `<name>.<extension>`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }

    /// Consumes the output, returning the document text.
    pub fn into_document(self) -> String {
        self.document
    }
}

/// Fills the template with the module sources and root name.
///
/// Substitutions happen in document order: root source, root name, then the
/// three child sources. Text is inserted verbatim; nothing is escaped. An
/// absent or empty `root_name` is replaced by the template default.
pub fn build_package(
    template: &DocumentTemplate,
    tree: &ModuleTree,
    root_name: Option<&str>,
) -> PackageOutput {
    let name = template.resolve_name(root_name);
    let [compression, decode, encode] = tree.children();
    let slots = [
        tree.root().text(),
        name,
        compression.text(),
        decode.text(),
        encode.text(),
    ];

    let capacity = template.literal_len() + slots.iter().map(|s| s.len()).sum::<usize>();
    let mut document = String::with_capacity(capacity);

    let fragments = template.fragments();
    for (fragment, slot) in fragments.iter().zip(slots) {
        document.push_str(fragment);
        document.push_str(slot);
    }
    document.push_str(fragments[fragments.len() - 1]);

    PackageOutput {
        name: name.to_string(),
        extension: template.extension(),
        document,
    }
}

/// Writes `output` to `<output_dir>/<name>.<extension>`, replacing any existing file.
///
/// The document is written to a temporary sibling and renamed into place, so
/// a failed write never leaves a truncated package behind.
pub async fn write_package(output: &PackageOutput, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(output.file_name());

    if let Err(reason) = validate_name(&output.name) {
        return Err(Error::Write {
            path,
            source: io::Error::new(io::ErrorKind::InvalidInput, reason),
        });
    }

    fs::write_atomic(&path, output.document.as_bytes()).await?;
    log::info!(
        "Wrote {} ({} bytes)",
        path.display(),
        output.document.len()
    );

    Ok(path)
}

/// The root name doubles as a file stem, so it must be a single plain path component.
fn validate_name(name: &str) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err("package name is empty".to_string());
    }
    if name == "." || name == ".." {
        return Err(format!("{name:?} is not a valid package name"));
    }
    if let Some(c) = name.chars().find(|c| matches!(c, '/' | '\\' | '\0')) {
        return Err(format!(
            "package name {name:?} contains invalid character {c:?}"
        ));
    }
    Ok(())
}
