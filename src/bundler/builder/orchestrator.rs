//! Main packaging pipeline.

use super::checksum::calculate_sha256;
use crate::bundler::{
    error::{Error, Result},
    hazard::{ContentHazard, scan_hazards},
    module::ModuleTree,
    package::{build_package, write_package},
    settings::Settings,
};
use std::path::PathBuf;

/// A package written to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BundledArtifact {
    /// Where the package was written.
    pub path: PathBuf,
    /// Document size in bytes.
    pub size: u64,
    /// Hex-encoded SHA-256 of the document.
    pub checksum: String,
    /// Hazards found in the input. Always empty in strict mode.
    pub hazards: Vec<ContentHazard>,
}

/// Runs the load, build and write steps for one [`Settings`].
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Produces the package.
    ///
    /// Steps run strictly in sequence and the first failure aborts. A missing
    /// or unreadable module fails before the output path is touched; in strict
    /// mode so does any content hazard. Otherwise hazards are written verbatim
    /// and returned in [`BundledArtifact::hazards`] for the caller to report.
    pub async fn bundle(&self) -> Result<BundledArtifact> {
        let tree = ModuleTree::load(&self.settings).await?;
        self.bundle_tree(&tree).await
    }

    /// Like [`bundle`](Self::bundle), with sources that are already in memory.
    pub async fn bundle_tree(&self, tree: &ModuleTree) -> Result<BundledArtifact> {
        let hazards = scan_hazards(tree, self.settings.root_name());
        if self.settings.strict() && !hazards.is_empty() {
            return Err(Error::ContentHazard(hazards));
        }

        let output = build_package(
            self.settings.template(),
            tree,
            self.settings.requested_name(),
        );
        let checksum = calculate_sha256(output.document().as_bytes());
        let path = write_package(&output, self.settings.output_dir()).await?;

        Ok(BundledArtifact {
            path,
            size: output.document().len() as u64,
            checksum,
            hazards,
        })
    }
}
