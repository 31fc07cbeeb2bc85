//! Package orchestration.
//!
//! [`Bundler`] runs the whole pipeline for one [`Settings`](crate::bundler::Settings):
//!
//! 1. Load the four module sources
//! 2. Scan them for content that would corrupt the document
//! 3. Fill the template
//! 4. Write the package and report a [`BundledArtifact`]
//!
//! # Example
//!
//! ```no_run
//! use netshrink_bundler::bundler::{Bundler, SettingsBuilder};
//!
//! # async fn example() -> netshrink_bundler::bundler::Result<()> {
//! let settings = SettingsBuilder::new().root_name("Demo").build();
//! let artifact = Bundler::new(settings).bundle().await?;
//!
//! println!("Created: {} ({} bytes)", artifact.path.display(), artifact.size);
//! println!("SHA256: {}", artifact.checksum);
//! # Ok(())
//! # }
//! ```

mod checksum;
mod orchestrator;

pub use checksum::calculate_sha256;
pub use orchestrator::{BundledArtifact, Bundler};
