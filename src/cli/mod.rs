//! Command line interface for the NetShrink bundler.
//!
//! Parses arguments, runs the packaging pipeline and reports progress.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::{
    bundler::{Bundler, ModuleSlot},
    error::{CliError, Result},
};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    execute(Args::parse_args()).await
}

/// Runs the bundler for already-parsed arguments.
pub async fn execute(args: Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let runtime_config = RuntimeConfig::from(&args);
    let settings = args.settings();

    runtime_config.progress(&format!("Packaging {}", settings.root_name()));
    for slot in ModuleSlot::ALL {
        runtime_config.verbose_println(&format!(
            "  {:<12} {}",
            slot.to_string(),
            settings.module_path(slot).display()
        ));
    }

    let artifact = Bundler::new(settings).bundle().await?;

    for hazard in &artifact.hazards {
        runtime_config.warn(&format!("{hazard}; the package will be malformed"));
    }
    runtime_config.success(&format!(
        "Wrote {} ({} bytes)",
        artifact.path.display(),
        artifact.size
    ));
    runtime_config.indent(&format!("SHA256: {}", artifact.checksum));

    Ok(0)
}
