//! File system utilities for packaging.
//!
//! Writes go through a temporary sibling file that is renamed into place, so
//! readers only ever see the previous file or the complete new one.

use crate::bundler::error::{ErrorExt, Result};
use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::{fs, io::AsyncWriteExt};

/// Atomically replaces the file at `path` with `contents`.
///
/// Creates the parent directory if needed. Any existing file is overwritten
/// without warning. On failure the temporary file is removed and the error is
/// reported against `path`.
pub async fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.write_context(path)?;
    }

    let temp_path = temp_sibling(path);

    if let Err(e) = write_synced(&temp_path, contents).await {
        discard(&temp_path).await;
        return Err(e).write_context(path);
    }

    if let Err(e) = fs::rename(&temp_path, path).await {
        discard(&temp_path).await;
        return Err(e).write_context(path);
    }

    Ok(())
}

/// Hidden, uniquely named file in the same directory as `path`.
///
/// Fixed length, independent of the target's name.
fn temp_sibling(path: &Path) -> PathBuf {
    path.with_file_name(format!(".{}.tmp", uuid::Uuid::new_v4().simple()))
}

async fn write_synced(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(contents).await?;
    file.flush().await?;
    file.sync_all().await
}

async fn discard(path: &Path) {
    match fs::remove_file(path).await {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => log::warn!("Failed to remove temporary file {}: {}", path.display(), e),
    }
}
