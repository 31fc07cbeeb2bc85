//! Package checksum calculation.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of `contents` (64 lowercase characters).
pub fn calculate_sha256(contents: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(contents);
    format!("{:x}", hasher.finalize())
}
