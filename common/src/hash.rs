//! Content hashes used to trigger rollouts when dependent configuration changes.
use anyhow::Result;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Hex encoded SHA-256 of the compact JSON encoding of `object`.
///
/// Map types with a stable iteration order (i.e. `BTreeMap`) must be used for the result to be
/// stable across runs.
pub fn object_hash(object: &impl Serialize) -> Result<String> {
    let data = serde_json::to_vec(object)?;
    Ok(hex::encode(Sha256::digest(&data)))
}
