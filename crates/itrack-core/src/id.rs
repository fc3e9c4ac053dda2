//! ID generation for itrack issues
//!
//! Format: isu-xxxxxxxx (8 Crockford base32 lowercase chars).
//! Ids are hash-derived so they are never reused, even after a delete.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Prefix for all issue ids
pub const ID_PREFIX: &str = "isu";

/// Generate a fresh issue ID
///
/// Hashes a v4 UUID plus a nanosecond timestamp, encoded as base32 lowercase.
pub fn generate_id() -> String {
    let uuid = Uuid::new_v4();
    let timestamp = chrono::Utc::now().timestamp_nanos_opt().unwrap_or(0);

    let mut hasher = Sha256::new();
    hasher.update(uuid.as_bytes());
    hasher.update(timestamp.to_le_bytes());

    let hash = hasher.finalize();

    // Take first 5 bytes, encode as base32 lowercase, take first 8 chars
    let encoded = base32::encode(base32::Alphabet::Crockford, &hash[..5])
        .to_lowercase()
        .chars()
        .take(8)
        .collect::<String>();

    format!("{}-{}", ID_PREFIX, encoded)
}

/// Parse an issue ID into prefix and hash parts
pub fn parse_id(id: &str) -> Option<(&str, &str)> {
    let parts: Vec<&str> = id.splitn(2, '-').collect();
    if parts.len() == 2 && !parts[1].is_empty() {
        Some((parts[0], parts[1]))
    } else {
        None
    }
}
