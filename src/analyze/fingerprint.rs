// src/analyze/fingerprint.rs
use sha2::{Digest, Sha256};
use std::fmt::Write as _;

/// SHA-256 over `title|url`, lower-case hex. No normalization: case and whitespace count.
pub fn fingerprint(title: &str, url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(b"|");
    hasher.update(url.as_bytes());
    let digest = hasher.finalize();

    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest.iter() {
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}
