use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a normalized finding.
///
/// Identity fields:
/// - rule_id
/// - filename (as reported by the parser)
/// - lineno (if present)
/// - message
pub fn finding_fingerprint(
    rule_id: &str,
    filename: &str,
    lineno: Option<u32>,
    message: &str,
) -> String {
    let line = lineno.map(|l| l.to_string()).unwrap_or_default();
    let canonical = format!("{rule_id}|{filename}|{line}|{message}");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}
