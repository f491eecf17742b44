//! Pure rule execution (no IO).
//!
//! Input: a per-node context assembled by an external AST visitor, and a
//! ruleset resolved by an external rule registry.
//! Output: normalized findings plus per-node severity/confidence score
//! contributions.

#![forbid(unsafe_code)]

pub mod context;
pub mod report;
pub mod ruleset;

mod engine;
mod fingerprint;

#[cfg(test)]
mod props;
#[cfg(test)]
mod test_support;

pub use engine::{Runner, normalize};
pub use fingerprint::finding_fingerprint;
