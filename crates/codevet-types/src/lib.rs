//! Stable DTOs and IDs used across the codevet workspace.
//!
//! This crate is intentionally boring:
//! - ranking enums (severity, confidence) with score weights
//! - the normalized finding record
//! - stable check-type identifiers

#![forbid(unsafe_code)]

pub mod finding;
pub mod ids;
pub mod ranking;

pub use finding::Finding;
pub use ranking::{Confidence, RANKING_LEN, Severity};
