//! Ordered ranking levels for severity and confidence.
//!
//! Both rankings share the same four tiers and the same numeric weights.
//! `index` is the position in the ranking (used to address score
//! accumulator slots); `weight` is the contribution one finding at that
//! tier adds to the slot.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of ranking levels, shared by severity and confidence.
pub const RANKING_LEN: usize = 4;

/// How damaging a finding is if the flagged construct is exploitable.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    #[default]
    Undefined,
    Low,
    Medium,
    High,
}

impl Severity {
    /// Position of this level in the ranking, `0..RANKING_LEN`.
    pub fn index(self) -> usize {
        match self {
            Severity::Undefined => 0,
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
        }
    }

    /// Score weight contributed per accepted finding at this level.
    pub fn weight(self) -> u32 {
        match self {
            Severity::Undefined => 1,
            Severity::Low => 3,
            Severity::Medium => 5,
            Severity::High => 10,
        }
    }
}

/// How certain the producing rule is that the finding is real.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    #[default]
    Undefined,
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Position of this level in the ranking, `0..RANKING_LEN`.
    pub fn index(self) -> usize {
        match self {
            Confidence::Undefined => 0,
            Confidence::Low => 1,
            Confidence::Medium => 2,
            Confidence::High => 3,
        }
    }

    /// Score weight contributed per accepted finding at this level.
    pub fn weight(self) -> u32 {
        match self {
            Confidence::Undefined => 1,
            Confidence::Low => 3,
            Confidence::Medium => 5,
            Confidence::High => 10,
        }
    }
}
