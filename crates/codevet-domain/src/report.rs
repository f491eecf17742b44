//! Score accumulation and internal diagnostics.

use codevet_types::{Finding, RANKING_LEN};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Severity- and confidence-weighted score totals for accepted findings.
///
/// Index `i` in each sequence corresponds to ranking level `i`; entries
/// only ever grow while findings are accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Scores {
    pub severity: [u32; RANKING_LEN],
    pub confidence: [u32; RANKING_LEN],
}

impl Scores {
    /// Add one accepted finding's weights at the slots of its levels.
    pub fn record(&mut self, finding: &Finding) {
        self.severity[finding.severity.index()] += finding.severity.weight();
        self.confidence[finding.confidence.index()] += finding.confidence.weight();
    }

    /// Element-wise sum, for folding per-node scores into per-file and
    /// per-scan totals.
    pub fn merge(&mut self, other: &Scores) {
        for (slot, value) in self.severity.iter_mut().zip(other.severity) {
            *slot += value;
        }
        for (slot, value) in self.confidence.iter_mut().zip(other.confidence) {
            *slot += value;
        }
    }

    pub fn is_zero(&self) -> bool {
        self.severity.iter().all(|&v| v == 0) && self.confidence.iter().all(|&v| v == 0)
    }
}

/// Internal error captured while a rule ran.
///
/// Surfaced once by the external scan summary ("N internal errors
/// occurred"), never mid-scan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RuleDiagnostic {
    pub rule_name: String,
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lineno: Option<u32>,
    /// Rendered error chain (or panic payload) of the fault.
    pub error: String,
}
