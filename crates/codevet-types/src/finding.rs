//! The normalized finding record.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::ranking::{Confidence, Severity};

/// One detected issue.
///
/// Rule code fills in severity, confidence, and message (plus any
/// rule-specific payload); the runner completes identity and location
/// before the finding is recorded. A finding read back from a runner is
/// fully normalized and serializes to a flat record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub severity: Severity,
    pub confidence: Confidence,
    pub message: String,

    /// Backfilled from the originating context during normalization.
    #[serde(default)]
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lineno: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub linerange: Vec<u32>,

    /// Registered name of the producing rule; always stamped during
    /// normalization, any value set by the rule is overwritten.
    #[serde(default)]
    pub rule_name: String,
    /// Registered identifier of the producing rule; defaulted during
    /// normalization when the rule leaves it empty.
    #[serde(default)]
    pub rule_id: String,

    /// Stable identifier for dedup and trending. Hash of
    /// `rule_id + filename + (line?) + message`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Rule-specific structured payload (kept open-ended for forward
    /// compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

impl Finding {
    /// A partially filled finding, as rule code produces it.
    pub fn new(severity: Severity, confidence: Confidence, message: impl Into<String>) -> Self {
        Self {
            severity,
            confidence,
            message: message.into(),
            filename: String::new(),
            lineno: None,
            linerange: Vec::new(),
            rule_name: String::new(),
            rule_id: String::new(),
            fingerprint: None,
            data: JsonValue::Null,
        }
    }

    /// Report the finding at a specific line instead of the node's line.
    pub fn with_lineno(mut self, lineno: u32) -> Self {
        self.lineno = Some(lineno);
        self
    }

    /// Set an explicit rule identifier, overriding the registered default.
    pub fn with_rule_id(mut self, rule_id: impl Into<String>) -> Self {
        self.rule_id = rule_id.into();
        self
    }

    pub fn with_data(mut self, data: JsonValue) -> Self {
        self.data = data;
        self
    }

    /// Whether the finding meets the given minimum severity and confidence,
    /// for downstream report filtering.
    pub fn reported_at(&self, severity: Severity, confidence: Confidence) -> bool {
        self.severity >= severity && self.confidence >= confidence
    }
}
