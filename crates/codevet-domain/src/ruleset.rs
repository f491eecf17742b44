//! Rule interface and the per-check-type rule registry.

use std::collections::BTreeMap;
use std::fmt;

use codevet_types::Finding;
use serde_json::Value as JsonValue;

use crate::context::Context;

/// Per-rule configuration resolved by the external configuration loader.
///
/// Every rule receives a config; rules registered without one get the
/// default (null) value, so a single call signature covers both variants.
#[derive(Clone, Debug, Default)]
pub struct RuleConfig(JsonValue);

impl RuleConfig {
    pub fn new(value: JsonValue) -> Self {
        Self(value)
    }

    /// Configuration field, or `None` when absent (including the default
    /// null config).
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_null()
    }

    pub fn value(&self) -> &JsonValue {
        &self.0
    }
}

/// Outcome of one rule invocation: a finding, nothing, or a fault.
///
/// `Ok(None)` is the common case and not an error; `Err` is isolated by
/// the runner so one faulty rule cannot abort a scan.
pub type RuleResult = anyhow::Result<Option<Finding>>;

/// One independent detection heuristic.
pub trait Rule: Send + Sync {
    fn check(&self, ctx: &Context, config: &RuleConfig) -> RuleResult;
}

impl<F> Rule for F
where
    F: Fn(&Context, &RuleConfig) -> RuleResult + Send + Sync,
{
    fn check(&self, ctx: &Context, config: &RuleConfig) -> RuleResult {
        self(ctx, config)
    }
}

/// A rule plus the registration metadata the runner stamps onto findings.
pub struct RegisteredRule {
    name: String,
    id: String,
    config: RuleConfig,
    rule: Box<dyn Rule>,
}

impl RegisteredRule {
    pub fn new(name: impl Into<String>, id: impl Into<String>, rule: impl Rule + 'static) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            config: RuleConfig::default(),
            rule: Box::new(rule),
        }
    }

    /// Register a plain function or closure as a rule.
    pub fn from_fn<F>(name: impl Into<String>, id: impl Into<String>, rule: F) -> Self
    where
        F: Fn(&Context, &RuleConfig) -> RuleResult + Send + Sync + 'static,
    {
        Self::new(name, id, rule)
    }

    /// Attach resolved configuration to the rule.
    pub fn with_config(mut self, config: RuleConfig) -> Self {
        self.config = config;
        self
    }

    /// Registered rule name, stamped onto every finding it produces.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered rule identifier, the default for `Finding::rule_id`.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn check(&self, ctx: &Context) -> RuleResult {
        self.rule.check(ctx, &self.config)
    }
}

impl fmt::Debug for RegisteredRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredRule")
            .field("name", &self.name)
            .field("id", &self.id)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Rules grouped by check type.
///
/// Registration order within a check type is execution order; the runner
/// depends on it for deterministic results and scores.
#[derive(Debug, Default)]
pub struct RuleSet {
    by_check_type: BTreeMap<String, Vec<RegisteredRule>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, check_type: impl Into<String>, rule: RegisteredRule) {
        self.by_check_type
            .entry(check_type.into())
            .or_default()
            .push(rule);
    }

    /// Rules registered for `check_type`, in registration order. An unknown
    /// check type resolves to the empty slice.
    pub fn rules_for(&self, check_type: &str) -> &[RegisteredRule] {
        self.by_check_type
            .get(check_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.by_check_type.values().all(Vec::is_empty)
    }
}
