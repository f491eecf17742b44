//! Shared builders for engine tests.

use std::collections::BTreeMap;

use codevet_types::{Confidence, Finding, Severity};

use crate::context::NodeContext;
use crate::ruleset::{RegisteredRule, RuleSet};

pub fn node_at(filename: &str, lineno: u32) -> NodeContext {
    NodeContext {
        filename: filename.to_string(),
        lineno: Some(lineno),
        linerange: vec![lineno],
        node: BTreeMap::new(),
    }
}

/// A rule that always produces a finding at the given levels, leaving
/// identity and location for the runner to backfill.
pub fn finding_rule(
    name: &str,
    id: &str,
    severity: Severity,
    confidence: Confidence,
) -> RegisteredRule {
    let message = format!("{name} fired");
    RegisteredRule::from_fn(name, id, move |_, _| {
        Ok(Some(Finding::new(severity, confidence, message.clone())))
    })
}

/// A rule that never produces a finding.
pub fn silent_rule(name: &str, id: &str) -> RegisteredRule {
    RegisteredRule::from_fn(name, id, |_, _| Ok(None))
}

/// A rule that always fails with the given error text.
pub fn failing_rule(name: &str, id: &str, text: &str) -> RegisteredRule {
    let text = text.to_string();
    RegisteredRule::from_fn(name, id, move |_, _| Err(anyhow::anyhow!("{text}")))
}

/// A rule that panics instead of returning.
pub fn panicking_rule(name: &str, id: &str) -> RegisteredRule {
    RegisteredRule::from_fn(name, id, |_, _| panic!("unexpected node shape"))
}

pub fn ruleset_for(check_type: &str, rules: Vec<RegisteredRule>) -> RuleSet {
    let mut set = RuleSet::new();
    for rule in rules {
        set.register(check_type, rule);
    }
    set
}
