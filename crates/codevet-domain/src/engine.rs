//! The runner: executes registered rules against per-node contexts.

use std::any::Any;
use std::collections::BTreeSet;
use std::panic::{self, AssertUnwindSafe};

use anyhow::anyhow;
use codevet_types::Finding;

use crate::context::{Context, NodeContext};
use crate::fingerprint::finding_fingerprint;
use crate::report::{RuleDiagnostic, Scores};
use crate::ruleset::{RegisteredRule, RuleSet};

/// Executes the rules registered for one check type against one node.
///
/// `results` and `diagnostics` accumulate across calls: the AST visitor
/// issues one [`Runner::run_rules`] call per applicable node and reads the
/// collected findings back after the walk. Parallel scans over multiple
/// files need one runner per file; the ruleset and suppression set are
/// read-only for the lifetime of the runner.
pub struct Runner<'rs> {
    ruleset: &'rs RuleSet,
    debug: bool,
    nosec_lines: BTreeSet<u32>,
    results: Vec<Finding>,
    diagnostics: Vec<RuleDiagnostic>,
}

impl<'rs> Runner<'rs> {
    /// `debug` turns rule faults fatal; it is a local debugging aid, never
    /// set during normal operation.
    pub fn new(ruleset: &'rs RuleSet, debug: bool, nosec_lines: BTreeSet<u32>) -> Self {
        Self {
            ruleset,
            debug,
            nosec_lines,
            results: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Run every rule registered for `check_type` against `raw`, in
    /// registration order.
    ///
    /// Returns the severity/confidence score contributions of the findings
    /// accepted during this call. With `debug` off this never fails: a rule
    /// fault (error or panic) is recorded as a diagnostic and the remaining
    /// rules still run. With `debug` on the first fault aborts the run and
    /// propagates to the caller.
    pub fn run_rules(&mut self, raw: &NodeContext, check_type: &str) -> anyhow::Result<Scores> {
        let mut scores = Scores::default();

        let ruleset = self.ruleset;
        for rule in ruleset.rules_for(check_type) {
            // Fresh copy per invocation: one rule's view of the node must
            // never alias another's.
            let context = Context::new(raw.clone());

            let outcome = match panic::catch_unwind(AssertUnwindSafe(|| rule.check(&context))) {
                Ok(result) => result,
                Err(payload) => Err(anyhow!("rule panicked: {}", panic_text(payload.as_ref()))),
            };

            match outcome {
                Err(err) => {
                    self.record_fault(rule, raw, &err);
                    if self.debug {
                        return Err(err);
                    }
                }
                Ok(None) => {}
                Ok(Some(finding)) => {
                    // Suppression honors both the line the rule reported and
                    // the node's own line; a multi-line construct may be
                    // annotated on either.
                    if self.is_suppressed(finding.lineno) || self.is_suppressed(raw.lineno) {
                        continue;
                    }
                    let finding = normalize(finding, raw, rule.name(), rule.id());
                    tracing::debug!(
                        rule = rule.name(),
                        filename = finding.filename.as_str(),
                        line = finding.lineno,
                        message = finding.message.as_str(),
                        "finding accepted"
                    );
                    scores.record(&finding);
                    self.results.push(finding);
                }
            }
        }

        Ok(scores)
    }

    /// Findings accepted so far, across all `run_rules` calls.
    pub fn results(&self) -> &[Finding] {
        &self.results
    }

    pub fn into_results(self) -> Vec<Finding> {
        self.results
    }

    /// Rule faults captured so far; reported once by the scan summary.
    pub fn diagnostics(&self) -> &[RuleDiagnostic] {
        &self.diagnostics
    }

    pub fn diagnostic_count(&self) -> usize {
        self.diagnostics.len()
    }

    fn is_suppressed(&self, lineno: Option<u32>) -> bool {
        lineno.is_some_and(|line| self.nosec_lines.contains(&line))
    }

    fn record_fault(&mut self, rule: &RegisteredRule, raw: &NodeContext, err: &anyhow::Error) {
        let rendered = format!("{err:#}");
        tracing::error!(
            rule = rule.name(),
            filename = raw.filename.as_str(),
            line = raw.lineno,
            error = rendered.as_str(),
            "internal error running rule"
        );
        self.diagnostics.push(RuleDiagnostic {
            rule_name: rule.name().to_string(),
            filename: raw.filename.clone(),
            lineno: raw.lineno,
            error: rendered,
        });
    }
}

/// Backfill identity and location fields on a rule-produced finding.
///
/// Pure and infallible: a partially filled finding is expected, not an
/// error. The finding's own `lineno` and `rule_id` win when the rule set
/// them; `rule_name`, `filename`, and `linerange` always come from the
/// registration and the originating context.
pub fn normalize(mut finding: Finding, raw: &NodeContext, rule_name: &str, rule_id: &str) -> Finding {
    finding.filename = raw.filename.clone();
    if finding.lineno.is_none() {
        finding.lineno = raw.lineno;
    }
    finding.linerange = raw.linerange.clone();
    finding.rule_name = rule_name.to_string();
    if finding.rule_id.is_empty() {
        finding.rule_id = rule_id.to_string();
    }
    finding.fingerprint = Some(finding_fingerprint(
        &finding.rule_id,
        &finding.filename,
        finding.lineno,
        &finding.message,
    ));
    finding
}

fn panic_text(payload: &(dyn Any + Send)) -> &str {
    if let Some(text) = payload.downcast_ref::<&str>() {
        text
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text
    } else {
        "opaque panic payload"
    }
}
