//! Property tests for scoring arithmetic, suppression, and fault isolation.

use std::collections::BTreeSet;

use proptest::prelude::*;

use codevet_types::{Confidence, Severity};

use crate::Runner;
use crate::report::Scores;
use crate::ruleset::RegisteredRule;
use crate::test_support::{failing_rule, finding_rule, node_at, ruleset_for};

fn severity_level() -> impl Strategy<Value = Severity> {
    prop::sample::select(vec![
        Severity::Undefined,
        Severity::Low,
        Severity::Medium,
        Severity::High,
    ])
}

fn confidence_level() -> impl Strategy<Value = Confidence> {
    prop::sample::select(vec![
        Confidence::Undefined,
        Confidence::Low,
        Confidence::Medium,
        Confidence::High,
    ])
}

proptest! {
    /// Each accepted finding contributes exactly its level's weight at its
    /// level's index, for any mix of levels.
    #[test]
    fn scores_sum_weights_per_ranking_level(
        levels in prop::collection::vec((severity_level(), confidence_level()), 0..16),
    ) {
        let rules: Vec<RegisteredRule> = levels
            .iter()
            .enumerate()
            .map(|(i, (severity, confidence))| {
                finding_rule(&format!("rule_{i}"), &format!("CV{i:03}"), *severity, *confidence)
            })
            .collect();
        let set = ruleset_for("calls", rules);

        let mut runner = Runner::new(&set, false, BTreeSet::new());
        let scores = runner.run_rules(&node_at("a.py", 3), "calls").expect("no faults");

        let mut expected = Scores::default();
        for (severity, confidence) in &levels {
            expected.severity[severity.index()] += severity.weight();
            expected.confidence[confidence.index()] += confidence.weight();
        }

        prop_assert_eq!(scores, expected);
        prop_assert_eq!(runner.results().len(), levels.len());
    }

    /// A suppressed context line excludes every finding at that node from
    /// both results and scores, whatever the rules produce.
    #[test]
    fn suppressed_context_line_never_contributes(
        levels in prop::collection::vec((severity_level(), confidence_level()), 1..8),
        lineno in 1u32..500,
    ) {
        let rules: Vec<RegisteredRule> = levels
            .iter()
            .enumerate()
            .map(|(i, (severity, confidence))| {
                finding_rule(&format!("rule_{i}"), &format!("CV{i:03}"), *severity, *confidence)
            })
            .collect();
        let set = ruleset_for("calls", rules);

        let mut runner = Runner::new(&set, false, BTreeSet::from([lineno]));
        let scores = runner.run_rules(&node_at("a.py", lineno), "calls").expect("no faults");

        prop_assert!(scores.is_zero());
        prop_assert!(runner.results().is_empty());
    }

    /// Removing faulty rules from a set changes nothing for the healthy
    /// ones: results and scores are identical either way.
    #[test]
    fn fault_isolation_holds_for_any_rule_mix(
        mix in prop::collection::vec((any::<bool>(), severity_level(), confidence_level()), 0..12),
    ) {
        let mut with_faults = Vec::new();
        let mut healthy_only = Vec::new();
        for (i, (faulty, severity, confidence)) in mix.iter().enumerate() {
            if *faulty {
                with_faults.push(failing_rule(&format!("broken_{i}"), &format!("CV{i:03}"), "boom"));
            } else {
                with_faults.push(finding_rule(&format!("rule_{i}"), &format!("CV{i:03}"), *severity, *confidence));
                healthy_only.push(finding_rule(&format!("rule_{i}"), &format!("CV{i:03}"), *severity, *confidence));
            }
        }
        let fault_count = mix.iter().filter(|(faulty, ..)| *faulty).count();

        let faulty_set = ruleset_for("calls", with_faults);
        let healthy_set = ruleset_for("calls", healthy_only);

        let node = node_at("a.py", 3);
        let mut faulty_runner = Runner::new(&faulty_set, false, BTreeSet::new());
        let mut healthy_runner = Runner::new(&healthy_set, false, BTreeSet::new());

        let faulty_scores = faulty_runner.run_rules(&node, "calls").expect("debug off");
        let healthy_scores = healthy_runner.run_rules(&node, "calls").expect("no faults");

        prop_assert_eq!(faulty_scores, healthy_scores);
        prop_assert_eq!(faulty_runner.results(), healthy_runner.results());
        prop_assert_eq!(faulty_runner.diagnostic_count(), fault_count);
    }
}
