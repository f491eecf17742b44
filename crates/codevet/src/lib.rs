//! Public facade over the codevet rule-execution core.
//!
//! External collaborators (the AST visitor, the rule registry, the
//! configuration loader, reporting) interact with the engine through this
//! crate only.
//!
//! ```
//! use codevet::{Confidence, Finding, NodeContext, RegisteredRule, RuleSet, Runner, Severity};
//!
//! let mut rules = RuleSet::new();
//! rules.register(
//!     "calls",
//!     RegisteredRule::from_fn("use_of_eval", "CV307", |_ctx, _config| {
//!         Ok(Some(Finding::new(Severity::Medium, Confidence::High, "use of eval")))
//!     }),
//! );
//!
//! let node = NodeContext {
//!     filename: "app.py".into(),
//!     lineno: Some(3),
//!     linerange: vec![3],
//!     node: Default::default(),
//! };
//!
//! let mut runner = Runner::new(&rules, false, Default::default());
//! let scores = runner.run_rules(&node, "calls").expect("debug off never fails");
//!
//! assert!(!scores.is_zero());
//! assert_eq!(runner.results()[0].rule_id, "CV307");
//! assert_eq!(runner.results()[0].lineno, Some(3));
//! ```

#![forbid(unsafe_code)]

pub use codevet_domain::context::{Context, NodeContext};
pub use codevet_domain::report::{RuleDiagnostic, Scores};
pub use codevet_domain::ruleset::{RegisteredRule, Rule, RuleConfig, RuleResult, RuleSet};
pub use codevet_domain::{Runner, finding_fingerprint, normalize};
pub use codevet_suppressions::nosec_lines;
pub use codevet_types::ids;
pub use codevet_types::{Confidence, Finding, RANKING_LEN, Severity};
