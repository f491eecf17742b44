//! Per-node syntactic context handed to rules.

use std::collections::BTreeMap;

use serde_json::Value as JsonValue;

/// Raw per-node metadata assembled by the AST visitor.
///
/// Location fields are explicit; everything parser-specific (the node
/// itself, surrounding siblings, qualified call names, ...) travels in the
/// `node` extension slot.
#[derive(Clone, Debug, Default)]
pub struct NodeContext {
    pub filename: String,
    pub lineno: Option<u32>,
    pub linerange: Vec<u32>,
    pub node: BTreeMap<String, JsonValue>,
}

/// Read view over one rule invocation's private copy of a [`NodeContext`].
///
/// The runner clones the raw context before every invocation, so nothing a
/// rule observes through this view is shared with any other rule running
/// at the same node.
#[derive(Clone, Debug)]
pub struct Context {
    raw: NodeContext,
}

impl Context {
    pub fn new(raw: NodeContext) -> Self {
        Self { raw }
    }

    /// Parser-supplied field, or `None` when the visitor did not set it.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.raw.node.get(key)
    }

    pub fn filename(&self) -> &str {
        &self.raw.filename
    }

    pub fn lineno(&self) -> Option<u32> {
        self.raw.lineno
    }

    pub fn linerange(&self) -> &[u32] {
        &self.raw.linerange
    }
}
