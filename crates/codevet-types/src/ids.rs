//! Stable check-type identifiers.
//!
//! A check type is the tag the AST visitor uses to select which registered
//! rules apply to a syntax node. The visitor owns the mapping from node
//! kinds to these tags; this crate only fixes the spelling.

pub const CHECK_CALLS: &str = "calls";
pub const CHECK_FUNCTIONS: &str = "functions";
pub const CHECK_IMPORTS: &str = "imports";
pub const CHECK_STRINGS: &str = "strings";
