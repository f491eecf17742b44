//! Inline suppression scanning.
//!
//! Users exclude a source line from reporting by annotating it with a
//! `# nosec` (or `#nosec`) comment marker. This crate extracts the set of
//! annotated line numbers from raw source text; the runner rejects any
//! finding located at one of them.
//!
//! Matching is on raw line text, not on parsed comment tokens, so the
//! scanner stays language-agnostic. A marker embedded in a string literal
//! therefore also suppresses; lines are 1-based.

#![forbid(unsafe_code)]

use std::collections::BTreeSet;

const MARKERS: [&str; 2] = ["#nosec", "# nosec"];

/// Line numbers (1-based) carrying an inline suppression marker.
pub fn nosec_lines(source: &str) -> BTreeSet<u32> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| has_marker(line))
        .map(|(idx, _)| (idx + 1) as u32)
        .collect()
}

fn has_marker(line: &str) -> bool {
    MARKERS.iter().any(|marker| line.contains(marker))
}
