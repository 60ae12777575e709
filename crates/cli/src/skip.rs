// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Skip-marker detection over raw text fragments.
//!
//! Purely textual: a marker anywhere in the fragment counts, including one
//! sitting inside a comment or an unrelated string literal. That imprecision
//! is a documented limitation of the scan, not an error condition.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;

/// Literal forms that disable a suite or test. Case-sensitive.
const SKIP_MARKERS: &[&str] = &["xit", "xdescribe", "it.skip", "describe.skip"];

#[allow(clippy::unwrap_used)] // fixed literal patterns; construction cannot fail
fn skip_automaton() -> AhoCorasick {
    AhoCorasick::new(SKIP_MARKERS).unwrap()
}

static SKIP_AUTOMATON: LazyLock<AhoCorasick> = LazyLock::new(skip_automaton);

/// True when the fragment contains any disable marker.
pub fn is_skipped(fragment: &str) -> bool {
    SKIP_AUTOMATON.is_match(fragment)
}

#[cfg(test)]
#[path = "skip_tests.rs"]
mod tests;
