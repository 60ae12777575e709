// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spec type classification from file paths.
//!
//! A single case-insensitive left-to-right scan over the path decides the
//! type: `wip` anywhere wins outright, otherwise the leftmost of `smoke` or
//! `integration` wins, otherwise the type defaults to integration. The
//! default is policy, not an absence marker: a path with no token is still
//! an integration spec.

use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, MatchKind};

use crate::model::SpecType;

/// Path tokens, in pattern order. Indices map back to a `SpecType`.
const TYPE_TOKENS: &[&str] = &["wip", "smoke", "integration"];

#[allow(clippy::unwrap_used)] // fixed literal patterns; construction cannot fail
fn type_automaton() -> AhoCorasick {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::LeftmostFirst)
        .build(TYPE_TOKENS)
        .unwrap()
}

static TYPE_AUTOMATON: LazyLock<AhoCorasick> = LazyLock::new(type_automaton);

/// Derive the spec type from a provider-relative path.
pub fn classify(path: &str) -> SpecType {
    let mut first = None;
    for m in TYPE_AUTOMATON.find_iter(path) {
        let spec_type = match m.pattern().as_usize() {
            0 => SpecType::Wip,
            1 => SpecType::Smoke,
            _ => SpecType::Integration,
        };
        if spec_type == SpecType::Wip {
            return SpecType::Wip;
        }
        if first.is_none() {
            first = Some(spec_type);
        }
    }
    first.unwrap_or(SpecType::Integration)
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
