// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite and test extraction from segmented spec text.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::TestRecord;
use crate::skip::is_skipped;

#[allow(clippy::unwrap_used)] // fixed patterns; known-valid at compile time
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

/// First quoted literal in a segment names its suite. A single quote, double
/// quote, or backtick opens the literal; any of the three closes it, so
/// mismatched delimiter pairs are tolerated rather than rejected.
static QUOTED_LITERAL: LazyLock<Regex> = LazyLock::new(|| compile(r#"["'`]([^"'`]+)["'`]"#));

/// A test declaration: whitespace or `x` flag characters, `it`, an optional
/// `.skip` qualifier, `(`, then the quoted test name.
static TEST_DECL: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"[\sx]+it(?:\.skip)?\(["'`]([^"'`]+)["'`]"#));

/// A segment the extractor had to give up on. The rest of the spec is
/// unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractWarning {
    /// Index of the offending segment within the spec.
    pub segment: usize,
    pub message: String,
}

/// Extraction result for one spec.
#[derive(Debug, Default)]
pub struct Extraction {
    pub tests: Vec<TestRecord>,
    pub warnings: Vec<ExtractWarning>,
}

/// Pull every (suite, test, skip) triple out of the segmented spec text.
///
/// Segment 0 precedes the first suite marker and is context only: it feeds
/// the skip check for the suite whose marker it ends with, and is never
/// searched for tests itself. A segment with no quoted suite name yields a
/// warning instead of records.
pub fn extract(path: &str, segments: &[String]) -> Extraction {
    let mut result = Extraction::default();

    for (index, segment) in segments.iter().enumerate() {
        if index == 0 {
            continue;
        }

        let suite_skipped = is_skipped(&segments[index - 1]);

        let Some(suite_name) = QUOTED_LITERAL
            .captures(segment)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
        else {
            tracing::warn!("{path}: suite segment {index} has no quoted name, skipping its tests");
            result.warnings.push(ExtractWarning {
                segment: index,
                message: "no quoted suite name".to_string(),
            });
            continue;
        };

        for caps in TEST_DECL.captures_iter(segment) {
            let (Some(decl), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            // The skip check covers the matched prefix (flag characters,
            // marker, qualifier) but not the test name itself, so a name
            // that merely mentions a marker is not flagged.
            let prefix = &segment[decl.start()..name.start()];
            result.tests.push(TestRecord {
                suite_name: suite_name.to_string(),
                test_name: name.as_str().to_string(),
                test_skipped: is_skipped(prefix),
                suite_skipped,
            });
        }
    }

    result
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
