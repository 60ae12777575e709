// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rows assembled from the finished hierarchy.
//!
//! Row order is deterministic: repositories in lexicographic key order,
//! specs in arrival order within each repository, then one summary row per
//! repository and a grand-total row.

use std::collections::BTreeMap;

use crate::aggregate::Totals;
use crate::model::{Repository, Spec, SpecType, TestRecord};

/// Column headers for the per-test rows.
pub const HEADER: [&str; 7] = [
    "Repo",
    "Spec",
    "Type",
    "Suite",
    "Test",
    "Test Skipped",
    "Suite Skipped",
];

/// Per-repository counters, reset for each repository while emitting rows.
#[derive(Debug, Clone, Copy, Default)]
struct RepoCounters {
    tests: usize,
    skipped_tests: usize,
    wip_tests: usize,
}

/// Build every report row: header, one row per test, per-repository
/// summaries, and a grand total.
pub fn build_rows(hierarchy: &BTreeMap<String, Repository>, totals: Totals) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(totals.tests + hierarchy.len() + 2);
    rows.push(HEADER.iter().map(|h| h.to_string()).collect());

    let mut summaries = Vec::with_capacity(hierarchy.len());
    for (key, repo) in hierarchy {
        let mut counters = RepoCounters::default();
        for spec in &repo.specs {
            for test in &spec.tests {
                rows.push(test_row(key, spec, test));
                counters.tests += 1;
                if test.test_skipped || test.suite_skipped {
                    counters.skipped_tests += 1;
                }
                if spec.spec_type == SpecType::Wip {
                    counters.wip_tests += 1;
                }
            }
        }
        summaries.push(vec![
            format!("Summary Data for repo {}:", repo.name),
            format!("Spec Count: {}", repo.specs.len()),
            format!("Test Count: {}", counters.tests),
            format!("Skipped Test Count: {}", counters.skipped_tests),
            format!("WIP Test Count: {}", counters.wip_tests),
        ]);
    }

    rows.extend(summaries);
    rows.push(vec![
        format!("Total Repo Count: {}", hierarchy.len()),
        format!("Total Spec Count: {}", totals.specs),
        format!("Total Test Count: {}", totals.tests),
        format!("Total Skipped Test Count: {}", totals.skipped_tests),
        format!("Total WIP Test Count: {}", totals.wip_tests),
    ]);
    rows
}

/// One row per test. The Spec column is a spreadsheet hyperlink formula so
/// the path in the sheet links back to the file.
fn test_row(repo_key: &str, spec: &Spec, test: &TestRecord) -> Vec<String> {
    vec![
        repo_key.to_string(),
        format!("=HYPERLINK(\"{}\",\"{}\")", spec.location_url, spec.path),
        spec.spec_type.label().to_string(),
        test.suite_name.clone(),
        test.test_name.clone(),
        test.test_skipped.to_string(),
        test.suite_skipped.to_string(),
    ]
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
