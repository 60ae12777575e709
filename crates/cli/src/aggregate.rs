// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Folds processed specs into the repository → spec → test hierarchy.

use std::collections::BTreeMap;

use crate::classify::classify;
use crate::error::{Error, Result};
use crate::extract::extract;
use crate::model::{Repository, Spec, SpecSource, SpecType};
use crate::segment::segment;

/// Run-wide counters, maintained incrementally as sources are ingested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub tests: usize,
    pub skipped_tests: usize,
    pub wip_tests: usize,
    pub specs: usize,
}

/// A source that could not be ingested. Other sources are unaffected.
#[derive(Debug)]
pub struct SpecFailure {
    pub repository: String,
    pub path: String,
    pub error: Error,
}

/// Accumulates the hierarchy, counters, and per-source failures.
///
/// A single-threaded fold: each source is fully classified, segmented,
/// extracted, and attached before the next is considered. Callers that
/// parallelize fetching must still ingest sequentially so the counters
/// stay exact.
#[derive(Debug, Default)]
pub struct Aggregator {
    hierarchy: BTreeMap<String, Repository>,
    totals: Totals,
    failures: Vec<SpecFailure>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify, segment, extract, and attach one source.
    ///
    /// The hierarchy is only touched once the spec is fully built: a failed
    /// source records a failure and attaches nothing. Sources are never
    /// deduplicated; ingesting the same path twice yields two spec entries
    /// and doubled counts.
    pub fn ingest(&mut self, source: SpecSource) {
        match build_spec(&source) {
            Ok((key, spec)) => self.attach(key, spec),
            Err(error) => {
                tracing::warn!("{}: {error}", source.path);
                self.failures.push(SpecFailure {
                    repository: source.repository,
                    path: source.path,
                    error,
                });
            }
        }
    }

    fn attach(&mut self, key: String, spec: Spec) {
        self.totals.tests += spec.tests.len();
        self.totals.skipped_tests += spec
            .tests
            .iter()
            .filter(|t| t.test_skipped || t.suite_skipped)
            .count();
        if spec.spec_type == SpecType::Wip {
            // Every test of a WIP spec counts, not only skipped ones.
            self.totals.wip_tests += spec.tests.len();
        }
        self.totals.specs += 1;

        tracing::debug!("{}: {} tests ({})", spec.path, spec.tests.len(), key);

        self.hierarchy
            .entry(key)
            .or_insert_with_key(|key| Repository {
                name: key.clone(),
                specs: Vec::new(),
            })
            .specs
            .push(spec);
    }

    /// Repository map, keyed and iterated in lexicographic key order.
    pub fn hierarchy(&self) -> &BTreeMap<String, Repository> {
        &self.hierarchy
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn failures(&self) -> &[SpecFailure] {
        &self.failures
    }
}

/// Strip the organizational prefix up to and including the first hyphen.
///
/// `BidPal/phaas-org-ui` → `org-ui`, `org-product-api` → `product-api`.
/// An identifier with no hyphen (or nothing after it) is malformed and
/// surfaces as an error rather than passing through truncated.
pub fn derive_repo_key(identifier: &str) -> Result<&str> {
    match identifier.split_once('-') {
        Some((_, rest)) if !rest.is_empty() => Ok(rest),
        _ => Err(Error::MalformedRepoIdentifier {
            identifier: identifier.to_string(),
        }),
    }
}

fn build_spec(source: &SpecSource) -> Result<(String, Spec)> {
    let key = derive_repo_key(&source.repository)?.to_string();
    let spec_type = classify(&source.path);
    let segments = segment(&source.raw_text);
    let extraction = extract(&source.path, &segments);

    Ok((
        key,
        Spec {
            path: source.path.clone(),
            location_url: source.location_url.clone(),
            spec_type,
            tests: extraction.tests,
        },
    ))
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
