// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core data model: sources in, the repository → spec → test hierarchy out.

/// Purpose of a spec file, derived from its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecType {
    Smoke,
    Integration,
    /// Work in progress; rendered uppercase in reports.
    Wip,
}

impl SpecType {
    /// Report label for this type.
    pub fn label(self) -> &'static str {
        match self {
            SpecType::Smoke => "smoke",
            SpecType::Integration => "integration",
            SpecType::Wip => "WIP",
        }
    }
}

impl std::fmt::Display for SpecType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One spec file handed to the engine by an input collaborator.
#[derive(Debug, Clone)]
pub struct SpecSource {
    /// Repository identifier in `owner-name` or `owner/name` form.
    pub repository: String,
    /// Slash-delimited path of the file within its repository.
    pub path: String,
    /// Opaque display/link reference used in report rows.
    pub location_url: String,
    /// Full file contents.
    pub raw_text: String,
}

/// A single test found inside a suite. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRecord {
    pub suite_name: String,
    pub test_name: String,
    pub test_skipped: bool,
    pub suite_skipped: bool,
}

/// One processed spec file and every test found in it.
#[derive(Debug, Clone)]
pub struct Spec {
    pub path: String,
    pub location_url: String,
    pub spec_type: SpecType,
    pub tests: Vec<TestRecord>,
}

/// All specs collected for one repository, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub name: String,
    pub specs: Vec<Spec>,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
