// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spec discovery by walking a directory of repository checkouts.
//!
//! Each first-level directory under the root is one repository checkout,
//! named with its `owner-name` identifier. Walking uses the `ignore` crate
//! so gitignored and hidden files never reach the engine, and `node_modules`
//! and `.git` subtrees are pruned before any I/O happens inside them.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{Error, Result};
use crate::model::SpecSource;

/// Directories never worth descending into.
const SKIP_DIRECTORIES: &[&str] = &["node_modules", ".git"];

/// Walk configuration.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Root directory holding one checkout per repository.
    pub root: PathBuf,

    /// File name suffix identifying spec files (e.g. `.cy.js`).
    pub suffix: String,

    /// Maximum directory depth from the root.
    pub max_depth: Option<usize>,
}

/// A file that could not be loaded; the walk continues without it.
#[derive(Debug)]
pub struct WalkFailure {
    pub path: PathBuf,
    pub error: Error,
}

/// Walk the configured root and load every spec file found.
pub fn collect_sources(config: &WalkConfig) -> Result<(Vec<SpecSource>, Vec<WalkFailure>)> {
    let root = config.root.as_path();
    if !root.is_dir() {
        return Err(Error::Walk {
            message: format!("not a directory: {}", root.display()),
        });
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(true)
        .git_ignore(true)
        .max_depth(config.max_depth);
    builder.filter_entry(|entry| {
        !entry.file_type().map(|t| t.is_dir()).unwrap_or(false)
            || !entry
                .file_name()
                .to_str()
                .map(|name| SKIP_DIRECTORIES.contains(&name))
                .unwrap_or(false)
    });

    let mut sources = Vec::new();
    let mut failures = Vec::new();

    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("walk error: {err}");
                continue;
            }
        };
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        let path = entry.path();
        let is_spec = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&config.suffix));
        if !is_spec {
            continue;
        }
        match load_source(root, path) {
            Ok(source) => sources.push(source),
            Err(error) => {
                tracing::warn!("{}: {error}", path.display());
                failures.push(WalkFailure {
                    path: path.to_path_buf(),
                    error,
                });
            }
        }
    }

    tracing::debug!(
        "{}: {} spec files, {} failures",
        root.display(),
        sources.len(),
        failures.len()
    );

    Ok((sources, failures))
}

/// Build a source from a discovered file: first path component under the
/// root is the repository identifier, the rest is the in-repo path.
fn load_source(root: &Path, path: &Path) -> Result<SpecSource> {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let mut components = rel.iter().map(|c| c.to_string_lossy());

    let repository = match components.next() {
        Some(first) => first.into_owned(),
        None => {
            return Err(Error::Walk {
                message: format!("empty path: {}", path.display()),
            });
        }
    };
    let spec_path = components.collect::<Vec<_>>().join("/");
    if spec_path.is_empty() {
        return Err(Error::Walk {
            message: format!(
                "spec file not inside a repository checkout: {}",
                path.display()
            ),
        });
    }

    let raw_text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(SpecSource {
        repository,
        path: spec_path,
        location_url: path.display().to_string(),
        raw_text,
    })
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
