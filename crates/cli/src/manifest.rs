// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON manifest input.
//!
//! Mirrors the search-provider shape: an array of entries carrying the
//! repository identifier, file path, link URL, and full file text. Unknown
//! fields are ignored so provider output can be piped through unchanged.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::SpecSource;

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    repository: String,
    path: String,
    #[serde(default)]
    url: String,
    text: String,
}

/// Load spec sources from a JSON manifest file.
pub fn load(path: &Path) -> Result<Vec<SpecSource>> {
    let data = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries: Vec<ManifestEntry> =
        serde_json::from_str(&data).map_err(|err| Error::Manifest {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

    tracing::debug!("{}: {} manifest entries", path.display(), entries.len());

    Ok(entries
        .into_iter()
        .map(|entry| SpecSource {
            repository: entry.repository,
            path: entry.path,
            location_url: entry.url,
            raw_text: entry.text,
        })
        .collect())
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
