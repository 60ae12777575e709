// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inventories Cypress spec files into suites, tests, and skip status
#[derive(Parser)]
#[command(name = "cytally")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan spec files and write the organized-test CSV
    Scan(ScanArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Root directory holding one repository checkout per subdirectory
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Read sources from a JSON manifest instead of walking ROOT
    #[arg(long, value_name = "FILE", env = "CYTALLY_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// File name suffix identifying spec files in walk mode
    #[arg(long, default_value = ".cy.js", value_name = "SUFFIX")]
    pub extension: String,

    /// Output CSV path (`-` for stdout)
    #[arg(short, long, default_value = "organized-tests.csv", value_name = "FILE")]
    pub output: PathBuf,

    /// Maximum directory depth to traverse in walk mode
    #[arg(long, default_value_t = 100)]
    pub max_depth: usize,

    /// Exit non-zero when any source fails to ingest
    #[arg(long)]
    pub strict: bool,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
