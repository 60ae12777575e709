// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan command implementation.

use std::io::Write;
use std::time::Instant;

use anyhow::Context;

use cytally::Aggregator;
use cytally::cli::ScanArgs;
use cytally::error::{Error, ExitCode};
use cytally::model::SpecSource;
use cytally::walker::{self, WalkConfig, WalkFailure};
use cytally::{manifest, output, report};

/// Run the scan command.
pub fn run(args: &ScanArgs) -> anyhow::Result<ExitCode> {
    let start = Instant::now();

    let (sources, walk_failures) = collect_sources(args)?;
    let source_count = sources.len();

    let mut aggregator = Aggregator::new();
    for source in sources {
        aggregator.ingest(source);
    }

    let rows = report::build_rows(aggregator.hierarchy(), aggregator.totals());
    write_output(args, &rows)?;

    let totals = aggregator.totals();
    let failure_count = walk_failures.len() + aggregator.failures().len();

    eprintln!("Scanned {} specs", source_count);
    eprintln!(
        "{} tests were found in {} repos and written to {}",
        totals.tests,
        aggregator.hierarchy().len(),
        args.output.display()
    );
    if failure_count > 0 {
        eprintln!("{} sources failed; set CYTALLY_LOG=warn for details", failure_count);
    }
    eprintln!("Elapsed: {:.2?}", start.elapsed());

    if args.strict && failure_count > 0 {
        return Ok(ExitCode::ScanFailed);
    }
    Ok(ExitCode::Success)
}

fn collect_sources(args: &ScanArgs) -> anyhow::Result<(Vec<SpecSource>, Vec<WalkFailure>)> {
    match (&args.manifest, &args.root) {
        (Some(manifest_path), None) => Ok((manifest::load(manifest_path)?, Vec::new())),
        (None, Some(root)) => {
            let config = WalkConfig {
                root: root.clone(),
                suffix: args.extension.clone(),
                max_depth: Some(args.max_depth),
            };
            Ok(walker::collect_sources(&config)?)
        }
        (Some(_), Some(_)) => {
            Err(Error::Argument("pass either ROOT or --manifest, not both".to_string()).into())
        }
        (None, None) => {
            Err(Error::Argument("pass a ROOT directory or --manifest FILE".to_string()).into())
        }
    }
}

fn write_output(args: &ScanArgs, rows: &[Vec<String>]) -> anyhow::Result<()> {
    if args.output.as_os_str() == "-" {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        output::write_rows(&mut handle, rows)?;
        handle.flush()?;
    } else {
        let file = std::fs::File::create(&args.output)
            .with_context(|| format!("failed to create {}", args.output.display()))?;
        let mut writer = std::io::BufWriter::new(file);
        output::write_rows(&mut writer, rows)?;
        writer.flush()?;
    }
    Ok(())
}
