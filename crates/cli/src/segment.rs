// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Splits raw spec text into per-suite segments.
//!
//! Split-after semantics: each segment ends with the suite marker that opens
//! the next segment's suite, so the tail of segment `i - 1` carries the text
//! the skip check needs for suite `i`. Segment 0 precedes every marker and is
//! never a suite body.

/// Marker opening an active suite. Also matches inside `xdescribe(`.
pub const SUITE_MARKER: &str = "describe(";

/// Marker opening a disabled suite.
pub const SKIP_SUITE_MARKER: &str = "describe.skip(";

/// Split `text` after every occurrence of `marker`, keeping the marker as
/// the suffix of the segment it ends.
fn split_after<'a>(text: &'a str, marker: &str) -> Vec<&'a str> {
    let mut segments = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find(marker) {
        let cut = pos + marker.len();
        segments.push(&rest[..cut]);
        rest = &rest[cut..];
    }
    segments.push(rest);
    segments
}

/// Split raw spec text into suite segments.
///
/// Both marker forms are split points. When only one form occurs, its split
/// is returned as-is. When both occur, the plain split is extended with the
/// skip-split segments after the first (the first precedes any skip marker
/// and duplicates text the plain split already captured). Interleaved marker
/// forms can still repeat text across segments under this merge; the
/// long-standing tally behavior is kept for compatibility.
pub fn segment(raw_text: &str) -> Vec<String> {
    let plain = split_after(raw_text, SUITE_MARKER);
    let skipped = split_after(raw_text, SKIP_SUITE_MARKER);

    if skipped.len() == 1 {
        return plain.into_iter().map(String::from).collect();
    }
    if plain.len() == 1 {
        return skipped.into_iter().map(String::from).collect();
    }
    plain
        .into_iter()
        .chain(skipped.into_iter().skip(1))
        .map(String::from)
        .collect()
}

#[cfg(test)]
#[path = "segment_tests.rs"]
mod tests;
