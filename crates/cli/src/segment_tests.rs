// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn text_without_markers_is_one_segment() {
    let segments = segment("const helpers = require('./helpers');\n");
    assert_eq!(segments.len(), 1);
}

#[test]
fn marker_stays_as_suffix_of_the_segment_it_ends() {
    let segments = segment("before describe('A', () => {});");
    assert_eq!(segments, vec!["before describe(", "'A', () => {});"]);
}

#[test]
fn each_plain_marker_opens_a_new_segment() {
    let text = "describe('A', () => {}); describe('B', () => {});";
    let segments = segment(text);
    assert_eq!(segments.len(), 3);
    assert!(segments[0].ends_with("describe("));
    assert!(segments[1].starts_with("'A'"));
    assert!(segments[1].ends_with("describe("));
    assert!(segments[2].starts_with("'B'"));
}

#[test]
fn xdescribe_splits_at_the_plain_marker() {
    // "xdescribe(" contains the plain marker, so the `x` lands at the end
    // of the preceding segment where the skip check sees it
    let segments = segment("xdescribe('B', () => {});");
    assert_eq!(segments[0], "xdescribe(");
    assert!(segments[1].starts_with("'B'"));
}

#[test]
fn skip_marker_only_uses_the_skip_split() {
    let text = "describe.skip('C', () => {});";
    let segments = segment(text);
    assert_eq!(segments, vec!["describe.skip(", "'C', () => {});"]);
}

#[test]
fn both_marker_forms_merge_splits() {
    let text = "describe('A', () => {}); describe.skip('C', () => {});";
    let segments = segment(text);
    assert_eq!(
        segments,
        vec![
            "describe(",
            "'A', () => {}); describe.skip('C', () => {});",
            "'C', () => {});",
        ]
    );
    // The segment preceding 'C' ends with the skip marker, which is what
    // the extractor's skip check looks at
    assert!(segments[1].contains("describe.skip"));
}

#[test]
fn empty_input_is_one_empty_segment() {
    assert_eq!(segment(""), vec![String::new()]);
}
