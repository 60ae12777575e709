// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn wip_label_is_uppercase() {
    assert_eq!(SpecType::Wip.label(), "WIP");
}

#[test]
fn other_labels_are_lowercase() {
    assert_eq!(SpecType::Smoke.label(), "smoke");
    assert_eq!(SpecType::Integration.label(), "integration");
}

#[test]
fn display_matches_label() {
    assert_eq!(SpecType::Wip.to_string(), "WIP");
    assert_eq!(SpecType::Smoke.to_string(), "smoke");
}
