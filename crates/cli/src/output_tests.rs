// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

fn render(rows: &[Vec<String>]) -> String {
    let mut buffer = Vec::new();
    write_rows(&mut buffer, rows).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn plain_fields_pass_through_unquoted() {
    let rows = vec![vec!["a".to_string(), "b".to_string(), "c".to_string()]];
    assert_eq!(render(&rows), "a,b,c\n");
}

#[test]
fn fields_with_commas_are_quoted() {
    let rows = vec![vec!["a,b".to_string(), "c".to_string()]];
    assert_eq!(render(&rows), "\"a,b\",c\n");
}

#[test]
fn embedded_quotes_are_doubled() {
    let rows = vec![vec!["say \"hi\"".to_string()]];
    assert_eq!(render(&rows), "\"say \"\"hi\"\"\"\n");
}

#[test]
fn newlines_force_quoting() {
    let rows = vec![vec!["line1\nline2".to_string()]];
    assert_eq!(render(&rows), "\"line1\nline2\"\n");
}

#[test]
fn hyperlink_formulas_survive_round_tripping() {
    let formula = "=HYPERLINK(\"https://example.test/a\",\"cypress/a.cy.js\")";
    let rows = vec![vec![formula.to_string()]];
    assert_eq!(
        render(&rows),
        "\"=HYPERLINK(\"\"https://example.test/a\"\",\"\"cypress/a.cy.js\"\")\"\n"
    );
}

#[test]
fn each_row_becomes_one_line() {
    let rows = vec![
        vec!["a".to_string()],
        vec!["b".to_string()],
    ];
    assert_eq!(render(&rows), "a\nb\n");
}
