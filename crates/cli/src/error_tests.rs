// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn identifier_errors_map_to_config_exit_code() {
    let err = Error::MalformedRepoIdentifier {
        identifier: "org".to_string(),
    };
    assert_eq!(ExitCode::from(&err), ExitCode::ConfigError);
}

#[test]
fn manifest_and_argument_errors_map_to_config_exit_code() {
    let manifest = Error::Manifest {
        path: PathBuf::from("specs.json"),
        message: "expected array".to_string(),
    };
    assert_eq!(ExitCode::from(&manifest), ExitCode::ConfigError);

    let argument = Error::Argument("bad flag".to_string());
    assert_eq!(ExitCode::from(&argument), ExitCode::ConfigError);
}

#[test]
fn io_and_walk_errors_map_to_internal_exit_code() {
    let io = Error::Io {
        path: PathBuf::from("a.cy.js"),
        source: std::io::Error::other("boom"),
    };
    assert_eq!(ExitCode::from(&io), ExitCode::InternalError);

    let walk = Error::Walk {
        message: "loop".to_string(),
    };
    assert_eq!(ExitCode::from(&walk), ExitCode::InternalError);
}

#[test]
fn malformed_identifier_message_names_the_identifier() {
    let err = Error::MalformedRepoIdentifier {
        identifier: "org".to_string(),
    };
    assert!(err.to_string().contains("org"));
}

#[test]
fn exit_codes_have_stable_values() {
    assert_eq!(ExitCode::Success as i32, 0);
    assert_eq!(ExitCode::ScanFailed as i32, 1);
    assert_eq!(ExitCode::ConfigError as i32, 2);
    assert_eq!(ExitCode::InternalError as i32, 3);
}
