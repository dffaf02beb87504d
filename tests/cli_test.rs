//! Tests for command dispatch and exit codes

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use rshuff::cli::{execute_command, Cli, CliError};
use rshuff::exitcode;

/// Empty config file so the working directory's config cannot interfere.
fn isolated_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("rshuff.toml");
    fs::write(&path, "[render]\ncolor = false\n").unwrap();
    path
}

fn run(dir: &TempDir, args: &[&str]) -> Result<(), CliError> {
    let config = isolated_config(dir);
    let mut argv = vec!["rshuff", "--config", config.to_str().unwrap()];
    argv.extend_from_slice(args);
    execute_command(&Cli::parse_from(argv))
}

#[test]
fn given_message_when_demo_then_succeeds() {
    let dir = TempDir::new().unwrap();
    assert!(run(&dir, &["demo", "abracadabra"]).is_ok());
}

#[test]
fn given_empty_message_when_demo_then_usage_error() {
    let dir = TempDir::new().unwrap();

    let err = run(&dir, &["demo", ""]).unwrap_err();

    assert!(matches!(err, CliError::Usage(_)));
    assert_eq!(err.exit_code(), exitcode::USAGE);
}

#[test]
fn given_unknown_symbol_when_encode_then_data_error() {
    let dir = TempDir::new().unwrap();

    let err = run(&dir, &["encode", "abc", "--alphabet", "ab"]).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[test]
fn given_truncated_bits_when_decode_then_data_error_unless_dropped() {
    let dir = TempDir::new().unwrap();

    let err = run(&dir, &["decode", "0101", "--alphabet", "aabc"]).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::DATAERR);

    assert!(run(&dir, &["--drop-truncated", "decode", "0101", "--alphabet", "aabc"]).is_ok());
}

#[test]
fn given_missing_config_file_when_running_then_config_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let cli = Cli::parse_from(["rshuff", "--config", missing.to_str().unwrap(), "config"]);
    let err = execute_command(&cli).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::CONFIG);
}

#[test]
fn given_text_when_tree_and_codes_then_succeed() {
    let dir = TempDir::new().unwrap();
    assert!(run(&dir, &["tree", "mississippi"]).is_ok());
    assert!(run(&dir, &["codes", "mississippi"]).is_ok());
    assert!(run(&dir, &["codes", ""]).is_ok());
}
