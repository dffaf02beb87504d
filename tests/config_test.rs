//! Integration tests for Settings loading with layered merge semantics.
//!
//! Note: These tests run without a global config (temp directories only),
//! so they effectively test local config merging with defaults.

use std::fs;

use tempfile::TempDir;

use rshuff::application::ApplicationError;
use rshuff::config::{local_config_path, Settings};
use rshuff::domain::{SingleSymbolPolicy, TruncatedPolicy};

#[test]
fn given_no_local_config_when_load_then_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();

    // Act
    let settings = Settings::load(Some(dir.path())).expect("load settings");

    // Assert
    assert_eq!(settings.codec.truncated, TruncatedPolicy::Error);
    assert_eq!(settings.codec.single_symbol, SingleSymbolPolicy::OneBit);
    assert!(settings.render.show_internal);
}

#[test]
fn given_local_config_when_load_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let local = r#"
[codec]
truncated = "drop"
single_symbol = "reject"

[render]
show_internal = false
"#;
    fs::write(local_config_path(dir.path()), local).unwrap();

    // Act
    let settings = Settings::load(Some(dir.path())).expect("load settings");

    // Assert
    assert_eq!(settings.codec.truncated, TruncatedPolicy::Drop);
    assert_eq!(settings.codec.single_symbol, SingleSymbolPolicy::Reject);
    assert!(!settings.render.show_internal);
    assert!(settings.render.color, "unspecified field keeps default");
}

#[test]
fn given_explicit_file_when_from_file_then_applies_it() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[codec]\ntruncated = \"drop\"\n").unwrap();

    let settings = Settings::from_file(&path).expect("load settings");

    assert_eq!(settings.codec_options().truncated, TruncatedPolicy::Drop);
}

#[test]
fn given_missing_file_when_from_file_then_config_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");

    let result = Settings::from_file(&path);

    assert!(matches!(result, Err(ApplicationError::ConfigNotFound(p)) if p == path));
}

#[test]
fn given_unknown_policy_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        "[codec]\ntruncated = \"ignore\"\n",
    )
    .unwrap();

    let result = Settings::load(Some(dir.path()));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}
