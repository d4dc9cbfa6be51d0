//! Tests for configuration loading and resolution
//!
//! Covers:
//! - Missing TOML files fall back to compiled defaults
//! - Malformed TOML files are reported as configuration errors
//! - CLI > TOML > compiled default priority

use mlib_common::config::{
    load_config, load_toml_config, CompiledDefaults, ConfigOverrides, LoggingConfig,
    ResolvedConfig, TomlConfig,
};
use mlib_common::Error;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_missing_config_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = load_toml_config(&temp_dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, TomlConfig::default());
}

#[test]
fn test_malformed_config_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("mlib.toml");
    std::fs::write(&path, "extension = [not valid").unwrap();

    match load_toml_config(&path) {
        Err(Error::Config(msg)) => assert!(msg.contains("Parse TOML failed")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_full_config_file_parses() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("mlib.toml");
    std::fs::write(
        &path,
        r#"
music_library_path = "/srv/choir"
extension = ".mp3"
csv_filename = "out.csv"
json_filename = "out.json"
database_filename = "lib.db"

[logging]
level = "debug"
file = "music-library.log"
"#,
    )
    .unwrap();

    let config = load_toml_config(&path).unwrap();

    assert_eq!(config.music_library_path, Some(PathBuf::from("/srv/choir")));
    assert_eq!(config.extension.as_deref(), Some(".mp3"));
    assert_eq!(config.database_filename, Some(PathBuf::from("lib.db")));
    assert_eq!(
        config.logging,
        LoggingConfig {
            level: "debug".to_string(),
            file: Some(PathBuf::from("music-library.log")),
        }
    );
}

#[test]
fn test_resolve_with_nothing_uses_compiled_defaults() {
    let resolved = ResolvedConfig::resolve(ConfigOverrides::default(), TomlConfig::default());
    let defaults = CompiledDefaults::default();

    assert_eq!(resolved.music_library_path, defaults.music_library_path);
    assert_eq!(resolved.extension, ".pdf");
    assert_eq!(resolved.csv_filename, defaults.csv_filename);
    assert_eq!(resolved.json_filename, defaults.json_filename);
    assert_eq!(resolved.database_filename, defaults.database_filename);
    assert_eq!(resolved.logging.level, "info");
}

#[test]
fn test_resolve_toml_over_defaults() {
    let toml_config = TomlConfig {
        extension: Some(".ogg".to_string()),
        database_filename: Some(PathBuf::from("toml.db")),
        ..Default::default()
    };

    let resolved = ResolvedConfig::resolve(ConfigOverrides::default(), toml_config);

    assert_eq!(resolved.extension, ".ogg");
    assert_eq!(resolved.database_filename, PathBuf::from("toml.db"));
    assert_eq!(resolved.csv_filename, PathBuf::from("csv_output_full.csv"));
}

#[test]
fn test_resolve_cli_over_toml() {
    let toml_config = TomlConfig {
        extension: Some(".ogg".to_string()),
        music_library_path: Some(PathBuf::from("/from/toml")),
        logging: LoggingConfig {
            level: "warn".to_string(),
            file: Some(PathBuf::from("kept.log")),
        },
        ..Default::default()
    };
    let overrides = ConfigOverrides {
        extension: Some(".pdf".to_string()),
        music_library_path: Some(PathBuf::from("/from/cli")),
        log_level: Some("debug".to_string()),
        ..Default::default()
    };

    let resolved = ResolvedConfig::resolve(overrides, toml_config);

    assert_eq!(resolved.extension, ".pdf");
    assert_eq!(resolved.music_library_path, PathBuf::from("/from/cli"));
    assert_eq!(resolved.logging.level, "debug");
    assert_eq!(resolved.logging.file, Some(PathBuf::from("kept.log")));
}

#[test]
fn test_load_config_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("explicit.toml");
    std::fs::write(&path, "extension = \".wma\"\n").unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.extension.as_deref(), Some(".wma"));
}
