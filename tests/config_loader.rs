use std::fs;
use std::path::PathBuf;

use catalog_ui_errors::config::{Config, ConfigError, LoggingConfig};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("api-catalog-ui/config.toml"));
}

#[test]
fn test_missing_file_yields_default() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_logging_section() {
    let (_dir, path) = write_config(
        r#"[logging]
level = "catalog_ui_errors=debug"
file = "/tmp/catalog-ui.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.logging,
        LoggingConfig {
            level: "catalog_ui_errors=debug".to_string(),
            file: Some(PathBuf::from("/tmp/catalog-ui.log")),
        }
    );
}

#[test]
fn test_empty_file_uses_defaults() {
    let (_dir, path) = write_config("");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_malformed_file_is_parse_error() {
    let (_dir, path) = write_config("[logging\nlevel = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_invalid_level_fails_validation() {
    let (_dir, path) = write_config("[logging]\nlevel = \"catalog=loud\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_errors_name_the_config_file() {
    let (_dir, path) = write_config("[logging\n");
    let err = Config::load_from(&path).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Failed to parse catalog UI config"), "{message}");
    assert!(message.contains(&path.display().to_string()), "{message}");

    let (_dir, path) = write_config("[logging]\nlevel = \"catalog=loud\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid logging level 'catalog=loud'"));
}
