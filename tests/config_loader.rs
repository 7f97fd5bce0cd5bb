use cgview::config::{ColorConfig, Config, ConfigError, ConfigStore};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.general.max_symbol_length, 30);
    assert_eq!(config.general.max_symbol_count, 10);
    assert_eq!(config.general.max_list_count, 100);
    assert_eq!(config.general.percent_precision, 2);
    assert_eq!(config.general.context_lines, 3);
    assert_eq!(config.general.tab_width, 8);
    assert!(config.general.detect_cycles);
    assert!(config.source.dirs.is_empty());
    assert_eq!(config.colors.object, "#6b9bd1");
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("cgview/config.toml"));
}

#[test]
fn test_missing_file_loads_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"[general]
tab_width = 4

[source]
dirs = ["/usr/src"]
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.general.tab_width, 4);
    assert_eq!(config.general.percent_precision, 2);
    assert_eq!(config.source.dirs, vec![PathBuf::from("/usr/src")]);
    assert_eq!(config.colors, ColorConfig::default());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[general\ntab_width = ").unwrap();

    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: err_path, .. }) => assert_eq!(err_path, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_wrong_type_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[general]\ntab_width = \"wide\"\n").unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_save_creates_parent_dirs_and_reloads() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.general.context_lines = 12;
    config.colors.class = "#010203".to_string();
    config.save_to(&path).unwrap();

    assert!(path.exists());
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[general]"));
    assert!(content.contains("context_lines = 12"));
    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_store_save_writes_updates() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");

    let store = ConfigStore::open(path.clone()).unwrap();
    store.update(|config| config.general.max_list_count = 250);
    store.save().unwrap();

    let reopened = ConfigStore::open(path).unwrap();
    assert_eq!(reopened.get().general.max_list_count, 250);
}
