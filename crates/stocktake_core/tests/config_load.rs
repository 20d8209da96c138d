use std::path::PathBuf;
use stocktake_core::{AppConfig, ConfigError};

#[test]
fn full_config_parses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stocktake.toml");
    std::fs::write(
        &path,
        r#"
export_dir = "/data/exports"
catalog_path = "/data/catalog.csv"
log_dir = "/data/logs"
log_level = "debug"
"#,
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();
    assert_eq!(config.export_dir, PathBuf::from("/data/exports"));
    assert_eq!(config.catalog_path, Some(PathBuf::from("/data/catalog.csv")));
    assert_eq!(config.log_dir, Some(PathBuf::from("/data/logs")));
    assert_eq!(config.log_level.as_deref(), Some("debug"));
}

#[test]
fn only_export_dir_is_required() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stocktake.toml");
    std::fs::write(&path, "export_dir = \"/data/exports\"\n").unwrap();

    let config = AppConfig::load(&path).unwrap();
    assert_eq!(config.export_dir, PathBuf::from("/data/exports"));
    assert!(config.catalog_path.is_none());
}

#[test]
fn missing_file_is_an_io_error() {
    let err = AppConfig::load("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_, _)));
}

#[test]
fn missing_export_dir_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stocktake.toml");
    std::fs::write(&path, "log_level = \"info\"\n").unwrap();

    let err = AppConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_, _)));
}
