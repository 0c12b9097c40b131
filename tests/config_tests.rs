use bikeshare::config::Config;
use bikeshare::errors::AppError;
use std::fs;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.data_dir, ".");
    assert_eq!(cfg.page_size, 5);
    assert_eq!(cfg.separator(), "-".repeat(40));
}

#[test]
fn test_partial_yaml_uses_defaults() {
    let cfg = Config::from_yaml("data_dir: /srv/bikeshare\nseparator_width: 10\n").unwrap();
    assert_eq!(cfg.data_dir, "/srv/bikeshare");
    assert_eq!(cfg.page_size, 5);
    assert_eq!(cfg.separator(), "----------");
}

#[test]
fn test_empty_yaml_is_default() {
    assert_eq!(Config::from_yaml("").unwrap(), Config::default());
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(matches!(Config::from_yaml("page_size: 0\n"), Err(AppError::Config(_))));
    assert!(matches!(Config::from_yaml("separator_char: '=='\n"), Err(AppError::Config(_))));
    assert!(matches!(Config::from_yaml("page_size: many\n"), Err(AppError::ConfigParse(_))));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bikeshare.conf");

    // missing file → defaults
    assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());

    fs::write(&path, "page_size: 3\nseparator_char: '='\n").unwrap();
    let cfg = Config::load(Some(&path)).unwrap();
    assert_eq!(cfg.page_size, 3);
    assert_eq!(cfg.separator(), "=".repeat(40));
}
