use std::fs;
use tempfile::TempDir;

use super::*;

fn config_path(dir: &TempDir) -> String {
    dir.path().join("config.yml").to_string_lossy().to_string()
}

#[test]
fn writes_defaults_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = config_path(&dir);

    let manager = ConfigManager::builder().path(path.clone()).build().unwrap();

    assert_eq!(manager.get(), &Config::default());
    assert_eq!(manager.get().theme, "Blue");

    let written: Config = serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, Config::default());
}

#[test]
fn loads_existing_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = config_path(&dir);
    fs::write(&path, "theme: Red\ncatalog: /tmp/deals.yml\n").unwrap();

    let manager = ConfigManager::builder().path(path).build().unwrap();

    assert_eq!(manager.get().theme, "Red");
    assert_eq!(manager.get().catalog.as_deref(), Some("/tmp/deals.yml"));
}

#[test]
fn catalog_is_optional() {
    let dir = tempfile::tempdir().unwrap();
    let path = config_path(&dir);
    fs::write(&path, "theme: Indigo\n").unwrap();

    let manager = ConfigManager::builder().path(path).build().unwrap();

    assert_eq!(manager.get().theme, "Indigo");
    assert!(manager.get().catalog.is_none());
}

#[test]
fn falls_back_to_defaults_on_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = config_path(&dir);
    fs::write(&path, "theme: [not, a, string").unwrap();

    let manager = ConfigManager::builder().path(path.clone()).build().unwrap();

    assert_eq!(manager.get(), &Config::default());
    // the broken file is left alone
    assert_eq!(fs::read_to_string(&path).unwrap(), "theme: [not, a, string");
}

#[test]
fn update_theme_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = config_path(&dir);
    fs::write(&path, "theme: Blue\ncatalog: deals.yml\n").unwrap();

    let mut manager = ConfigManager::builder().path(path.clone()).build().unwrap();
    manager.update_theme(Theme::Emerald).unwrap();

    assert_eq!(manager.get().theme, "Emerald");

    let reloaded = ConfigManager::builder().path(path).build().unwrap();
    assert_eq!(reloaded.get().theme, "Emerald");
    assert_eq!(reloaded.get().catalog.as_deref(), Some("deals.yml"));
}

#[test]
fn update_config_replaces_everything() {
    let dir = tempfile::tempdir().unwrap();
    let path = config_path(&dir);

    let mut manager = ConfigManager::builder().path(path.clone()).build().unwrap();
    let config = Config {
        theme: String::from("Red"),
        catalog: Some(String::from("other.yml")),
    };
    manager.update_config(config.clone()).unwrap();

    let reloaded = ConfigManager::builder().path(path).build().unwrap();
    assert_eq!(reloaded.get(), &config);
}

#[test]
fn build_requires_a_path() {
    assert!(ConfigManager::builder().build().is_err());
}
