//! Integration tests for campfire-config crate.

use campfire_common::test_utils::{config_fixtures, create_temp_dir, write_temp_file};
use campfire_config::{Config, ConfigCache, ConfigLoader, PresenceStatus};

#[test]
fn test_default_config_validation() {
    let mut config = Config::default();

    // Default config should fail validation due to the empty token
    assert!(config.validate().is_err());

    config.discord.token = "test_token".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_full_config_from_file() {
    let dir = create_temp_dir();
    let path = write_temp_file(&dir, "config.yaml", config_fixtures::full_config_yaml());

    let config = ConfigLoader::load_config(&path).unwrap();
    assert_eq!(config.discord.status, PresenceStatus::Idle);
    assert_eq!(config.discord.owners, vec![123_456_789_012_345_678]);
    assert_eq!(config.help.plugins_per_page, 2);
    assert_eq!(config.help.hidden_categories, vec!["Admin", "Debug"]);
    assert_eq!(config.embeds.info_colour, 0xE6_7E22);
    assert_eq!(config.embeds.error_delete_delay_seconds, 5);
    assert!(config.logging.json_format);
}

#[test]
fn test_load_minimal_config_uses_defaults() {
    let dir = create_temp_dir();
    let path = write_temp_file(&dir, "config.yaml", config_fixtures::minimal_config_yaml());

    let config = ConfigLoader::load_config(&path).unwrap();
    assert_eq!(config.help, Config::default().help);
    assert_eq!(config.embeds, Config::default().embeds);
    assert_eq!(config.help.hidden_categories, vec!["Admin"]);
}

#[test]
fn test_invalid_config_rejected() {
    let dir = create_temp_dir();
    let path = write_temp_file(&dir, "config.yaml", config_fixtures::invalid_config_yaml());

    assert!(ConfigLoader::load_config(&path).is_err());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = create_temp_dir();
    let err = ConfigLoader::load_config(dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, campfire_config::ConfigError::IoError(_)));
}

#[test]
fn test_config_cache() {
    let config = Config::default();
    let cache = ConfigCache::new(config.clone());

    let cached_config = cache.get();
    assert_eq!(cached_config.help.plugins_per_page, 1);

    let mut new_config = config;
    new_config.help.plugins_per_page = 4;
    cache.update(new_config);

    assert_eq!(cache.get().help.plugins_per_page, 4);
    // Earlier snapshots are unaffected by the swap.
    assert_eq!(cached_config.help.plugins_per_page, 1);
}

#[test]
fn test_cache_reload_from_source() {
    let dir = create_temp_dir();
    let path = write_temp_file(&dir, "config.yaml", config_fixtures::minimal_config_yaml());
    let initial = ConfigLoader::load_config(&path).unwrap();
    let cache = ConfigCache::with_source(initial, Some(path.clone()));

    std::fs::write(&path, config_fixtures::full_config_yaml()).unwrap();
    let reloaded = cache.reload().unwrap();
    assert_eq!(reloaded.help.plugins_per_page, 2);
    assert_eq!(cache.get().help.plugins_per_page, 2);
}

#[test]
fn test_failed_reload_keeps_current_config() {
    let dir = create_temp_dir();
    let path = write_temp_file(&dir, "config.yaml", config_fixtures::minimal_config_yaml());
    let initial = ConfigLoader::load_config(&path).unwrap();
    let cache = ConfigCache::with_source(initial, Some(path.clone()));

    std::fs::write(&path, config_fixtures::invalid_config_yaml()).unwrap();
    assert!(cache.reload().is_err());
    assert_eq!(cache.get().help.plugins_per_page, 1);
}
