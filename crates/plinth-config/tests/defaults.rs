//! Tests for default values and edge cases.

use plinth_config::{AdapterOptions, DevOptions, GlobalSettings, PathsOptions, SiteConfig};
use std::path::PathBuf;

#[test]
fn site_config_defaults() {
    let config = SiteConfig::default();
    assert!(config.preprocess.is_null());
    assert!(config.dev.is_none());
    assert!(config.modes.is_empty());
    assert!(config.paths.is_root());
}

#[test]
fn adapter_options_defaults() {
    let adapter = AdapterOptions::default();
    assert_eq!(adapter.pages, PathBuf::from("build"));
    assert_eq!(adapter.assets, PathBuf::from("build"));
    assert_eq!(adapter.fallback, "404.html");
    assert!(!adapter.precompress);
    assert!(adapter.strict);
}

#[test]
fn paths_options_default_to_root() {
    let paths = PathsOptions::default();
    assert_eq!(paths.base, "");
    assert!(paths.is_root());
}

#[test]
fn dev_options_defaults() {
    let dev = DevOptions::default();
    assert_eq!(dev.host, "127.0.0.1");
    assert!(dev.port.is_none());
    assert!(dev.open);
    assert!(dev.allowed_hosts.is_empty());
}

#[test]
fn global_settings_defaults() {
    let settings = GlobalSettings::default();
    assert!(settings.log_level.is_none());
    assert!(settings.log_format.is_none());
    assert!(settings.environment.is_empty());
}

#[test]
fn defaults_deserialize_from_an_empty_document() {
    let config: SiteConfig = toml::from_str("").expect("empty config");
    assert_eq!(config.adapter, AdapterOptions::default());
    assert!(config.paths.is_root());
}
