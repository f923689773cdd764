//! Config file discovery and layered loading.
//!
//! Handles finding and loading the project's `site.toml` from the
//! filesystem. Sources are layered with figment; priority, highest first:
//! `SITE_`-prefixed environment variables > config file > defaults. A
//! missing config file is a valid state and yields the defaults.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format as _, Serialized, Toml};
use figment::Figment;
use tracing::debug;

use crate::config::SiteConfig;
use crate::error::{ConfigError, Result};

/// File name looked up at the project root.
pub const CONFIG_FILE: &str = "site.toml";

/// Prefix for environment-variable overrides; nesting uses `__`, e.g.
/// `SITE_ADAPTER__PRECOMPRESS=true`.
pub const ENV_PREFIX: &str = "SITE_";

/// File-based configuration discovery.
///
/// # Example
///
/// ```no_run
/// use plinth_config::ConfigDiscovery;
///
/// let config = ConfigDiscovery::new(".").load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery rooted at the project directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The config file for this root, if one exists.
    pub fn find(&self) -> Option<PathBuf> {
        let path = self.root.join(CONFIG_FILE);
        path.exists().then_some(path)
    }

    /// Load the layered configuration.
    ///
    /// # Errors
    ///
    /// Fails when a source is present but does not deserialize into the
    /// config shape; a missing file only falls back to defaults.
    pub fn load(&self) -> Result<SiteConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(SiteConfig::default()));

        if let Some(path) = self.find() {
            debug!(file = %path.display(), "loading config file");
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            message: e.to_string(),
        })
    }

    /// Load and materialize the given mode's overrides.
    pub fn load_with_mode(&self, mode: &str) -> Result<SiteConfig> {
        self.load()?.materialize_mode(Some(mode))
    }
}

/// Discover and load config from the current directory.
pub fn discover() -> Result<SiteConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(root).load()
}

/// Discover and load config with mode overrides applied.
pub fn discover_with_mode(mode: &str) -> Result<SiteConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(root).load_with_mode(mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_config() {
        let dir = TempDir::new().unwrap();
        let discovery = ConfigDiscovery::new(dir.path());
        assert!(discovery.find().is_none());
    }

    #[test]
    fn find_discovers_toml_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[adapter]\nprecompress = true\n").unwrap();

        let discovery = ConfigDiscovery::new(dir.path());
        assert_eq!(discovery.find().unwrap(), config_path);
    }

    #[test]
    fn load_falls_back_to_defaults_without_config() {
        let dir = TempDir::new().unwrap();
        let config = ConfigDiscovery::new(dir.path()).load().unwrap();
        assert_eq!(config.adapter.fallback, "404.html");
        assert!(config.paths.is_root());
    }

    #[test]
    fn load_rejects_wrongly_typed_fields() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[dev]\nport = \"not-a-port\"\n",
        )
        .unwrap();

        let result = ConfigDiscovery::new(dir.path()).load();
        assert!(matches!(result.unwrap_err(), ConfigError::InvalidValue { .. }));
    }
}
