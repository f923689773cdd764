//! Pluggable config validation strategies
//!
//! Separates shape validation (no filesystem access) from filesystem
//! validation, which also parses the environment-definition files eagerly so
//! a malformed file aborts configuration evaluation instead of the build
//! proper.

use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::context::DEFAULT_MODE;
use crate::env::{parse_env_file, EnvironmentLoader};
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate a site configuration
    fn validate(&self, config: &SiteConfig) -> Result<()>;
}

/// Shape-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use plinth_config::{SiteConfig, SchemaValidator, ConfigValidator};
///
/// let config = SiteConfig::default();
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &SiteConfig) -> Result<()> {
        let adapter = &config.adapter;

        if adapter.pages.as_os_str().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "adapter pages directory cannot be empty".to_string(),
                hint: "Set adapter.pages to the directory prerendered pages go into".to_string(),
            });
        }

        if adapter.assets.as_os_str().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "adapter assets directory cannot be empty".to_string(),
                hint: "Set adapter.assets to the directory static assets go into".to_string(),
            });
        }

        if adapter.fallback.is_empty() || adapter.fallback.contains(['/', '\\']) {
            return Err(ConfigError::SchemaValidation {
                message: format!("invalid fallback page '{}'", adapter.fallback),
                hint: "The fallback must be a bare filename like 404.html".to_string(),
            });
        }

        if let Some(dev) = &config.dev {
            for host in &dev.allowed_hosts {
                if host.trim().is_empty() {
                    return Err(ConfigError::SchemaValidation {
                        message: "allowed host entries cannot be blank".to_string(),
                        hint: "Remove empty strings from dev.allowed_hosts".to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Filesystem validator
///
/// Runs the schema checks, then parses the environment-definition files for
/// the configured root and mode so format errors surface before the external
/// tool is ever invoked.
pub struct FsValidator {
    root: PathBuf,
    mode: String,
}

impl FsValidator {
    /// Create a filesystem validator for a project root and build mode.
    pub fn new(root: impl AsRef<Path>, mode: impl Into<String>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            mode: mode.into(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &SiteConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        for path in EnvironmentLoader::new(&self.root, self.mode.as_str()).candidate_files() {
            if path.exists() {
                parse_env_file(&path)?;
            }
        }

        Ok(())
    }
}

/// Convenience function for shape-only validation
pub fn validate_schema(config: &SiteConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &SiteConfig, root: impl AsRef<Path>, mode: Option<&str>) -> Result<()> {
    FsValidator::new(root, mode.unwrap_or(DEFAULT_MODE)).validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_validator_accepts_defaults() {
        assert!(SchemaValidator.validate(&SiteConfig::default()).is_ok());
    }

    #[test]
    fn schema_validator_rejects_empty_pages_dir() {
        let mut config = SiteConfig::default();
        config.adapter.pages = "".into();
        let result = SchemaValidator.validate(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_fallback_with_separators() {
        let mut config = SiteConfig::default();
        config.adapter.fallback = "errors/404.html".to_string();
        let result = SchemaValidator.validate(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_blank_allowed_host() {
        let mut config = SiteConfig::default();
        config.dev = Some(crate::dev::DevOptions {
            allowed_hosts: vec![".ngrok-free.app".to_string(), "   ".to_string()],
            ..Default::default()
        });
        let result = SchemaValidator.validate(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn validate_schema_helper_works() {
        assert!(validate_schema(&SiteConfig::default()).is_ok());
    }
}
