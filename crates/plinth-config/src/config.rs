//! High-level site configuration and mode merging.
//!
//! This module provides the root `SiteConfig` struct, `[modes.*]` override
//! merging, and final resolution against a [`BuildContext`]. For file
//! discovery, see the `discovery` module.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::adapter::AdapterOptions;
use crate::context::BuildContext;
use crate::dev::DevOptions;
use crate::error::{ConfigError, Result};
use crate::paths::{resolve_base_path, PathsOptions};
use crate::settings::GlobalSettings;

/// The full option set handed to the site-generation tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Preprocessing step, forwarded opaquely to the external tool.
    #[serde(default)]
    pub preprocess: Value,

    #[serde(default)]
    pub adapter: AdapterOptions,

    #[serde(default)]
    pub paths: PathsOptions,

    #[serde(default)]
    pub dev: Option<DevOptions>,

    #[serde(default)]
    pub settings: GlobalSettings,

    #[serde(default)]
    pub modes: HashMap<String, ModeOverrides>,
}

/// Per-mode override tables, merged over the base config when the mode is
/// materialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModeOverrides {
    #[serde(default)]
    pub adapter: Value,

    #[serde(default)]
    pub paths: Value,

    #[serde(default)]
    pub dev: Value,

    #[serde(default)]
    pub settings: Value,
}

impl SiteConfig {
    /// Create from `serde_json::Value` (for programmatic config).
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            message: e.to_string(),
        })
    }

    /// Convert to `serde_json::Value`.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply the override tables of `mode`, if any.
    ///
    /// Objects merge key by key, preserving unspecified fields; arrays and
    /// scalars replace. An unknown mode is a no-op.
    pub fn materialize_mode(mut self, mode: Option<&str>) -> Result<Self> {
        let Some(name) = mode else {
            return Ok(self);
        };
        let Some(overrides) = self.modes.get(name).cloned() else {
            return Ok(self);
        };

        if !overrides.adapter.is_null() {
            self.adapter = merge_section(&self.adapter, &overrides.adapter, name)?;
        }
        if !overrides.paths.is_null() {
            self.paths = merge_section(&self.paths, &overrides.paths, name)?;
        }
        if !overrides.settings.is_null() {
            self.settings = merge_section(&self.settings, &overrides.settings, name)?;
        }
        if !overrides.dev.is_null() {
            let mut base = match &self.dev {
                Some(dev) => to_merge_value(dev, name)?,
                None => Value::Null,
            };
            merge_values(&mut base, &overrides.dev);
            self.dev = Some(from_merge_value(base, name)?);
        }

        Ok(self)
    }

    /// Produce the final option set for one build invocation: materialize the
    /// context's mode, then resolve the base path from the context's merged
    /// environment. A non-empty environment value replaces whatever the
    /// config file supplied.
    pub fn resolve(self, ctx: &BuildContext) -> Result<Self> {
        let mut config = self.materialize_mode(Some(ctx.mode()))?;
        let base = resolve_base_path(ctx);
        if !base.is_empty() {
            config.paths.base = base;
        }
        Ok(config)
    }

    /// Environment loader seeded with this config's `settings.environment`
    /// table as the lowest-precedence layer.
    pub fn environment_loader(
        &self,
        root: impl AsRef<std::path::Path>,
        mode: impl Into<String>,
    ) -> crate::env::EnvironmentLoader {
        crate::env::EnvironmentLoader::new(root, mode)
            .with_defaults(self.settings.environment.clone())
    }
}

fn merge_section<T>(base: &T, update: &Value, mode: &str) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let mut value = to_merge_value(base, mode)?;
    merge_values(&mut value, update);
    from_merge_value(value, mode)
}

fn to_merge_value<T: Serialize>(section: &T, mode: &str) -> Result<Value> {
    serde_json::to_value(section).map_err(|err| ConfigError::InvalidModeOverride {
        mode: mode.to_string(),
        message: err.to_string(),
    })
}

fn from_merge_value<T: DeserializeOwned>(value: Value, mode: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|err| ConfigError::InvalidModeOverride {
        mode: mode.to_string(),
        message: err.to_string(),
    })
}

fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (slot, other) => *slot = other.clone(),
    }
}
