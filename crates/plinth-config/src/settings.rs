//! Global configuration settings shared across modes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalSettings {
    #[serde(default)]
    pub log_level: Option<String>,

    #[serde(default)]
    pub log_format: Option<String>,

    /// Lowest-precedence environment variables; anything loaded from an
    /// environment-definition file or the process environment overrides them.
    #[serde(default)]
    pub environment: HashMap<String, String>,
}
