//! Development server configuration types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevOptions {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default = "default_open")]
    pub open: bool,

    /// Host names (or `.suffix` patterns) allowed to reach the dev server,
    /// e.g. `".ngrok-free.app"` when tunneling.
    #[serde(default)]
    pub allowed_hosts: Vec<String>,
}

impl Default for DevOptions {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: None,
            open: default_open(),
            allowed_hosts: Vec::new(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_open() -> bool {
    true
}
