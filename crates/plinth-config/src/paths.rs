//! Base-path resolution and URL prefixing.
//!
//! A statically generated site deployed under a project subpath (rather than
//! a domain root) needs every generated page and asset link prefixed with
//! that subpath. The prefix comes from the build environment; everything
//! downstream goes through [`PathsOptions`] instead of concatenating it by
//! hand.

use serde::{Deserialize, Serialize};

use crate::context::BuildContext;

/// Environment variable holding the deployment subpath.
pub const BASE_PATH_VAR: &str = "PUBLIC_BASE_PATH";

/// Resolve the base URL path for the given build context.
///
/// Returns the exact value of [`BASE_PATH_VAR`] from the merged environment
/// when it is set and non-empty, and `""` (serve at root) otherwise. The
/// value is used as supplied: no trimming, no normalization. Absence of
/// configuration is a valid state, never an error.
pub fn resolve_base_path(ctx: &BuildContext) -> String {
    match ctx.var(BASE_PATH_VAR) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => String::new(),
    }
}

/// Routing and link-prefixing options handed to the site-generation tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsOptions {
    /// URL path prefix the site is served under; empty means the domain root.
    #[serde(default)]
    pub base: String,
}

impl PathsOptions {
    /// Whether the site is served at the domain root.
    pub fn is_root(&self) -> bool {
        self.base.is_empty()
    }

    /// Absolute URL path for a file or route under the site.
    ///
    /// ```
    /// use plinth_config::PathsOptions;
    ///
    /// let paths = PathsOptions { base: "/my-project".into() };
    /// assert_eq!(paths.url_for("app.css"), "/my-project/app.css");
    ///
    /// let root = PathsOptions::default();
    /// assert_eq!(root.url_for("app.css"), "/app.css");
    /// ```
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if self.is_root() {
            format!("/{path}")
        } else {
            format!("{}/{path}", self.base)
        }
    }
}
