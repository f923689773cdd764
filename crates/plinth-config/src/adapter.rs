//! Static-adapter options passed through to the site-generation tool.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options for the static-site adapter that turns the generator's build
/// output into a deployable set of files. All fields are forwarded verbatim;
/// nothing here is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterOptions {
    /// Directory the adapter writes prerendered pages into.
    #[serde(default = "default_pages")]
    pub pages: PathBuf,

    /// Directory the adapter writes static assets into.
    #[serde(default = "default_assets")]
    pub assets: PathBuf,

    /// Fallback page served for routes with no prerendered file.
    #[serde(default = "default_fallback")]
    pub fallback: String,

    /// Emit precompressed (.gz/.br) variants alongside each file.
    #[serde(default)]
    pub precompress: bool,

    /// Fail the build when a route cannot be prerendered.
    #[serde(default = "default_strict")]
    pub strict: bool,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self {
            pages: default_pages(),
            assets: default_assets(),
            fallback: default_fallback(),
            precompress: false,
            strict: default_strict(),
        }
    }
}

fn default_pages() -> PathBuf {
    PathBuf::from("build")
}

fn default_assets() -> PathBuf {
    PathBuf::from("build")
}

fn default_fallback() -> String {
    "404.html".into()
}

fn default_strict() -> bool {
    true
}
