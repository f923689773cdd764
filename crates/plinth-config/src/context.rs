//! Build invocation context.
//!
//! A [`BuildContext`] is assembled once per build invocation from the raw
//! invocation arguments, the merged environment, and the active mode, then
//! handed to resolution as a plain value. Nothing downstream reads ambient
//! process state, so resolution stays a pure function of the context and
//! tests never have to mutate real environment variables.

use std::path::Path;

use indexmap::IndexMap;

use crate::env::EnvironmentLoader;
use crate::error::Result;

/// Mode assumed when the invoking tool does not specify one.
pub const DEFAULT_MODE: &str = "development";

/// Inputs of a single configuration-evaluation pass.
///
/// The context is consumed once and discarded; it is never serialized or
/// persisted.
#[derive(Debug, Clone)]
pub struct BuildContext {
    args: Vec<String>,
    env: IndexMap<String, String>,
    mode: String,
}

impl BuildContext {
    /// Create an empty context for the given mode.
    pub fn new(mode: impl Into<String>) -> Self {
        Self {
            args: Vec::new(),
            env: IndexMap::new(),
            mode: mode.into(),
        }
    }

    /// Assemble a context from the running process.
    ///
    /// Reads the invocation arguments and process environment, and merges
    /// environment-definition files for `mode` found under `root`. This is
    /// the only constructor that touches ambient process state.
    ///
    /// # Errors
    ///
    /// Fails if an environment-definition file exists but cannot be parsed.
    pub fn from_process(root: impl AsRef<Path>, mode: Option<&str>) -> Result<Self> {
        let mode = mode.unwrap_or(DEFAULT_MODE);
        let env = EnvironmentLoader::new(root, mode).load(std::env::vars())?;
        Ok(Self {
            args: std::env::args().collect(),
            env,
            mode: mode.to_string(),
        })
    }

    /// Replace the invocation arguments.
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Insert a single environment variable.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Replace the environment map wholesale.
    pub fn with_environment(mut self, env: IndexMap<String, String>) -> Self {
        self.env = env;
        self
    }

    /// Raw arguments the build was invoked with.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The active build mode.
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Look up a variable in the merged environment.
    pub fn var(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }

    /// The full merged environment.
    pub fn environment(&self) -> &IndexMap<String, String> {
        &self.env
    }
}

impl Default for BuildContext {
    fn default() -> Self {
        Self::new(DEFAULT_MODE)
    }
}
