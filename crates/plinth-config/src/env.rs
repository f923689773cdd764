//! Environment-definition file loading and merging.
//!
//! A project may carry `.env` and `.env.<mode>` files of `KEY=VALUE` lines
//! next to its config file. They populate the build environment for a given
//! mode, with real process variables taking precedence over anything loaded
//! from disk.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Loads and merges the environment for one build invocation.
///
/// Merge precedence, lowest to highest: defaults registered via
/// [`with_defaults`](Self::with_defaults), `.env`, `.env.<mode>`, then the
/// process environment passed to [`load`](Self::load).
pub struct EnvironmentLoader {
    root: PathBuf,
    mode: String,
    defaults: IndexMap<String, String>,
}

impl EnvironmentLoader {
    /// Create a loader rooted at the project directory for the given mode.
    pub fn new(root: impl AsRef<Path>, mode: impl Into<String>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            mode: mode.into(),
            defaults: IndexMap::new(),
        }
    }

    /// Register lowest-precedence variables, e.g. from a config file's
    /// `settings.environment` table.
    pub fn with_defaults(
        mut self,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        self.defaults.extend(vars);
        self
    }

    /// The files consulted for this root and mode, in merge order.
    pub fn candidate_files(&self) -> [PathBuf; 2] {
        [
            self.root.join(".env"),
            self.root.join(format!(".env.{}", self.mode)),
        ]
    }

    /// Merge defaults, environment-definition files, and the given process
    /// environment into one map.
    ///
    /// Missing files are skipped; a file that exists but cannot be parsed
    /// aborts with [`ConfigError::EnvFileMalformed`]. Values are never
    /// logged, only file names and variable counts.
    pub fn load(
        &self,
        process_env: impl IntoIterator<Item = (String, String)>,
    ) -> Result<IndexMap<String, String>> {
        let mut merged = self.defaults.clone();

        for path in self.candidate_files() {
            if !path.exists() {
                continue;
            }
            let vars = parse_env_file(&path)?;
            debug!(file = %path.display(), count = vars.len(), "merged environment file");
            merged.extend(vars);
        }

        for (key, value) in process_env {
            merged.insert(key, value);
        }

        Ok(merged)
    }
}

/// Parse a single environment-definition file.
pub fn parse_env_file(path: &Path) -> Result<IndexMap<String, String>> {
    let content = fs::read_to_string(path)?;
    parse_env_content(&content).map_err(|(line, reason)| ConfigError::EnvFileMalformed {
        path: path.to_path_buf(),
        line,
        reason,
    })
}

fn parse_env_content(content: &str) -> std::result::Result<IndexMap<String, String>, (usize, String)> {
    let mut vars = IndexMap::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").map(str::trim_start).unwrap_or(line);
        let Some((key, value)) = line.split_once('=') else {
            return Err((idx + 1, "missing '=' separator".to_string()));
        };

        let key = key.trim_end();
        if key.is_empty() {
            return Err((idx + 1, "empty variable name".to_string()));
        }
        if !is_valid_key(key) {
            return Err((idx + 1, format!("invalid variable name '{key}'")));
        }

        vars.insert(key.to_string(), unquote(value.trim()).to_string());
    }

    Ok(vars)
}

fn is_valid_key(key: &str) -> bool {
    !key.starts_with(|c: char| c.is_ascii_digit())
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_assignments() {
        let vars = parse_env_content("PUBLIC_BASE_PATH=/svelte-aframe\nAPI_URL=http://localhost:8080\n").unwrap();
        assert_eq!(vars["PUBLIC_BASE_PATH"], "/svelte-aframe");
        assert_eq!(vars["API_URL"], "http://localhost:8080");
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        let vars = parse_env_content("# deployment prefix\n\nPUBLIC_BASE_PATH=/docs\n").unwrap();
        assert_eq!(vars.len(), 1);
    }

    #[test]
    fn strips_quotes_and_export_prefix() {
        let vars = parse_env_content("export GREETING=\"hello world\"\nNAME='site'\n").unwrap();
        assert_eq!(vars["GREETING"], "hello world");
        assert_eq!(vars["NAME"], "site");
    }

    #[test]
    fn later_assignment_wins_within_a_file() {
        let vars = parse_env_content("KEY=a\nKEY=b\n").unwrap();
        assert_eq!(vars["KEY"], "b");
    }

    #[test]
    fn empty_value_is_allowed() {
        let vars = parse_env_content("PUBLIC_BASE_PATH=\n").unwrap();
        assert_eq!(vars["PUBLIC_BASE_PATH"], "");
    }

    #[test]
    fn missing_separator_reports_line_number() {
        let err = parse_env_content("OK=1\nnot a variable\n").unwrap_err();
        assert_eq!(err.0, 2);
    }

    #[test]
    fn rejects_invalid_variable_names() {
        assert!(parse_env_content("1BAD=x\n").is_err());
        assert!(parse_env_content("BAD KEY=x\n").is_err());
        assert!(parse_env_content("=x\n").is_err());
    }
}
