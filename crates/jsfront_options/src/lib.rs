//! jsfront_options: Project configuration and compiler options.
//!
//! Parses `jsfront.json` project files into [`ProjectConfig`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Compiler options, as written under `compilerOptions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompilerOptions {
    /// Treat the strict-mode reserved words as keywords.
    pub strict: Option<bool>,
}

impl CompilerOptions {
    pub fn is_strict(&self) -> bool {
        self.strict.unwrap_or(false)
    }

    /// Overlay the options set in `overrides` onto `self`.
    pub fn merge(&mut self, overrides: &CompilerOptions) {
        if overrides.strict.is_some() {
            self.strict = overrides.strict;
        }
    }
}

/// The `jsfront.json` file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub compiler_options: Option<CompilerOptions>,
    pub files: Option<Vec<String>>,
}

impl ProjectConfig {
    pub fn compiler_options(&self) -> CompilerOptions {
        self.compiler_options.clone().unwrap_or_default()
    }

    /// The listed files, resolved against `base_dir` when relative.
    pub fn file_paths(&self, base_dir: &Path) -> Vec<PathBuf> {
        self.files
            .iter()
            .flatten()
            .map(|file| base_dir.join(file))
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a project config from a string.
pub fn parse_config(content: &str) -> Result<ProjectConfig, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a project config from a path.
pub fn parse_config_file(path: impl AsRef<Path>) -> Result<ProjectConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}
