use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Markdown sources are read from here unless overridden
pub const DEFAULT_SOURCE_DIR: &str = "md";
/// Generated pages land here unless overridden
pub const DEFAULT_OUTPUT_DIR: &str = "markmap";
/// Optional config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "markmap.toml";

/// Raw TOML configuration structure, matching markmap.toml exactly
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    paths: RawPaths,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPaths {
    source: Option<String>,
    output: Option<String>,
}

/// Input and output directories for a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPaths {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for BuildPaths {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl BuildPaths {
    /// Apply command-line overrides on top of the loaded paths
    pub fn with_overrides(self, source: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        Self {
            source_dir: source.unwrap_or(self.source_dir),
            output_dir: output.unwrap_or(self.output_dir),
        }
    }
}

/// Parse markmap.toml from a file path
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<BuildPaths> {
    let content = fs::read_to_string(path)?;
    parse_config_str(&content)
}

/// Load `markmap.toml` from `dir`, falling back to defaults when the file is absent
pub fn load_config_if_present<P: AsRef<Path>>(dir: P) -> Result<BuildPaths> {
    let path = dir.as_ref().join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(BuildPaths::default());
    }
    load_config(path)
}

/// Parse markmap.toml from a string (useful for testing)
pub fn parse_config_str(content: &str) -> Result<BuildPaths> {
    let raw: RawConfig = toml::from_str(content)?;
    let defaults = BuildPaths::default();

    let source_dir = match raw.paths.source {
        Some(s) => non_empty_path(&s, "paths.source")?,
        None => defaults.source_dir,
    };
    let output_dir = match raw.paths.output {
        Some(s) => non_empty_path(&s, "paths.output")?,
        None => defaults.output_dir,
    };

    Ok(BuildPaths {
        source_dir,
        output_dir,
    })
}

fn non_empty_path(value: &str, field_name: &str) -> Result<PathBuf> {
    if value.trim().is_empty() {
        return Err(Error::ConfigParse(format!("{} cannot be empty", field_name)));
    }
    Ok(PathBuf::from(value))
}
