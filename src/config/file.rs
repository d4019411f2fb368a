//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".rdf-pipeline.yaml",
    ".rdf-pipeline.yml",
    "rdf-pipeline.yaml",
    "rdf-pipeline.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/rdf-pipeline/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        tracing::warn!("Config file {} does not exist", path.display());
    }

    config_search_dirs()
        .iter()
        .find_map(|dir| find_config_in_dir(dir))
}

/// Directories searched for a config file, in discovery order.
///
/// The git root is left out when it is the current directory.
#[must_use]
pub fn config_search_dirs() -> Vec<PathBuf> {
    let mut search: Vec<PathBuf> = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        search.push(cwd);
    }
    if let Some(git_root) = find_git_root() {
        if !search.contains(&git_root) {
            search.push(git_root);
        }
    }
    if let Some(config_dir) = dirs::config_dir() {
        search.push(config_dir.join("rdf-pipeline"));
    }
    if let Some(home) = dirs::home_dir() {
        search.push(home);
    }
    search
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    /// File not found
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// IO error reading file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Unset options and `false` flags in `other` leave this config alone.
    pub fn merge(&mut self, other: &Self) {
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.format.is_some() {
            self.output.format.clone_from(&other.output.format);
        }
        if !other.output.graphs.is_empty() {
            self.output.graphs.clone_from(&other.output.graphs);
        }
        if other.output.base_dir.is_some() {
            self.output.base_dir.clone_from(&other.output.base_dir);
        }

        if other.diff.show_unchanged {
            self.diff.show_unchanged = true;
        }
        if other.diff.fail_on_change {
            self.diff.fail_on_change = true;
        }

        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_example_config() -> String {
    r"# rdf-pipeline configuration
# Place this file at .rdf-pipeline.yaml in your project root
# or in ~/.config/rdf-pipeline/. CLI arguments override file settings.

# Output configuration
output:
  # Output file path
  # file: build/ontology.trig
  # Language: turtle, trig, ntriples, nquads, rdfxml, n3
  # (inferred from the file extension when omitted)
  # format: trig
  # Graphs to write: IRIs, `default` or `all`.
  # Empty writes everything to quad formats, only the default graph
  # to triple formats.
  # graphs:
  #   - default
  #   - http://example.com/graphs/shapes
  # Directory relative output paths are resolved against
  # base_dir: build

# Change-log settings
diff:
  # List unchanged graphs as well as changed ones
  show_unchanged: false
  # Exit with code 1 if any graph changed
  fail_on_change: false

# Behavior flags
behavior:
  # Suppress non-essential output
  quiet: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
