//! Configuration types for rdf-pipeline operations.

use crate::error::Result;
use crate::output::OutputFile;
use crate::selection::GraphSelection;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file values with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output file, format and graph selection
    pub output: OutputConfig,
    /// Change-log settings for diff operations
    pub diff: DiffSettings,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Set the output language, overriding the file extension.
    pub fn output_format(mut self, format: Option<String>) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the graph selection tokens.
    pub fn graphs(mut self, graphs: Vec<String>) -> Self {
        self.config.output.graphs = graphs;
        self
    }

    /// Set the directory relative output paths are resolved against.
    pub fn base_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.config.output.base_dir = dir;
        self
    }

    /// List unchanged graphs too.
    pub const fn show_unchanged(mut self, show: bool) -> Self {
        self.config.diff.show_unchanged = show;
        self
    }

    /// Enable fail-on-change mode.
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.config.diff.fail_on_change = fail;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for diff operations
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Left side: an RDF file or a saved snapshot
    pub left: PathBuf,
    /// Right side: an RDF file or a saved snapshot
    pub right: PathBuf,
    /// Change-log file (None for stdout)
    pub output_file: Option<PathBuf>,
    /// Change-log settings
    pub diff: DiffSettings,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

/// Configuration for snapshot operations
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    /// RDF files loaded into one dataset, in order
    pub inputs: Vec<PathBuf>,
    /// Snapshot file (None for stdout)
    pub output_file: Option<PathBuf>,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

/// Configuration for write operations
#[derive(Debug, Clone)]
pub struct WriteConfig {
    /// RDF files loaded into one dataset, in order
    pub inputs: Vec<PathBuf>,
    /// Output file, format and graph selection
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Output-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output file path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Serialization language (turtle, trig, ntriples, nquads, rdfxml, n3);
    /// inferred from the file extension when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Graphs to write: IRIs, `default` or `all`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub graphs: Vec<String>,
    /// Directory relative output paths are resolved against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
}

impl OutputConfig {
    /// The configured output target, if an output file is set.
    ///
    /// Relative paths are resolved against `base_dir` when given.
    #[must_use]
    pub fn target(&self) -> Option<OutputFile> {
        let path = self.file.clone()?;
        let mut target = OutputFile::new(path).with_format(self.format.clone());
        if let Some(base) = &self.base_dir {
            target = target.with_base_dir(base.clone());
        }
        Some(target)
    }

    /// Parse the configured graph tokens.
    pub fn selection(&self) -> Result<GraphSelection> {
        GraphSelection::parse(&self.graphs)
    }
}

/// Change-log settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DiffSettings {
    /// List unchanged graphs as well as changed ones
    pub show_unchanged: bool,
    /// Exit with code 1 if any graph changed
    pub fail_on_change: bool,
}

/// Behavior flags
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
}
