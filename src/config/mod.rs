//! Configuration module for rdf-pipeline.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation of format names and graph tokens
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.rdf-pipeline.yaml` file in your project root or `~/.config/rdf-pipeline/`:
//!
//! ```yaml
//! output:
//!   file: build/ontology.ttl
//!   graphs:
//!     - default
//!     - http://example.com/graphs/shapes
//! diff:
//!   fail_on_change: true
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, DiffConfig, DiffSettings, OutputConfig,
    SnapshotConfig, WriteConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    config_search_dirs, discover_config_file, generate_example_config, load_config_file,
    load_or_default, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate `.rdf-pipeline.yaml` files.
pub fn generate_json_schema() -> serde_json::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
