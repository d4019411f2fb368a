//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod diff;
mod snapshot;
mod write;

pub use diff::run_diff;
pub use snapshot::run_snapshot;
pub use write::run_write;

// Re-export config types used by handlers
pub use crate::config::{DiffConfig, SnapshotConfig, WriteConfig};

use crate::model::MemoryDataset;
use crate::parsers::load_into;
use crate::pipeline::run_step;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Load the inputs into one dataset, one pipeline step per file.
fn load_inputs(inputs: &[PathBuf], quiet: bool) -> Result<MemoryDataset> {
    let mut dataset = MemoryDataset::new();
    for path in inputs {
        let report = run_step(&format!("load {}", path.display()), &mut dataset, |ds| {
            load_into(ds, path, None).map(|_| ())
        })
        .with_context(|| format!("Failed to load {}", path.display()))?;
        if !quiet && !report.changed() {
            tracing::warn!("{} added no statements", path.display());
        }
    }
    Ok(dataset)
}
