//! Snapshot command handler.

use super::load_inputs;
use crate::config::SnapshotConfig;
use crate::diff::DatasetState;
use crate::pipeline::{write_output, OutputTarget};
use anyhow::{Context, Result};

/// Load the inputs and write the captured dataset state as JSON.
#[allow(clippy::needless_pass_by_value)]
pub fn run_snapshot(config: SnapshotConfig) -> Result<DatasetState> {
    let quiet = config.behavior.quiet;
    let dataset = load_inputs(&config.inputs, quiet)?;

    let state = DatasetState::capture(&dataset);
    if !quiet {
        tracing::info!(
            "Captured {} graphs holding {} triples",
            state.graph_count(),
            state.total_size()
        );
    }

    let json = state.to_json().context("Failed to serialize snapshot")?;
    write_output(&json, &OutputTarget::from_option(config.output_file), quiet)?;
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BehaviorConfig;
    use crate::model::GraphId;

    #[test]
    fn test_snapshot_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.nq");
        std::fs::write(
            &input,
            "<http://example.com/s> <http://example.com/p> \"o\" <http://example.com/g> .\n\
             <http://example.com/s> <http://example.com/p> \"d\" .\n",
        )
        .unwrap();
        let output = dir.path().join("state.json");

        let state = run_snapshot(SnapshotConfig {
            inputs: vec![input],
            output_file: Some(output.clone()),
            behavior: BehaviorConfig { quiet: true },
        })
        .unwrap();

        let saved = DatasetState::load(&output).unwrap();
        assert_eq!(saved.graph_count(), 2);
        assert_eq!(
            saved.hash(&GraphId::named("http://example.com/g").unwrap()),
            state.hash(&GraphId::named("http://example.com/g").unwrap())
        );
        assert_eq!(saved.size(&GraphId::Default), Some(1));
    }
}
