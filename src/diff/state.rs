//! Dataset snapshots.

use crate::error::{RdfPipelineError, Result};
use crate::model::{GraphId, RdfDataset};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Size and content hash of one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of statements
    pub size: usize,
    /// Wrapping sum of the statement hashes
    pub hash: i32,
}

/// Immutable snapshot of a dataset at one point of the pipeline.
///
/// Holds, per graph, the statement count and an order-independent content
/// hash. The default graph is always part of a snapshot, even when empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[must_use]
pub struct DatasetState {
    captured_at: DateTime<Utc>,
    graphs: BTreeMap<GraphId, GraphStats>,
}

impl DatasetState {
    /// Capture the current state of a dataset.
    ///
    /// Only reads the dataset. Graphs are hashed in parallel.
    pub fn capture<D>(dataset: &D) -> Self
    where
        D: RdfDataset + Sync + ?Sized,
    {
        let mut graphs: BTreeMap<GraphId, GraphStats> = dataset
            .graph_ids()
            .into_par_iter()
            .filter_map(|id| {
                let graph = dataset.graph(&id)?;
                let hash = graph
                    .iter()
                    .fold(0i32, |acc, t| acc.wrapping_add(dataset.statement_hash(t)));
                let size = dataset.graph_size(&id).unwrap_or_else(|| graph.len());
                Some((id, GraphStats { size, hash }))
            })
            .collect();

        graphs
            .entry(GraphId::Default)
            .or_insert(GraphStats { size: 0, hash: 0 });

        tracing::debug!("Captured dataset state with {} graphs", graphs.len());

        Self {
            captured_at: Utc::now(),
            graphs,
        }
    }

    /// Build a state from precomputed statistics.
    ///
    /// The default graph is added as empty when missing.
    pub fn from_stats(stats: impl IntoIterator<Item = (GraphId, GraphStats)>) -> Self {
        let mut graphs: BTreeMap<GraphId, GraphStats> = stats.into_iter().collect();
        graphs
            .entry(GraphId::Default)
            .or_insert(GraphStats { size: 0, hash: 0 });
        Self {
            captured_at: Utc::now(),
            graphs,
        }
    }

    /// All graph names in the snapshot, default graph first.
    pub fn graph_names(&self) -> impl Iterator<Item = &GraphId> {
        self.graphs.keys()
    }

    /// Whether the snapshot contains the graph.
    #[must_use]
    pub fn contains(&self, id: &GraphId) -> bool {
        self.graphs.contains_key(id)
    }

    /// Statement count of a graph, `None` if absent.
    #[must_use]
    pub fn size(&self, id: &GraphId) -> Option<usize> {
        self.graphs.get(id).map(|s| s.size)
    }

    /// Content hash of a graph, `None` if absent.
    #[must_use]
    pub fn hash(&self, id: &GraphId) -> Option<i32> {
        self.graphs.get(id).map(|s| s.hash)
    }

    /// Number of graphs, including the default graph.
    #[must_use]
    pub fn graph_count(&self) -> usize {
        self.graphs.len()
    }

    /// Total number of statements over all graphs.
    #[must_use]
    pub fn total_size(&self) -> usize {
        self.graphs.values().map(|s| s.size).sum()
    }

    /// When the snapshot was taken.
    #[must_use]
    pub const fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            RdfPipelineError::serialize(
                "dataset state",
                crate::error::SerializeErrorKind::Json(e.to_string()),
            )
        })
    }

    /// Parse a snapshot previously written by [`DatasetState::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        let mut state: Self = serde_json::from_str(json)?;
        state
            .graphs
            .entry(GraphId::Default)
            .or_insert(GraphStats { size: 0, hash: 0 });
        Ok(state)
    }

    /// Write the snapshot to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| RdfPipelineError::io(path, e))
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| RdfPipelineError::io(path, e))?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MemoryDataset;
    use oxrdf::{Literal, NamedNode, Triple};

    fn triple(s: &str) -> Triple {
        Triple::new(
            NamedNode::new_unchecked(format!("http://example.com/{s}")),
            NamedNode::new_unchecked("http://example.com/p"),
            Literal::new_simple_literal(s),
        )
    }

    fn graph(name: &str) -> GraphId {
        GraphId::named(format!("http://example.com/{name}")).unwrap()
    }

    #[test]
    fn test_empty_dataset_has_default_graph() {
        let state = DatasetState::capture(&MemoryDataset::new());
        assert!(state.contains(&GraphId::Default));
        assert_eq!(state.size(&GraphId::Default), Some(0));
        assert_eq!(state.hash(&GraphId::Default), Some(0));
        assert_eq!(state.graph_count(), 1);
    }

    #[test]
    fn test_capture_sizes_and_hashes() {
        let mut ds = MemoryDataset::new();
        ds.insert(&GraphId::Default, &triple("d"));
        ds.insert(&graph("g"), &triple("a"));
        ds.insert(&graph("g"), &triple("b"));

        let state = DatasetState::capture(&ds);
        assert_eq!(state.size(&graph("g")), Some(2));
        assert_eq!(state.size(&GraphId::Default), Some(1));
        assert_eq!(state.total_size(), 3);
        assert_eq!(state.size(&graph("missing")), None);
        assert_eq!(state.hash(&graph("missing")), None);
    }

    #[test]
    fn test_insertion_order_does_not_change_hash() {
        let mut forward = MemoryDataset::new();
        let mut backward = MemoryDataset::new();
        for name in ["a", "b", "c"] {
            forward.insert(&graph("g"), &triple(name));
        }
        for name in ["c", "b", "a"] {
            backward.insert(&graph("g"), &triple(name));
        }
        assert_eq!(
            DatasetState::capture(&forward).hash(&graph("g")),
            DatasetState::capture(&backward).hash(&graph("g"))
        );
    }

    #[test]
    fn test_json_roundtrip_keeps_graphs() {
        let mut ds = MemoryDataset::new();
        ds.insert(&graph("g"), &triple("a"));
        let state = DatasetState::capture(&ds);

        let restored = DatasetState::from_json(&state.to_json().unwrap()).unwrap();
        assert_eq!(restored.size(&graph("g")), Some(1));
        assert_eq!(restored.hash(&graph("g")), state.hash(&graph("g")));
        assert!(restored.contains(&GraphId::Default));
    }

    #[test]
    fn test_from_json_restores_missing_default_graph() {
        let json = r#"{"captured_at":"2024-01-01T00:00:00Z","graphs":{}}"#;
        let state = DatasetState::from_json(json).unwrap();
        assert!(state.contains(&GraphId::Default));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let state = DatasetState::from_stats([(graph("g"), GraphStats { size: 4, hash: 7 })]);
        state.save(&path).unwrap();
        let loaded = DatasetState::load(&path).unwrap();
        assert_eq!(loaded.size(&graph("g")), Some(4));
        assert_eq!(loaded.hash(&graph("g")), Some(7));
    }
}
