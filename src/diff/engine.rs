//! Graph-level diff between two dataset snapshots.

use super::{DatasetDifference, DatasetState, GraphDifference};
use std::collections::BTreeSet;

/// Compares dataset snapshots graph by graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetDiffEngine;

impl DatasetDiffEngine {
    /// Create a new diff engine
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Compare two snapshots.
    ///
    /// Every graph named on either side gets exactly one record; a graph
    /// missing on one side has size 0 and no hash there.
    pub fn diff(&self, left: &DatasetState, right: &DatasetState) -> DatasetDifference {
        let names: BTreeSet<_> = left.graph_names().chain(right.graph_names()).collect();

        let graphs: Vec<GraphDifference> = names
            .into_iter()
            .map(|name| {
                let lookup = |state: &DatasetState| {
                    state
                        .size(name)
                        .and_then(|size| state.hash(name).map(|hash| (size, hash)))
                };
                GraphDifference::new(name.clone(), lookup(left), lookup(right))
            })
            .collect();

        let result = DatasetDifference::from_graphs(graphs);
        tracing::debug!(
            "Compared {} graphs, {} changed",
            result.graphs().len(),
            result.changed_graphs().count()
        );
        result
    }
}

/// Compare two snapshots with the default engine.
pub fn diff_states(left: &DatasetState, right: &DatasetState) -> DatasetDifference {
    DatasetDiffEngine::new().diff(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{GraphChangeKind, GraphStats, NO_CHANGES};
    use crate::model::{GraphId, MemoryDataset};
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
    fn test_identical_snapshots_are_not_different() {
        let mut ds = MemoryDataset::new();
        ds.insert(&graph("g"), &triple("a"));
        let state = DatasetState::capture(&ds);

        let result = diff_states(&state, &state);
        assert!(!result.is_different());
        assert_eq!(result.format_for_change(), vec![NO_CHANGES.to_string()]);
    }

    #[test]
    fn test_one_record_per_graph() {
        let left = DatasetState::from_stats([
            (graph("a"), GraphStats { size: 1, hash: 1 }),
            (graph("b"), GraphStats { size: 1, hash: 1 }),
        ]);
        let right = DatasetState::from_stats([
            (graph("b"), GraphStats { size: 1, hash: 1 }),
            (graph("c"), GraphStats { size: 1, hash: 1 }),
        ]);

        let result = diff_states(&left, &right);
        assert_eq!(result.graphs().len(), 4);
        assert_eq!(result.graph(&graph("a")).unwrap().kind(), GraphChangeKind::Deleted);
        assert_eq!(result.graph(&graph("b")).unwrap().kind(), GraphChangeKind::Unchanged);
        assert_eq!(result.graph(&graph("c")).unwrap().kind(), GraphChangeKind::New);
        assert_eq!(
            result.graph(&GraphId::Default).unwrap().kind(),
            GraphChangeKind::Unchanged
        );
    }

    #[test]
    fn test_added_statement_changes_only_that_graph() {
        let mut ds = MemoryDataset::new();
        ds.insert(&graph("a"), &triple("1"));
        ds.insert(&graph("b"), &triple("2"));
        let before = DatasetState::capture(&ds);

        ds.insert(&graph("a"), &triple("3"));
        let after = DatasetState::capture(&ds);

        let result = diff_states(&before, &after);
        assert!(result.is_different());
        let changed: Vec<_> = result.changed_graphs().map(|g| g.name().clone()).collect();
        assert_eq!(changed, vec![graph("a")]);
        assert_eq!(
            result.format_for_change(),
            vec!["  changed graph: http://example.com/a  +1 triple".to_string()]
        );
    }

    #[test]
    fn test_same_size_content_change() {
        let mut ds = MemoryDataset::new();
        ds.insert(&graph("a"), &triple("1"));
        let before = DatasetState::capture(&ds);

        let mut replaced = MemoryDataset::new();
        replaced.insert(&graph("a"), &triple("2"));
        let after = DatasetState::capture(&replaced);

        assert_eq!(
            diff_states(&before, &after).format_for_change(),
            vec!["  changed graph: http://example.com/a  (same size)".to_string()]
        );
    }

    #[test]
    fn test_engine_never_emits_missing_records() {
        let left = DatasetState::from_stats([(graph("a"), GraphStats { size: 2, hash: 3 })]);
        let right = DatasetState::from_stats([(graph("b"), GraphStats { size: 1, hash: 4 })]);
        let result = DatasetDiffEngine::new().diff(&left, &right);
        assert!(result
            .graphs()
            .iter()
            .all(|g| g.kind() != GraphChangeKind::Missing));
    }
}
