//! Resolution of graph selections against a live dataset.

use super::GraphToken;
use crate::error::Result;
use crate::model::{GraphId, RdfDataset};
use indexmap::IndexSet;
use oxrdf::Graph;
use std::fmt;

/// An ordered list of graph tokens, resolved per write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphSelection {
    tokens: Vec<GraphToken>,
}

impl GraphSelection {
    /// Create a selection from parsed tokens.
    #[must_use]
    pub fn new(tokens: Vec<GraphToken>) -> Self {
        Self { tokens }
    }

    /// Parse a selection from configured strings.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self> {
        GraphToken::parse_all(raw).map(Self::new)
    }

    /// A selection holding only the default graph.
    #[must_use]
    pub fn default_graph() -> Self {
        Self::new(vec![GraphToken::DefaultGraph])
    }

    /// A selection holding every named graph.
    #[must_use]
    pub fn all_graphs() -> Self {
        Self::new(vec![GraphToken::AllGraphs])
    }

    /// Whether no token was configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The configured tokens.
    #[must_use]
    pub fn tokens(&self) -> &[GraphToken] {
        &self.tokens
    }

    /// Resolve the tokens into concrete graph ids.
    ///
    /// `all` expands to the named graphs currently in the dataset and does
    /// not include the default graph. Named tokens are kept even when the
    /// dataset lacks them. Duplicates are dropped, first occurrence wins.
    pub fn resolve<D: RdfDataset + ?Sized>(&self, dataset: &D) -> Vec<GraphId> {
        let mut resolved: IndexSet<GraphId> = IndexSet::new();
        for token in &self.tokens {
            match token {
                GraphToken::DefaultGraph => {
                    resolved.insert(GraphId::Default);
                }
                GraphToken::AllGraphs => {
                    resolved.extend(dataset.named_graph_names().into_iter().map(GraphId::Named));
                }
                GraphToken::Named(node) => {
                    resolved.insert(GraphId::from(node.clone()));
                }
            }
        }
        resolved.into_iter().collect()
    }
}

impl fmt::Display for GraphSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<String> = self.tokens.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", tokens.join(", "))
    }
}

/// Drop every graph that is not selected, in place.
///
/// Named graphs missing from `selected` are removed; the default graph is
/// emptied unless [`GraphId::Default`] is selected. Returns the ids of the
/// graphs that were removed or emptied. Callers that still need the full
/// dataset must work on a copy.
pub fn retain_selected<D: RdfDataset + ?Sized>(
    dataset: &mut D,
    selected: &[GraphId],
) -> Vec<GraphId> {
    let mut dropped = Vec::new();

    for name in dataset.named_graph_names() {
        let id = GraphId::Named(name.clone());
        if !selected.contains(&id) {
            dataset.remove_named_graph(&name);
            dropped.push(id);
        }
    }

    if !selected.contains(&GraphId::Default) {
        dataset.replace_graph(&GraphId::Default, Graph::new());
        dropped.push(GraphId::Default);
    }

    for id in selected {
        if !id.is_default() && dataset.graph(id).is_none() {
            tracing::warn!("Selected graph {} is not in the dataset", id);
        }
    }

    tracing::debug!(
        "Retained {} selected graphs, dropped {}",
        selected.len(),
        dropped.len()
    );
    dropped
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

    fn dataset() -> MemoryDataset {
        let mut ds = MemoryDataset::new();
        ds.insert(&GraphId::Default, &triple("d"));
        ds.insert(&graph("a"), &triple("1"));
        ds.insert(&graph("b"), &triple("2"));
        ds
    }

    #[test]
    fn test_all_graphs_excludes_default_graph() {
        let resolved = GraphSelection::all_graphs().resolve(&dataset());
        assert_eq!(resolved, vec![graph("a"), graph("b")]);
    }

    #[test]
    fn test_all_graphs_reflects_live_dataset() {
        let selection = GraphSelection::all_graphs();
        let mut ds = dataset();
        assert_eq!(selection.resolve(&ds).len(), 2);
        ds.insert(&graph("c"), &triple("3"));
        assert_eq!(selection.resolve(&ds).len(), 3);
    }

    #[test]
    fn test_default_and_all_together() {
        let selection = GraphSelection::parse(&["default", "all"]).unwrap();
        assert_eq!(
            selection.resolve(&dataset()),
            vec![GraphId::Default, graph("a"), graph("b")]
        );
    }

    #[test]
    fn test_duplicates_are_removed() {
        let selection =
            GraphSelection::parse(&["http://example.com/b", "all", "http://example.com/b"]).unwrap();
        assert_eq!(selection.resolve(&dataset()), vec![graph("b"), graph("a")]);
    }

    #[test]
    fn test_unknown_named_graph_passes_through() {
        let selection = GraphSelection::parse(&["http://example.com/zzz"]).unwrap();
        assert_eq!(selection.resolve(&dataset()), vec![graph("zzz")]);
    }

    #[test]
    fn test_retain_removes_unselected_and_clears_default() {
        let mut ds = dataset();
        let dropped = retain_selected(&mut ds, &[graph("a")]);

        assert_eq!(ds.named_graph_names().len(), 1);
        assert_eq!(ds.graph_size(&graph("a")), Some(1));
        assert_eq!(ds.graph_size(&GraphId::Default), Some(0));
        assert_eq!(dropped, vec![graph("b"), GraphId::Default]);
    }

    #[test]
    fn test_retain_keeps_default_when_selected() {
        let mut ds = dataset();
        retain_selected(&mut ds, &[GraphId::Default]);
        assert!(!ds.has_named_graphs());
        assert_eq!(ds.graph_size(&GraphId::Default), Some(1));
    }

    #[test]
    fn test_display() {
        let selection = GraphSelection::parse(&["default", "<http://example.com/a>"]).unwrap();
        assert_eq!(selection.to_string(), "[default, http://example.com/a]");
        assert!(GraphSelection::default().is_empty());
    }
}
