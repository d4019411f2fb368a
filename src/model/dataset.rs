//! Dataset abstraction and its in-memory implementation.

use super::GraphId;
use crate::utils::statement_hash;
use indexmap::IndexMap;
use oxrdf::{Graph, GraphName, NamedOrBlankNode, Quad, QuadRef, Triple, TripleRef};

/// The operations the pipeline core needs from an RDF engine.
///
/// Implementations must treat the default graph as always present: reading
/// it never fails, even when it holds no statements.
pub trait RdfDataset {
    /// Names of all named graphs currently in the dataset.
    fn named_graph_names(&self) -> Vec<NamedOrBlankNode>;

    /// Borrow a graph's statements, `None` if the named graph does not exist.
    fn graph(&self, id: &GraphId) -> Option<&Graph>;

    /// Mutably borrow a graph's statements, `None` if the named graph does not exist.
    fn graph_mut(&mut self, id: &GraphId) -> Option<&mut Graph>;

    /// Replace a graph's statements, creating the named graph if needed.
    fn replace_graph(&mut self, id: &GraphId, graph: Graph);

    /// Remove a named graph entirely, returning its statements.
    fn remove_named_graph(&mut self, name: &NamedOrBlankNode) -> Option<Graph>;

    /// Number of statements in a graph, `None` if the named graph does not exist.
    fn graph_size(&self, id: &GraphId) -> Option<usize> {
        self.graph(id).map(Graph::len)
    }

    /// Stable hash of a single statement.
    fn statement_hash(&self, triple: TripleRef<'_>) -> i32 {
        statement_hash(triple)
    }

    /// Ids of every graph, default graph first.
    fn graph_ids(&self) -> Vec<GraphId> {
        std::iter::once(GraphId::Default)
            .chain(self.named_graph_names().into_iter().map(GraphId::Named))
            .collect()
    }

    /// Whether the dataset has at least one named graph.
    fn has_named_graphs(&self) -> bool {
        !self.named_graph_names().is_empty()
    }
}

/// A multi-graph dataset held in memory.
///
/// Named graphs keep their insertion order, which makes serialized output
/// reproducible for a given load order. A named graph may exist while empty.
#[derive(Debug, Clone, Default)]
pub struct MemoryDataset {
    default_graph: Graph,
    named_graphs: IndexMap<NamedOrBlankNode, Graph>,
}

impl MemoryDataset {
    /// Create an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a quad, creating its named graph if needed.
    pub fn insert_quad<'a>(&mut self, quad: impl Into<QuadRef<'a>>) -> bool {
        let quad = quad.into();
        let triple = TripleRef::new(quad.subject, quad.predicate, quad.object);
        let id = GraphId::from(quad.graph_name.into_owned());
        self.graph_entry(&id).insert(triple)
    }

    /// Insert a triple into the given graph, creating it if needed.
    pub fn insert<'a>(&mut self, id: &GraphId, triple: impl Into<TripleRef<'a>>) -> bool {
        self.graph_entry(id).insert(triple)
    }

    /// Create an empty named graph if it does not exist yet.
    pub fn create_graph(&mut self, name: NamedOrBlankNode) {
        self.named_graphs.entry(name).or_default();
    }

    /// Total number of statements across all graphs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.default_graph.len() + self.named_graphs.values().map(Graph::len).sum::<usize>()
    }

    /// Whether no graph holds any statement.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every statement as an owned quad, default graph first.
    pub fn quads(&self) -> impl Iterator<Item = Quad> + '_ {
        let default = self
            .default_graph
            .iter()
            .map(|t| to_quad(t, GraphName::DefaultGraph));
        let named = self.named_graphs.iter().flat_map(|(name, graph)| {
            let graph_name = match name {
                NamedOrBlankNode::NamedNode(n) => GraphName::NamedNode(n.clone()),
                NamedOrBlankNode::BlankNode(b) => GraphName::BlankNode(b.clone()),
            };
            graph.iter().map(move |t| to_quad(t, graph_name.clone()))
        });
        default.chain(named)
    }

    fn graph_entry(&mut self, id: &GraphId) -> &mut Graph {
        match id {
            GraphId::Default => &mut self.default_graph,
            GraphId::Named(name) => self.named_graphs.entry(name.clone()).or_default(),
        }
    }
}

fn to_quad(triple: TripleRef<'_>, graph_name: GraphName) -> Quad {
    let Triple {
        subject,
        predicate,
        object,
    } = triple.into_owned();
    Quad::new(subject, predicate, object, graph_name)
}

impl RdfDataset for MemoryDataset {
    fn named_graph_names(&self) -> Vec<NamedOrBlankNode> {
        self.named_graphs.keys().cloned().collect()
    }

    fn graph(&self, id: &GraphId) -> Option<&Graph> {
        match id {
            GraphId::Default => Some(&self.default_graph),
            GraphId::Named(name) => self.named_graphs.get(name),
        }
    }

    fn graph_mut(&mut self, id: &GraphId) -> Option<&mut Graph> {
        match id {
            GraphId::Default => Some(&mut self.default_graph),
            GraphId::Named(name) => self.named_graphs.get_mut(name),
        }
    }

    fn replace_graph(&mut self, id: &GraphId, graph: Graph) {
        *self.graph_entry(id) = graph;
    }

    fn remove_named_graph(&mut self, name: &NamedOrBlankNode) -> Option<Graph> {
        self.named_graphs.shift_remove(name)
    }
}
