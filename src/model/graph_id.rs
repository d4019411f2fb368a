//! Graph identifiers.
//!
//! The default graph is a variant of its own rather than a reserved string,
//! so no IRI a dataset uses as a graph name can ever be mistaken for it.

use oxrdf::{BlankNode, GraphName, GraphNameRef, NamedNode, NamedOrBlankNode};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Textual form of the default graph in logs and snapshot files.
///
/// Not an absolute IRI, so it cannot collide with a named graph.
pub const DEFAULT_GRAPH_LABEL: &str = "DEFAULT";

/// Identifies one graph of a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum GraphId {
    /// The unnamed default graph
    Default,
    /// A named graph, identified by an IRI or a blank node
    Named(NamedOrBlankNode),
}

impl GraphId {
    /// Create a graph id from an IRI, validating it.
    pub fn named(iri: impl Into<String>) -> Result<Self, oxrdf::IriParseError> {
        Ok(Self::Named(NamedNode::new(iri)?.into()))
    }

    /// Whether this is the default graph.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// Borrow as an `oxrdf` graph name.
    #[must_use]
    pub fn as_graph_name(&self) -> GraphNameRef<'_> {
        match self {
            Self::Default => GraphNameRef::DefaultGraph,
            Self::Named(NamedOrBlankNode::NamedNode(n)) => GraphNameRef::NamedNode(n.as_ref()),
            Self::Named(NamedOrBlankNode::BlankNode(b)) => GraphNameRef::BlankNode(b.as_ref()),
        }
    }

    /// The textual form: `DEFAULT`, the IRI, or `_:label`.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Default => DEFAULT_GRAPH_LABEL.to_string(),
            Self::Named(NamedOrBlankNode::NamedNode(n)) => n.as_str().to_string(),
            Self::Named(NamedOrBlankNode::BlankNode(b)) => format!("_:{}", b.as_str()),
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Default => 0,
            Self::Named(_) => 1,
        }
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl Ord for GraphId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.label().cmp(&other.label()))
    }
}

impl PartialOrd for GraphId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<NamedNode> for GraphId {
    fn from(node: NamedNode) -> Self {
        Self::Named(node.into())
    }
}

impl From<NamedOrBlankNode> for GraphId {
    fn from(node: NamedOrBlankNode) -> Self {
        Self::Named(node)
    }
}

impl From<GraphName> for GraphId {
    fn from(name: GraphName) -> Self {
        match name {
            GraphName::DefaultGraph => Self::Default,
            GraphName::NamedNode(n) => Self::Named(n.into()),
            GraphName::BlankNode(b) => Self::Named(b.into()),
        }
    }
}

impl From<GraphId> for String {
    fn from(id: GraphId) -> Self {
        id.label()
    }
}

impl FromStr for GraphId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == DEFAULT_GRAPH_LABEL {
            return Ok(Self::Default);
        }
        if let Some(label) = s.strip_prefix("_:") {
            return BlankNode::new(label)
                .map(|b| Self::Named(b.into()))
                .map_err(|e| format!("invalid blank node '{s}': {e}"));
        }
        Self::named(s).map_err(|e| format!("invalid graph IRI '{s}': {e}"))
    }
}

impl TryFrom<String> for GraphId {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
