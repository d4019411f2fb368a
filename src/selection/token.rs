//! Selection tokens.

use crate::error::{RdfPipelineError, Result};
use oxrdf::NamedNode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Spellings accepted for the default graph.
const DEFAULT_GRAPH_TOKENS: &[&str] = &["default", "urn:x-arq:defaultgraph"];

/// Spellings accepted for every named graph.
const ALL_GRAPHS_TOKENS: &[&str] = &["all", "*", "urn:x-arq:uniongraph"];

/// One entry of a graph selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum GraphToken {
    /// The unnamed default graph
    DefaultGraph,
    /// Every named graph present when the selection is resolved
    AllGraphs,
    /// One named graph
    Named(NamedNode),
}

impl GraphToken {
    /// Parse and normalize a configured token.
    ///
    /// Surrounding whitespace and angle brackets are removed; sentinels are
    /// matched case-insensitively; anything else must be an absolute IRI.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let token = trimmed
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .unwrap_or(trimmed)
            .trim();

        if token.is_empty() {
            return Err(RdfPipelineError::selection(raw, "empty graph name"));
        }

        let lower = token.to_lowercase();
        if DEFAULT_GRAPH_TOKENS.contains(&lower.as_str()) {
            return Ok(Self::DefaultGraph);
        }
        if ALL_GRAPHS_TOKENS.contains(&lower.as_str()) {
            return Ok(Self::AllGraphs);
        }
        if token.starts_with("_:") {
            return Err(RdfPipelineError::selection(
                raw,
                "blank node graph names cannot be selected by name",
            ));
        }

        NamedNode::new(token)
            .map(Self::Named)
            .map_err(|e| RdfPipelineError::selection(raw, e.to_string()))
    }

    /// Parse a list of tokens, failing on the first invalid one.
    pub fn parse_all<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Self>> {
        raw.iter().map(|s| Self::parse(s.as_ref())).collect()
    }
}

impl fmt::Display for GraphToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DefaultGraph => f.write_str("default"),
            Self::AllGraphs => f.write_str("all"),
            Self::Named(node) => f.write_str(node.as_str()),
        }
    }
}

impl FromStr for GraphToken {
    type Err = RdfPipelineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<GraphToken> for String {
    fn from(token: GraphToken) -> Self {
        token.to_string()
    }
}

impl TryFrom<String> for GraphToken {
    type Error = RdfPipelineError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}
