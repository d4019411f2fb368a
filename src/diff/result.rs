//! Diff result structures and their change-log rendering.

use crate::model::GraphId;
use serde::Serialize;

/// Line emitted by [`DatasetDifference::format_for_change`] when nothing changed.
pub const NO_CHANGES: &str = "none";

/// How one graph compares between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphChangeKind {
    /// Present on both sides with equal size and content
    Unchanged,
    /// Present on both sides, content differs
    Changed,
    /// Present on the left side only
    Deleted,
    /// Present on the right side only
    New,
    /// Present on neither side; a defect in whoever built the record
    Missing,
}

/// Comparison of one graph between a left and a right snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphDifference {
    name: GraphId,
    exists_left: bool,
    size_left: usize,
    exists_right: bool,
    size_right: usize,
    content_equal: bool,
}

impl GraphDifference {
    /// Build a record from the lookups on both sides.
    ///
    /// Absent sides have no size and no hash; content is equal when both
    /// hash lookups agree.
    pub(crate) fn new(
        name: GraphId,
        left: Option<(usize, i32)>,
        right: Option<(usize, i32)>,
    ) -> Self {
        Self {
            name,
            exists_left: left.is_some(),
            size_left: left.map_or(0, |(size, _)| size),
            exists_right: right.is_some(),
            size_right: right.map_or(0, |(size, _)| size),
            content_equal: left.map(|(_, hash)| hash) == right.map(|(_, hash)| hash),
        }
    }

    /// The graph this record describes.
    #[must_use]
    pub const fn name(&self) -> &GraphId {
        &self.name
    }

    #[must_use]
    pub const fn exists_left(&self) -> bool {
        self.exists_left
    }

    #[must_use]
    pub const fn exists_right(&self) -> bool {
        self.exists_right
    }

    #[must_use]
    pub const fn size_left(&self) -> usize {
        self.size_left
    }

    #[must_use]
    pub const fn size_right(&self) -> usize {
        self.size_right
    }

    /// Whether both content hashes are equal.
    #[must_use]
    pub const fn content_equal(&self) -> bool {
        self.content_equal
    }

    /// Present on both sides with equal content and equal size.
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        self.exists_left
            && self.exists_right
            && self.content_equal
            && self.size_left == self.size_right
    }

    /// Signed change in statement count, right minus left.
    #[must_use]
    pub fn size_delta(&self) -> i64 {
        self.size_right as i64 - self.size_left as i64
    }

    /// Classify the record.
    #[must_use]
    pub const fn kind(&self) -> GraphChangeKind {
        match (self.exists_left, self.exists_right) {
            (true, true) if self.is_unchanged() => GraphChangeKind::Unchanged,
            (true, true) => GraphChangeKind::Changed,
            (true, false) => GraphChangeKind::Deleted,
            (false, true) => GraphChangeKind::New,
            (false, false) => GraphChangeKind::Missing,
        }
    }

    /// One human-readable change-log line for this graph.
    #[must_use]
    pub fn describe(&self) -> String {
        let name = &self.name;
        match self.kind() {
            GraphChangeKind::Unchanged => format!("unchanged graph: {name}"),
            GraphChangeKind::Changed => {
                let delta = self.size_delta();
                if delta == 0 {
                    format!("  changed graph: {name}  (same size)")
                } else {
                    let sign = if delta > 0 { "+" } else { "" };
                    format!(
                        "  changed graph: {name}  {sign}{delta} {}",
                        triples(delta.unsigned_abs())
                    )
                }
            }
            GraphChangeKind::Deleted => format!(
                "  deleted graph: {name}  had {} {}",
                self.size_left,
                triples(self.size_left as u64)
            ),
            GraphChangeKind::New => format!(
                "      new graph: {name}  {} {}",
                self.size_right,
                triples(self.size_right as u64)
            ),
            GraphChangeKind::Missing => {
                format!("  INTERNAL ERROR: graph {name} exists in neither snapshot")
            }
        }
    }
}

fn triples(count: u64) -> &'static str {
    if count == 1 {
        "triple"
    } else {
        "triples"
    }
}

/// Every graph-level comparison between two snapshots.
#[derive(Debug, Clone, Default, Serialize)]
#[must_use]
pub struct DatasetDifference {
    graphs: Vec<GraphDifference>,
}

impl DatasetDifference {
    pub(crate) fn from_graphs(graphs: Vec<GraphDifference>) -> Self {
        Self { graphs }
    }

    /// Per-graph records, ordered by graph name.
    #[must_use]
    pub fn graphs(&self) -> &[GraphDifference] {
        &self.graphs
    }

    /// Look up the record of one graph.
    #[must_use]
    pub fn graph(&self, name: &GraphId) -> Option<&GraphDifference> {
        self.graphs.iter().find(|g| &g.name == name)
    }

    /// Whether any graph differs in size, content or existence.
    #[must_use]
    pub fn is_different(&self) -> bool {
        !self.graphs.iter().all(GraphDifference::is_unchanged)
    }

    /// Records of graphs that are not unchanged.
    pub fn changed_graphs(&self) -> impl Iterator<Item = &GraphDifference> {
        self.graphs.iter().filter(|g| !g.is_unchanged())
    }

    /// Sorted change-log lines, or `["none"]` when nothing changed.
    #[must_use]
    pub fn format_for_change(&self) -> Vec<String> {
        if !self.is_different() {
            return vec![NO_CHANGES.to_string()];
        }
        let mut lines: Vec<String> = self.changed_graphs().map(GraphDifference::describe).collect();
        lines.sort();
        lines
    }

    /// Sorted lines for every graph, unchanged ones included.
    #[must_use]
    pub fn format_all(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.graphs.iter().map(GraphDifference::describe).collect();
        lines.sort();
        lines
    }
}
