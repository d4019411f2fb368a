//! Carriage-return removal from literal values.
//!
//! Serialized output must not depend on the line endings of the machine
//! that produced the source data, so `\r` is stripped from every literal
//! before writing.

use crate::model::{GraphId, RdfDataset};
use oxrdf::{Graph, Literal, TermRef, Triple, TripleRef};

/// Strip `\r` from a literal-valued statement, `None` when nothing changes.
fn sanitized(triple: TripleRef<'_>) -> Option<Triple> {
    let TermRef::Literal(literal) = triple.object else {
        return None;
    };
    if !literal.value().contains('\r') {
        return None;
    }

    let value = literal.value().replace('\r', "");
    let replacement = match literal.language() {
        Some(language) => Literal::new_language_tagged_literal_unchecked(value, language),
        None => Literal::new_typed_literal(value, literal.datatype().into_owned()),
    };
    Some(Triple::new(
        triple.subject.into_owned(),
        triple.predicate.into_owned(),
        replacement,
    ))
}

/// Rewrite the literals of one graph in place.
///
/// Only statements whose literal contains `\r` are replaced; every other
/// statement stays untouched. Returns the number of rewritten statements.
pub fn sanitize_graph(graph: &mut Graph) -> usize {
    let replacements: Vec<(Triple, Triple)> = graph
        .iter()
        .filter_map(|t| sanitized(t).map(|clean| (t.into_owned(), clean)))
        .collect();

    for (original, clean) in &replacements {
        graph.remove(original);
        graph.insert(clean);
    }
    replacements.len()
}

/// Sanitize the given graphs of a dataset, skipping ids it does not hold.
pub fn sanitize_graphs<D: RdfDataset + ?Sized>(dataset: &mut D, ids: &[GraphId]) -> usize {
    let mut total = 0;
    for id in ids {
        if let Some(graph) = dataset.graph_mut(id) {
            let rewritten = sanitize_graph(graph);
            if rewritten > 0 {
                tracing::debug!("Removed carriage returns from {} literals in {}", rewritten, id);
            }
            total += rewritten;
        }
    }
    total
}
