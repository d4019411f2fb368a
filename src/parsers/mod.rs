//! RDF input parsing.
//!
//! Files are parsed with `oxrdfio` into a [`MemoryDataset`]. The format is
//! taken from the file extension. Triples from triples-only inputs land in
//! the default graph unless a target graph is given.
//!
//! ## Usage
//!
//! ```no_run
//! use rdf_pipeline::parsers::load_dataset;
//! use std::path::PathBuf;
//!
//! let dataset = load_dataset(&[PathBuf::from("ontology.ttl"), PathBuf::from("data.trig")])?;
//! # Ok::<(), rdf_pipeline::RdfPipelineError>(())
//! ```

use crate::error::{ErrorContext, RdfPipelineError, Result};
use crate::format::format_from_path;
use crate::model::{GraphId, MemoryDataset};
use oxrdf::GraphName;
use oxrdfio::{RdfFormat, RdfParser};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Parse RDF content into a new dataset.
pub fn parse_dataset_str(content: &str, format: RdfFormat) -> Result<MemoryDataset> {
    let mut dataset = MemoryDataset::new();
    parse_into(&mut dataset, content.as_bytes(), format, None)?;
    Ok(dataset)
}

/// Load one file into an existing dataset.
///
/// Statements without a graph go to `target_graph` when given. Returns the
/// number of statements read.
pub fn load_into(
    dataset: &mut MemoryDataset,
    path: &Path,
    target_graph: Option<&GraphId>,
) -> Result<usize> {
    let format = format_from_path(path)
        .ok_or_else(|| RdfPipelineError::unknown_format(path.display().to_string()))?;
    let file = File::open(path).map_err(|e| RdfPipelineError::io(path, e))?;

    let count = parse_into(dataset, BufReader::new(file), format, target_graph)
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!("Loaded {} statements from {}", count, path.display());
    Ok(count)
}

/// Load several files into a new dataset, in order.
pub fn load_dataset(paths: &[PathBuf]) -> Result<MemoryDataset> {
    let mut dataset = MemoryDataset::new();
    for path in paths {
        load_into(&mut dataset, path, None)?;
    }
    Ok(dataset)
}

fn parse_into<R: Read>(
    dataset: &mut MemoryDataset,
    reader: R,
    format: RdfFormat,
    target_graph: Option<&GraphId>,
) -> Result<usize> {
    let mut count = 0;
    for quad in RdfParser::from_format(format).for_reader(reader) {
        let quad = quad?;
        match (&quad.graph_name, target_graph) {
            (GraphName::DefaultGraph, Some(target)) => {
                let triple = oxrdf::TripleRef::new(&quad.subject, &quad.predicate, &quad.object);
                dataset.insert(target, triple);
            }
            _ => {
                dataset.insert_quad(&quad);
            }
        }
        count += 1;
    }
    Ok(count)
}
