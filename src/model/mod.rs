//! In-memory RDF dataset model.
//!
//! The pipeline core only needs a narrow view of the RDF engine: enumerate
//! named graphs, read and replace a graph's statements, and count them. That
//! view is the [`RdfDataset`] trait; [`MemoryDataset`] implements it on top
//! of `oxrdf` graphs.

mod dataset;
mod graph_id;

pub use dataset::{MemoryDataset, RdfDataset};
pub use graph_id::{GraphId, DEFAULT_GRAPH_LABEL};
