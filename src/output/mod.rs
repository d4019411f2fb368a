//! Writing datasets to RDF files.
//!
//! The target format decides the write path. Quad-capable formats (TriG,
//! N-Quads) receive the selected graphs as a dataset; triples-only formats
//! receive one flat graph. Literals are stripped of carriage returns before
//! anything is serialized.

pub mod sanitize;
mod target;
mod writer;

pub use sanitize::{sanitize_graph, sanitize_graphs};
pub use target::OutputFile;
pub use writer::{OutputWriter, WriteMode, WriteReport};
