//! **Change tracking and graph-selective output for RDF datasets.**
//!
//! `rdf-pipeline` is the bookkeeping layer of an RDF processing pipeline. It
//! answers two questions for every step that mutates a dataset: *which named
//! graphs did this step change*, and *how do I write just the graphs I want to
//! a file*, whatever serialization the file uses.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the [`RdfDataset`] trait the rest of the crate works
//!   against, and [`MemoryDataset`], an in-memory implementation on
//!   `oxrdf::Graph`. Graphs are addressed by [`GraphId`], either the default
//!   graph or a named one.
//! - **[`diff`]**: [`DatasetState`] captures per-graph statement counts and an
//!   order-independent content hash; [`DatasetDiffEngine`] compares two
//!   states and renders human-readable change lines.
//! - **[`selection`]**: parses graph tokens (`default`, `all`, IRIs) and
//!   resolves them against a live dataset.
//! - **[`output`]**: [`OutputWriter`] writes a selection to a file, choosing
//!   between dataset and union-of-graphs output based on whether the
//!   format can carry named graphs, and sanitizing literals first.
//! - **[`pipeline`]**: [`run_step`](pipeline::run_step) wraps a mutation with
//!   before/after snapshots.
//!
//! ## Tracking the changes of a step
//!
//! ```
//! use rdf_pipeline::{DatasetState, GraphId, MemoryDataset, diff_states};
//! use oxrdf::{Literal, NamedNode, Triple};
//!
//! let mut dataset = MemoryDataset::new();
//! let before = DatasetState::capture(&dataset);
//!
//! let graph = GraphId::named("http://example.com/shapes")?;
//! dataset.insert(
//!     &graph,
//!     &Triple::new(
//!         NamedNode::new("http://example.com/s")?,
//!         NamedNode::new("http://example.com/p")?,
//!         Literal::new_simple_literal("o"),
//!     ),
//! );
//!
//! let difference = diff_states(&before, &DatasetState::capture(&dataset));
//! assert_eq!(
//!     difference.format_for_change(),
//!     vec!["      new graph: http://example.com/shapes  1 triple".to_string()]
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Writing a graph selection
//!
//! ```no_run
//! use rdf_pipeline::{GraphSelection, OutputFile, OutputWriter};
//! use rdf_pipeline::parsers::load_dataset;
//! use std::path::PathBuf;
//!
//! let dataset = load_dataset(&[PathBuf::from("data.trig")])?;
//! let selection = GraphSelection::parse(&["http://example.com/a", "http://example.com/b"])?;
//!
//! // Turtle cannot hold named graphs: the two graphs are merged into one.
//! let report = OutputWriter::new(OutputFile::new("out/union.ttl")).write(&dataset, &selection)?;
//! println!("{} ({} statements)", report.mode, report.statements);
//! # Ok::<(), rdf_pipeline::RdfPipelineError>(())
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `rdf-pipeline` binary exposes `diff`, `snapshot` and `write` on top of
//! this library; see `rdf-pipeline --help`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Statement hashes are deliberately truncated to 32 bits
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod format;
pub mod model;
pub mod output;
pub mod parsers;
pub mod pipeline;
pub mod selection;
pub mod utils;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, BehaviorConfig, DiffSettings, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use diff::{
    diff_states, DatasetDiffEngine, DatasetDifference, DatasetState, GraphChangeKind,
    GraphDifference, GraphStats,
};
pub use error::{ErrorContext, OptionContext, RdfPipelineError, Result};
pub use format::FormatCapability;
pub use model::{GraphId, MemoryDataset, RdfDataset};
pub use output::{OutputFile, OutputWriter, WriteMode, WriteReport};
pub use parsers::{load_dataset, parse_dataset_str};
pub use pipeline::{run_step, StepReport};
pub use selection::{GraphSelection, GraphToken};
