//! Shared utilities.

mod hash;

pub use hash::{content_hash, graph_hash, statement_hash};
