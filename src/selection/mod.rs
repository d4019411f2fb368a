//! Graph selection for output.
//!
//! Users name the graphs to write with tokens: a graph IRI, `default` for
//! the unnamed graph, or `all` for every named graph. Tokens are resolved
//! against the dataset at write time, so `all` sees graphs that earlier
//! pipeline steps created.

mod selector;
mod token;

pub use selector::{retain_selected, GraphSelection};
pub use token::GraphToken;
