//! Snapshot and diff of multi-graph datasets.
//!
//! A pipeline captures a [`DatasetState`] before and after each step and
//! compares the two with the [`DatasetDiffEngine`]. The resulting
//! [`DatasetDifference`] tells whether anything changed and renders a
//! change log:
//!
//! ```ignore
//! use rdf_pipeline::diff::{diff_states, DatasetState};
//!
//! let before = DatasetState::capture(&dataset);
//! run_step(&mut dataset)?;
//! let after = DatasetState::capture(&dataset);
//!
//! for line in diff_states(&before, &after).format_for_change() {
//!     tracing::info!("{line}");
//! }
//! ```

mod engine;
mod result;
mod state;

pub use engine::{diff_states, DatasetDiffEngine};
pub use result::{DatasetDifference, GraphChangeKind, GraphDifference, NO_CHANGES};
pub use state::{DatasetState, GraphStats};
