//! Change tracking around pipeline steps.

use crate::diff::{diff_states, DatasetDifference, DatasetState};
use crate::error::{ErrorContext, Result};
use crate::model::RdfDataset;
use std::time::{Duration, Instant};

/// What one pipeline step did to the dataset.
#[derive(Debug, Clone)]
#[must_use]
pub struct StepReport {
    name: String,
    before: DatasetState,
    after: DatasetState,
    difference: DatasetDifference,
    elapsed: Duration,
}

impl StepReport {
    /// Name of the step.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshot taken before the step ran.
    pub const fn before(&self) -> &DatasetState {
        &self.before
    }

    /// Snapshot taken after the step ran.
    pub const fn after(&self) -> &DatasetState {
        &self.after
    }

    /// Graph-level comparison of the two snapshots.
    pub const fn difference(&self) -> &DatasetDifference {
        &self.difference
    }

    /// Whether the step changed any graph.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.difference.is_different()
    }

    /// Change-log lines, `["none"]` when nothing changed.
    #[must_use]
    pub fn change_lines(&self) -> Vec<String> {
        self.difference.format_for_change()
    }

    /// Wall-clock time spent in the step itself.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Run a step on the dataset and report its changes.
///
/// The dataset is snapshotted before and after `step`; the change lines are
/// logged. Errors from the step abort and are returned with the step name
/// as context.
pub fn run_step<D, F>(name: &str, dataset: &mut D, step: F) -> Result<StepReport>
where
    D: RdfDataset + Sync,
    F: FnOnce(&mut D) -> Result<()>,
{
    let before = DatasetState::capture(dataset);
    let started = Instant::now();
    step(dataset).with_context(|| format!("step '{name}'"))?;
    let elapsed = started.elapsed();
    let after = DatasetState::capture(dataset);

    let difference = diff_states(&before, &after);
    tracing::info!("Step '{}' finished in {:.2?}, changes:", name, elapsed);
    for line in difference.format_for_change() {
        tracing::info!("{}", line);
    }

    Ok(StepReport {
        name: name.to_string(),
        before,
        after,
        difference,
        elapsed,
    })
}

/// Whether a step's input is the same as on its previous run.
///
/// When true the step can be skipped and its previous output reused.
#[must_use]
pub fn inputs_unchanged(previous: &DatasetState, current: &DatasetState) -> bool {
    !diff_states(previous, current).is_different()
}
