//! Pipeline orchestration.
//!
//! Wraps dataset-mutating steps with before/after snapshots so every step
//! reports what it changed, and provides the helpers the CLI handlers share
//! for emitting change logs.

mod output;
mod step;

pub use output::{write_output, OutputTarget};
pub use step::{inputs_unchanged, run_step, StepReport};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no changes detected (or change detection not requested)
    pub const SUCCESS: i32 = 0;
    /// Changes were detected
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
