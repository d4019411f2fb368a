//! Write command handler.
//!
//! Loads RDF inputs and writes the configured graph selection to one file.

use super::load_inputs;
use crate::config::{Validatable, WriteConfig};
use crate::error::{OptionContext, RdfPipelineError};
use crate::output::{OutputWriter, WriteReport};
use anyhow::{Context, Result};

/// Run the write command.
#[allow(clippy::needless_pass_by_value)]
pub fn run_write(config: WriteConfig) -> Result<WriteReport> {
    let errors = config.output.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(RdfPipelineError::config(messages.join("; ")).into());
    }

    let target = config
        .output
        .target()
        .context_none("No output file configured (use -O/--output-file or output.file)")?;
    let selection = config.output.selection()?;

    let dataset = load_inputs(&config.inputs, config.behavior.quiet)?;
    let report = OutputWriter::new(target)
        .write(&dataset, &selection)
        .context("Failed to write output")?;

    if !config.behavior.quiet {
        tracing::info!(
            "Wrote {} statements as {} to {}",
            report.statements,
            report.format.name(),
            report.path.display()
        );
    }
    Ok(report)
}
