//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two datasets or snapshots.

use super::load_inputs;
use crate::config::DiffConfig;
use crate::diff::{diff_states, DatasetDifference, DatasetState};
use crate::pipeline::{exit_codes, write_output, OutputTarget};
use anyhow::{Context, Result};
use std::path::Path;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;

    let left = load_state(&config.left, quiet)?;
    let right = load_state(&config.right, quiet)?;

    if !quiet {
        tracing::info!(
            "Comparing {} graphs ({} triples) against {} graphs ({} triples)",
            left.graph_count(),
            left.total_size(),
            right.graph_count(),
            right.total_size()
        );
    }

    let difference = diff_states(&left, &right);
    let lines = if config.diff.show_unchanged {
        difference.format_all()
    } else {
        difference.format_for_change()
    };

    let target = OutputTarget::from_option(config.output_file.clone());
    write_output(&lines.join("\n"), &target, quiet)?;

    Ok(determine_exit_code(&config, &difference))
}

/// Read a snapshot file, or load an RDF file and capture its state.
fn load_state(path: &Path, quiet: bool) -> Result<DatasetState> {
    if is_snapshot(path) {
        return DatasetState::load(path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()));
    }
    let dataset = load_inputs(&[path.to_path_buf()], quiet)?;
    Ok(DatasetState::capture(&dataset))
}

fn is_snapshot(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Determine the appropriate exit code based on the difference and config flags.
fn determine_exit_code(config: &DiffConfig, difference: &DatasetDifference) -> i32 {
    if config.diff.fail_on_change && difference.is_different() {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BehaviorConfig, DiffSettings};
    use std::path::PathBuf;

    const LEFT: &str = "@prefix ex: <http://example.com/> .\n\
        ex:s ex:p \"a\" .\n\
        ex:g { ex:s ex:p \"b\" . }\n";
    const RIGHT: &str = "@prefix ex: <http://example.com/> .\n\
        ex:s ex:p \"a\" .\n\
        ex:g { ex:s ex:p \"b\" . ex:s ex:p \"c\" . }\n";

    fn config(dir: &Path, fail_on_change: bool) -> DiffConfig {
        DiffConfig {
            left: dir.join("left.trig"),
            right: dir.join("right.trig"),
            output_file: Some(dir.join("changes.txt")),
            diff: DiffSettings {
                show_unchanged: false,
                fail_on_change,
            },
            behavior: BehaviorConfig { quiet: true },
        }
    }

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("left.trig"), LEFT).unwrap();
        std::fs::write(dir.path().join("right.trig"), RIGHT).unwrap();
        dir
    }

    #[test]
    fn test_diff_writes_change_lines() {
        let dir = fixture();
        let code = run_diff(config(dir.path(), false)).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let changes = std::fs::read_to_string(dir.path().join("changes.txt")).unwrap();
        assert_eq!(changes, "  changed graph: http://example.com/g  +1 triple");
    }

    #[test]
    fn test_fail_on_change_exit_code() {
        let dir = fixture();
        assert_eq!(
            run_diff(config(dir.path(), true)).unwrap(),
            exit_codes::CHANGES_DETECTED
        );
    }

    #[test]
    fn test_diff_against_saved_snapshot() {
        let dir = fixture();
        let dataset = load_inputs(&[dir.path().join("left.trig")], true).unwrap();
        let snapshot = dir.path().join("left.json");
        DatasetState::capture(&dataset).save(&snapshot).unwrap();

        let mut cfg = config(dir.path(), true);
        cfg.right = snapshot;
        assert_eq!(run_diff(cfg).unwrap(), exit_codes::SUCCESS);

        let changes = std::fs::read_to_string(dir.path().join("changes.txt")).unwrap();
        assert_eq!(changes, "none");
    }

    #[test]
    fn test_is_snapshot() {
        assert!(is_snapshot(&PathBuf::from("state.JSON")));
        assert!(!is_snapshot(&PathBuf::from("data.trig")));
    }
}
