//! Pipeline and CLI integration tests.
//!
//! These tests exercise the full load → snapshot → diff → write pipeline
//! with real fixture files, and read written output back to check it.

use oxrdf::vocab::xsd;
use oxrdf::{Literal, NamedNode, Triple};
use oxrdfio::RdfFormat;
use rdf_pipeline::config::{BehaviorConfig, DiffConfig, DiffSettings};
use rdf_pipeline::parsers::{load_dataset, load_into};
use rdf_pipeline::pipeline::{exit_codes, run_step};
use rdf_pipeline::{
    diff_states, parse_dataset_str, DatasetState, GraphChangeKind, GraphId, GraphSelection,
    MemoryDataset, OutputFile, OutputWriter, RdfDataset, WriteMode,
};
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn graph(path: &str) -> GraphId {
    GraphId::named(format!("http://example.com/graphs/{path}")).unwrap()
}

fn load(name: &str) -> MemoryDataset {
    load_dataset(&[fixture_path(name)]).expect("fixture should load")
}

fn read_back(path: &Path, format: RdfFormat) -> MemoryDataset {
    let content = std::fs::read_to_string(path).expect("output should exist");
    parse_dataset_str(&content, format).expect("output should parse")
}

// ============================================================================
// Snapshot and Diff
// ============================================================================

mod diff_stage {
    use super::*;

    #[test]
    fn fixture_states() {
        let state = DatasetState::capture(&load("build-1.trig"));
        assert_eq!(state.graph_count(), 4);
        assert_eq!(state.size(&GraphId::Default), Some(2));
        assert_eq!(state.size(&graph("data")), Some(3));
        assert_eq!(state.total_size(), 8);
    }

    #[test]
    fn reflexive_on_fixture() {
        let state = DatasetState::capture(&load("build-1.trig"));
        let difference = diff_states(&state, &state);
        assert!(!difference.is_different());
        assert_eq!(difference.format_for_change(), vec!["none".to_string()]);
    }

    #[test]
    fn same_content_loaded_twice_hashes_equal() {
        let first = DatasetState::capture(&load("build-1.trig"));
        let second = DatasetState::capture(&load("build-1.trig"));
        assert!(!diff_states(&first, &second).is_different());
    }

    #[test]
    fn build_to_build_change_log() {
        let left = DatasetState::capture(&load("build-1.trig"));
        let right = DatasetState::capture(&load("build-2.trig"));
        let difference = diff_states(&left, &right);

        assert!(difference.is_different());
        assert_eq!(
            difference.format_for_change(),
            vec![
                "      new graph: http://example.com/graphs/inferred  1 triple",
                "  changed graph: http://example.com/graphs/data  +1 triple",
                "  changed graph: http://example.com/graphs/shapes  (same size)",
                "  deleted graph: http://example.com/graphs/scratch  had 1 triple",
            ]
        );

        assert_eq!(
            difference.graph(&GraphId::Default).map(|g| g.kind()),
            Some(GraphChangeKind::Unchanged)
        );
        assert_eq!(difference.format_all().len(), 5);
    }

    #[test]
    fn snapshot_file_compares_like_live_state() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = dir.path().join("state.json");
        DatasetState::capture(&load("build-1.trig"))
            .save(&snapshot)
            .unwrap();

        let saved = DatasetState::load(&snapshot).unwrap();
        let right = DatasetState::capture(&load("build-2.trig"));
        assert_eq!(diff_states(&saved, &right).changed_graphs().count(), 4);
    }

    #[test]
    fn step_reports_only_the_touched_graph() {
        let mut dataset = load("build-1.trig");
        let report = run_step("infer", &mut dataset, |ds| {
            ds.insert(
                &graph("data"),
                &Triple::new(
                    NamedNode::new_unchecked("http://example.com/carol"),
                    NamedNode::new_unchecked("http://example.com/name"),
                    Literal::new_simple_literal("Carol"),
                ),
            );
            Ok(())
        })
        .unwrap();

        let changed: Vec<&GraphId> = report
            .difference()
            .changed_graphs()
            .map(|g| g.name())
            .collect();
        assert_eq!(changed, vec![&graph("data")]);
        assert_eq!(report.after().size(&graph("data")), Some(4));
    }

    #[test]
    fn run_diff_on_fixtures() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("changes.txt");
        let code = rdf_pipeline::cli::run_diff(DiffConfig {
            left: fixture_path("build-1.trig"),
            right: fixture_path("build-2.trig"),
            output_file: Some(log.clone()),
            diff: DiffSettings {
                show_unchanged: true,
                fail_on_change: true,
            },
            behavior: BehaviorConfig { quiet: true },
        })
        .unwrap();

        assert_eq!(code, exit_codes::CHANGES_DETECTED);
        let content = std::fs::read_to_string(log).unwrap();
        assert!(content.contains("unchanged graph: DEFAULT"));
        assert_eq!(content.lines().count(), 5);
    }
}

// ============================================================================
// Loading
// ============================================================================

mod load_stage {
    use super::*;

    #[test]
    fn multiple_inputs_merge() {
        let dataset =
            load_dataset(&[fixture_path("ontology.ttl"), fixture_path("build-1.trig")]).unwrap();
        assert_eq!(dataset.graph_size(&GraphId::Default), Some(4));
        assert_eq!(dataset.named_graph_names().len(), 3);
    }

    #[test]
    fn triples_into_named_graph() {
        let mut dataset = MemoryDataset::new();
        let target = graph("ontology");
        load_into(&mut dataset, &fixture_path("ontology.ttl"), Some(&target)).unwrap();
        assert_eq!(dataset.graph_size(&target), Some(2));
        assert_eq!(dataset.graph_size(&GraphId::Default), Some(0));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_dataset(&[fixture_path("does-not-exist.ttl")]).is_err());
    }
}

// ============================================================================
// Output
// ============================================================================

mod write_stage {
    use super::*;

    #[test]
    fn empty_selection_to_triples_target_writes_default_graph_only() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = load("build-1.trig");
        let report = OutputWriter::new(OutputFile::new(dir.path().join("out.ttl")))
            .write(&dataset, &GraphSelection::default())
            .unwrap();

        assert_eq!(report.mode, WriteMode::UnionOfSelection(vec![GraphId::Default]));
        let written = read_back(&report.path, RdfFormat::Turtle);
        assert_eq!(written.len(), 2);
        let expected = dataset.graph(&GraphId::Default).unwrap();
        let actual = written.graph(&GraphId::Default).unwrap();
        assert!(expected.iter().all(|t| actual.contains(t)));
    }

    #[test]
    fn empty_selection_to_quad_target_writes_everything() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = load("build-1.trig");
        let report = OutputWriter::new(OutputFile::new(dir.path().join("out.trig")))
            .write(&dataset, &GraphSelection::default())
            .unwrap();

        assert_eq!(report.mode, WriteMode::CompleteDataset);
        let written = read_back(&report.path, RdfFormat::TriG);
        assert!(!diff_states(
            &DatasetState::capture(&dataset),
            &DatasetState::capture(&written)
        )
        .is_different());
    }

    #[test]
    fn selection_to_quad_target_keeps_graph_names() {
        let dir = tempfile::tempdir().unwrap();
        let selection =
            GraphSelection::parse(&["default", "http://example.com/graphs/shapes"]).unwrap();
        let report = OutputWriter::new(OutputFile::new(dir.path().join("out.nq")))
            .write(&load("build-1.trig"), &selection)
            .unwrap();

        let written = read_back(&report.path, RdfFormat::NQuads);
        assert_eq!(
            written.graph_ids(),
            vec![GraphId::Default, graph("shapes")]
        );
        assert_eq!(report.statements, 4);
    }

    #[test]
    fn all_graphs_to_triples_target_is_union_without_default() {
        let dir = tempfile::tempdir().unwrap();
        let report = OutputWriter::new(OutputFile::new(dir.path().join("out.nt")))
            .write(&load("build-1.trig"), &GraphSelection::all_graphs())
            .unwrap();

        let written = read_back(&report.path, RdfFormat::NTriples);
        assert_eq!(written.len(), 6);
        assert!(!written.has_named_graphs());
    }

    #[test]
    fn declared_format_overrides_extension() {
        let dir = tempfile::tempdir().unwrap();
        let target = OutputFile::new(dir.path().join("out.txt")).with_format(Some("nquads"));
        let report = OutputWriter::new(target)
            .write(&load("build-1.trig"), &GraphSelection::default())
            .unwrap();
        assert_eq!(report.format, RdfFormat::NQuads);
        assert_eq!(read_back(&report.path, RdfFormat::NQuads).len(), 8);
    }

    #[test]
    fn carriage_returns_are_stripped_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let s = NamedNode::new_unchecked("http://example.com/s");
        let p = NamedNode::new_unchecked("http://example.com/p");
        let mut dataset = MemoryDataset::new();
        dataset.insert(
            &GraphId::Default,
            &Triple::new(s.clone(), p.clone(), Literal::new_typed_literal("5\r\n", xsd::STRING)),
        );
        dataset.insert(
            &GraphId::Default,
            &Triple::new(s.clone(), p.clone(), Literal::new_simple_literal("a\rb")),
        );

        let report = OutputWriter::new(OutputFile::new(dir.path().join("clean.nt")))
            .write(&dataset, &GraphSelection::default())
            .unwrap();
        assert_eq!(report.sanitized, 2);

        let written = read_back(&report.path, RdfFormat::NTriples);
        let default = written.graph(&GraphId::Default).unwrap();
        assert!(default.contains(&Triple::new(
            s.clone(),
            p.clone(),
            Literal::new_typed_literal("5\n", xsd::STRING)
        )));
        assert!(default.contains(&Triple::new(s, p, Literal::new_simple_literal("ab"))));
        assert!(dataset
            .graph(&GraphId::Default)
            .unwrap()
            .iter()
            .any(|t| t.object.to_string().contains("\\r")));
    }
}
