//! rdf-pipeline: change tracking and graph-selective output for RDF datasets
//!
//! Snapshots datasets, reports which named graphs changed between two
//! states, and writes graph selections in any RDF serialization.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use rdf_pipeline::{
    cli,
    config::{AppConfig, DiffConfig, SnapshotConfig, Validatable, WriteConfig},
    pipeline::exit_codes,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported RDF Formats:",
        "\n  Datasets: TriG, N-Quads",
        "\n  Graphs:   Turtle, N-Triples, RDF/XML, N3"
    )
}

#[derive(Parser)]
#[command(name = "rdf-pipeline")]
#[command(version, long_version = build_long_version())]
#[command(about = "Change tracking and graph-selective output for RDF datasets", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No changes detected (or --fail-on-change not set)
    1  Changes detected
    3  Error occurred

EXAMPLES:
    # Which graphs changed between two builds
    rdf-pipeline diff build-1.trig build-2.trig

    # Record a state and compare against it later
    rdf-pipeline snapshot ontology.ttl shapes.trig -O state.json
    rdf-pipeline diff state.json shapes.trig --fail-on-change

    # Write two named graphs as one Turtle file
    rdf-pipeline write data.trig -O out/union.ttl -g http://example.com/a -g http://example.com/b")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "RDF_PIPELINE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Left side: an RDF file or a snapshot written by `snapshot`
    left: PathBuf,

    /// Right side: an RDF file or a snapshot written by `snapshot`
    right: PathBuf,

    /// Change-log file (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// List unchanged graphs as well
    #[arg(long)]
    all: bool,

    /// Exit with code 1 if any graph changed
    #[arg(long)]
    fail_on_change: bool,
}

/// Arguments for the `snapshot` subcommand
#[derive(Parser)]
struct SnapshotArgs {
    /// RDF files loaded into one dataset, in order
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Snapshot file (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `write` subcommand
#[derive(Parser)]
struct WriteArgs {
    /// RDF files loaded into one dataset, in order
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file (falls back to output.file from the config)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Output language, overriding the file extension
    #[arg(short, long)]
    format: Option<String>,

    /// Graph to write: an IRI, `default` or `all` (repeatable)
    #[arg(short, long = "graph", value_name = "TOKEN")]
    graphs: Vec<String>,

    /// Directory relative output paths are resolved against
    #[arg(long)]
    base_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report which graphs differ between two datasets or snapshots
    Diff(DiffArgs),

    /// Capture graph sizes and content hashes as JSON
    Snapshot(SnapshotArgs),

    /// Write a graph selection of the loaded dataset to a file
    Write(WriteArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .rdf-pipeline.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(exit_codes::SUCCESS) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Dispatch to command handlers, returning the exit code.
fn run(cli: Cli) -> Result<i32> {
    let overrides = AppConfig::builder().quiet(cli.quiet);

    match cli.command {
        Commands::Diff(args) => {
            let overrides = overrides
                .show_unchanged(args.all)
                .fail_on_change(args.fail_on_change)
                .build();
            let (config, _) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);

            cli::run_diff(DiffConfig {
                left: args.left,
                right: args.right,
                output_file: args.output_file,
                diff: config.diff,
                behavior: config.behavior,
            })
        }

        Commands::Snapshot(args) => {
            let (config, _) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides.build());
            cli::run_snapshot(SnapshotConfig {
                inputs: args.inputs,
                output_file: args.output_file,
                behavior: config.behavior,
            })?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Write(args) => {
            let overrides = overrides
                .output_file(args.output_file)
                .output_format(args.format)
                .graphs(args.graphs)
                .base_dir(args.base_dir)
                .build();
            let (config, _) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);

            cli::run_write(WriteConfig {
                inputs: args.inputs,
                output: config.output,
                behavior: config.behavior,
            })?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "rdf-pipeline", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = rdf_pipeline::config::generate_json_schema()
                .context("failed to serialize schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => run_config(action, cli.config),
    }
}

fn run_config(action: ConfigAction, explicit: Option<PathBuf>) -> Result<i32> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = rdf_pipeline::config::load_or_default(explicit.as_deref());
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            for error in config.validate() {
                eprintln!("# warning: {error}");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            eprintln!("Config file search paths (in order):");
            for path in rdf_pipeline::config::config_search_dirs() {
                eprintln!("  {}", path.display());
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in rdf_pipeline::config::CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match rdf_pipeline::config::discover_config_file(explicit.as_deref()) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".rdf-pipeline.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            let content = rdf_pipeline::config::generate_example_config();
            std::fs::write(&target, content)
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(exit_codes::SUCCESS)
}
