//! Format-aware dataset writing.

use super::sanitize::{sanitize_graph, sanitize_graphs};
use super::OutputFile;
use crate::error::{RdfPipelineError, Result, SerializeErrorKind};
use crate::format::FormatCapability;
use crate::model::{GraphId, RdfDataset};
use crate::selection::{retain_selected, GraphSelection};
use oxrdf::{Graph, GraphNameRef, QuadRef};
use oxrdfio::{RdfFormat, RdfSerializer};
use std::fmt;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Which of the write paths was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteMode {
    /// Quad-capable target, selected graphs written as a dataset
    DatasetSelection(Vec<GraphId>),
    /// Quad-capable target, nothing selected: every graph written
    CompleteDataset,
    /// Triples-only target, dataset has no named graphs
    AllTriples,
    /// Triples-only target, selected graphs flattened into one graph
    UnionOfSelection(Vec<GraphId>),
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DatasetSelection(ids) => {
                write!(f, "writing graph selection {} of dataset", id_list(ids))
            }
            Self::CompleteDataset => f.write_str("writing complete dataset"),
            Self::AllTriples => f.write_str("writing all triples"),
            Self::UnionOfSelection(ids) => {
                write!(f, "writing union of graph selection {}", id_list(ids))
            }
        }
    }
}

fn id_list(ids: &[GraphId]) -> String {
    let labels: Vec<String> = ids.iter().map(GraphId::label).collect();
    format!("[{}]", labels.join(", "))
}

/// Outcome of one write.
#[derive(Debug, Clone)]
pub struct WriteReport {
    /// File written
    pub path: PathBuf,
    /// Serialization format used
    pub format: RdfFormat,
    /// Write path taken
    pub mode: WriteMode,
    /// Statements serialized
    pub statements: usize,
    /// Literals rewritten by the sanitizer
    pub sanitized: usize,
}

/// What is handed to the serializer.
enum Payload<D> {
    Quads(D),
    Triples(Graph),
}

/// Writes a dataset, or a selection of its graphs, to one output file.
///
/// The caller's dataset is never modified: selection and sanitizing happen
/// on a private copy.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    target: OutputFile,
}

impl OutputWriter {
    /// Create a writer for the given target.
    #[must_use]
    pub const fn new(target: OutputFile) -> Self {
        Self { target }
    }

    /// The output target.
    #[must_use]
    pub const fn target(&self) -> &OutputFile {
        &self.target
    }

    /// Write the selected graphs of `dataset`.
    ///
    /// An empty selection means every graph for quad-capable formats but
    /// only the default graph for triples-only formats.
    pub fn write<D>(&self, dataset: &D, selection: &GraphSelection) -> Result<WriteReport>
    where
        D: RdfDataset + Clone,
    {
        let path = self.target.resolved_path();
        let format = self.target.format()?;
        let capability = FormatCapability::of(format);

        let (mode, payload, sanitized) = prepare(dataset.clone(), capability, selection);
        tracing::info!("{} to {}", mode, path.display());
        if sanitized > 0 {
            tracing::debug!("Sanitized {} literals before writing", sanitized);
        }

        let statements = serialize(path, format, &payload)?;
        tracing::debug!(
            "Wrote {} statements as {} to {}",
            statements,
            format.name(),
            path.display()
        );

        Ok(WriteReport {
            path: path.to_path_buf(),
            format,
            mode,
            statements,
            sanitized,
        })
    }
}

/// Decide the write path and shape the working copy accordingly.
fn prepare<D: RdfDataset>(
    mut working: D,
    capability: FormatCapability,
    selection: &GraphSelection,
) -> (WriteMode, Payload<D>, usize) {
    if capability.is_quad_capable() {
        let mode = if selection.is_empty() {
            WriteMode::CompleteDataset
        } else {
            let selected = selection.resolve(&working);
            retain_selected(&mut working, &selected);
            WriteMode::DatasetSelection(selected)
        };
        let ids = working.graph_ids();
        let sanitized = sanitize_graphs(&mut working, &ids);
        return (mode, Payload::Quads(working), sanitized);
    }

    if !working.has_named_graphs() {
        let mut graph = working
            .graph_mut(&GraphId::Default)
            .map(std::mem::take)
            .unwrap_or_default();
        let sanitized = sanitize_graph(&mut graph);
        return (WriteMode::AllTriples, Payload::Triples(graph), sanitized);
    }

    // Triples-only formats cannot hold every graph, so an empty selection
    // falls back to the default graph alone.
    let effective = if selection.is_empty() {
        GraphSelection::default_graph()
    } else {
        selection.clone()
    };
    let selected = effective.resolve(&working);
    retain_selected(&mut working, &selected);

    let mut union = Graph::new();
    for id in &selected {
        if let Some(graph) = working.graph(id) {
            for triple in graph.iter() {
                union.insert(triple);
            }
        }
    }
    let sanitized = sanitize_graph(&mut union);
    (
        WriteMode::UnionOfSelection(selected),
        Payload::Triples(union),
        sanitized,
    )
}

/// Serialize the payload, creating the parent directory when needed.
///
/// Output goes to a temporary file next to the target, which replaces the
/// target only once serialization has finished.
fn serialize<D: RdfDataset>(
    path: &Path,
    format: RdfFormat,
    payload: &Payload<D>,
) -> Result<usize> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| RdfPipelineError::io(dir, e))?;

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| RdfPipelineError::io(dir, e))?;
    let count = emit(BufWriter::new(temp.as_file_mut()), format, payload)
        .map_err(|e| serializer_error(path, e))?;
    keep_permissions(temp.as_file(), path).map_err(|e| RdfPipelineError::io(path, e))?;
    temp.persist(path).map_err(|e| RdfPipelineError::io(path, e.error))?;
    Ok(count)
}

/// Temporary files are created owner-only; give the result the target's
/// existing permissions, or the usual ones for a new file.
fn keep_permissions(temp: &std::fs::File, path: &Path) -> io::Result<()> {
    if let Ok(existing) = std::fs::metadata(path) {
        return temp.set_permissions(existing.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }
    Ok(())
}

fn emit<D: RdfDataset, W: Write>(
    writer: W,
    format: RdfFormat,
    payload: &Payload<D>,
) -> io::Result<usize> {
    let mut serializer = RdfSerializer::from_format(format).for_writer(writer);
    let mut count = 0;

    match payload {
        Payload::Quads(dataset) => {
            for id in dataset.graph_ids() {
                let Some(graph) = dataset.graph(&id) else {
                    continue;
                };
                for t in graph.iter() {
                    serializer.serialize_quad(QuadRef::new(
                        t.subject,
                        t.predicate,
                        t.object,
                        id.as_graph_name(),
                    ))?;
                    count += 1;
                }
            }
        }
        Payload::Triples(graph) => {
            for t in graph.iter() {
                serializer.serialize_quad(QuadRef::new(
                    t.subject,
                    t.predicate,
                    t.object,
                    GraphNameRef::DefaultGraph,
                ))?;
                count += 1;
            }
        }
    }

    serializer.finish()?.flush()?;
    Ok(count)
}

/// Serializers report unrepresentable statements as invalid input or data;
/// everything else is a failure of the underlying file.
fn serializer_error(path: &Path, err: io::Error) -> RdfPipelineError {
    match err.kind() {
        io::ErrorKind::InvalidInput | io::ErrorKind::InvalidData => RdfPipelineError::serialize(
            format!("writing {}", path.display()),
            SerializeErrorKind::Serializer(err.to_string()),
        ),
        _ => RdfPipelineError::io(path, err),
    }
}
