//! RDF serialization format detection.
//!
//! Formats are chosen from a declared language name when one is given,
//! otherwise from the file extension. Whether a format can hold named
//! graphs decides how output is written.

use crate::error::{RdfPipelineError, Result, SerializeErrorKind};
use oxrdfio::RdfFormat;
use std::path::Path;

/// Language names and extensions, lowercase, mapped to their format.
const FORMAT_NAMES: &[(&str, RdfFormat)] = &[
    ("turtle", RdfFormat::Turtle),
    ("ttl", RdfFormat::Turtle),
    ("trig", RdfFormat::TriG),
    ("ntriples", RdfFormat::NTriples),
    ("n-triples", RdfFormat::NTriples),
    ("nt", RdfFormat::NTriples),
    ("nquads", RdfFormat::NQuads),
    ("n-quads", RdfFormat::NQuads),
    ("nq", RdfFormat::NQuads),
    ("rdfxml", RdfFormat::RdfXml),
    ("rdf/xml", RdfFormat::RdfXml),
    ("rdf-xml", RdfFormat::RdfXml),
    ("rdf", RdfFormat::RdfXml),
    ("owl", RdfFormat::RdfXml),
    ("xml", RdfFormat::RdfXml),
    ("n3", RdfFormat::N3),
];

/// What a serialization format can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCapability {
    /// Named graphs plus the default graph in one file
    Quads,
    /// One flat set of triples
    Triples,
}

impl FormatCapability {
    /// Capability of an `oxrdfio` format.
    #[must_use]
    pub fn of(format: RdfFormat) -> Self {
        if format.supports_datasets() {
            Self::Quads
        } else {
            Self::Triples
        }
    }

    /// Whether named graphs survive serialization.
    #[must_use]
    pub const fn is_quad_capable(self) -> bool {
        matches!(self, Self::Quads)
    }
}

/// Look up a format by language name, extension or media type.
#[must_use]
pub fn format_from_name(name: &str) -> Option<RdfFormat> {
    let lower = name.trim().to_lowercase();
    FORMAT_NAMES
        .iter()
        .find(|(n, _)| *n == lower)
        .map(|(_, f)| *f)
        .or_else(|| RdfFormat::from_media_type(&lower))
}

/// Look up a format from a file extension.
#[must_use]
pub fn format_from_path(path: &Path) -> Option<RdfFormat> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    FORMAT_NAMES
        .iter()
        .find(|(n, _)| *n == ext)
        .map(|(_, f)| *f)
}

/// Pick the output format: the declared language wins over the extension.
pub fn resolve_output_format(path: &Path, declared: Option<&str>) -> Result<RdfFormat> {
    match declared {
        Some(name) => format_from_name(name).ok_or_else(|| {
            RdfPipelineError::serialize(
                format!("for {}", path.display()),
                SerializeErrorKind::UnknownFormat(name.to_string()),
            )
        }),
        None => format_from_path(path).ok_or_else(|| {
            RdfPipelineError::serialize(
                format!("for {}", path.display()),
                SerializeErrorKind::UnknownFormat(format!(
                    "cannot infer a format from '{}'",
                    path.display()
                )),
            )
        }),
    }
}

/// Whether a language name is recognised.
#[must_use]
pub fn is_known_format(name: &str) -> bool {
    format_from_name(name).is_some()
}
