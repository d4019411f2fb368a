//! Output file targets.

use crate::error::Result;
use crate::format::resolve_output_format;
use oxrdfio::RdfFormat;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// A file to write RDF to, with an optional declared language.
///
/// Relative paths are resolved against a base directory (the current
/// directory when none is set). The resolved path is computed once, on first
/// use, and reused afterwards.
#[derive(Debug, Clone)]
pub struct OutputFile {
    path: PathBuf,
    base_dir: Option<PathBuf>,
    declared_format: Option<String>,
    resolved: OnceLock<PathBuf>,
}

impl OutputFile {
    /// Create a target for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            base_dir: None,
            declared_format: None,
            resolved: OnceLock::new(),
        }
    }

    /// Resolve relative paths against `dir`.
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self.resolved = OnceLock::new();
        self
    }

    /// Declare the output language instead of inferring it from the extension.
    #[must_use]
    pub fn with_format(mut self, name: Option<impl Into<String>>) -> Self {
        self.declared_format = name.map(Into::into);
        self
    }

    /// The path as configured.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The declared language, if any.
    #[must_use]
    pub fn declared_format(&self) -> Option<&str> {
        self.declared_format.as_deref()
    }

    /// The absolute path written to.
    pub fn resolved_path(&self) -> &Path {
        self.resolved.get_or_init(|| {
            if self.path.is_absolute() {
                return self.path.clone();
            }
            let base = self
                .base_dir
                .clone()
                .or_else(|| std::env::current_dir().ok())
                .unwrap_or_default();
            base.join(&self.path)
        })
    }

    /// The serialization format of this target.
    pub fn format(&self) -> Result<RdfFormat> {
        resolve_output_format(self.resolved_path(), self.declared_format())
    }
}
