//! Unified error types for rdf-pipeline.
//!
//! This module provides the error hierarchy for the library,
//! with rich context for debugging and user-friendly messages.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rdf-pipeline operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RdfPipelineError {
    /// Errors while reading RDF input
    #[error("Failed to parse RDF: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors while writing RDF output
    #[error("Failed to serialize RDF: {context}")]
    Serialize {
        context: String,
        #[source]
        source: SerializeErrorKind,
    },

    /// Invalid graph selection token
    #[error("Invalid graph selection '{token}': {reason}")]
    Selection { token: String, reason: String },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Unknown RDF format for '{0}'")]
    UnknownFormat(String),

    #[error("Syntax error: {0}")]
    Syntax(String),

    #[error("Invalid snapshot JSON: {0}")]
    InvalidSnapshot(String),
}

/// Specific serialization error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SerializeErrorKind {
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    #[error("Serializer failed: {0}")]
    Serializer(String),

    #[error("JSON serialization failed: {0}")]
    Json(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for rdf-pipeline operations
pub type Result<T> = std::result::Result<T, RdfPipelineError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl RdfPipelineError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for an input whose format cannot be determined
    pub fn unknown_format(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::parse(format!("at {path}"), ParseErrorKind::UnknownFormat(path))
    }

    /// Create a serialization error with context
    pub fn serialize(context: impl Into<String>, source: SerializeErrorKind) -> Self {
        Self::Serialize {
            context: context.into(),
            source,
        }
    }

    /// Create a graph selection error
    pub fn selection(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Selection {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error stems from user configuration rather than data or IO.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Selection { .. })
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for RdfPipelineError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for RdfPipelineError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "snapshot deserialization",
            ParseErrorKind::InvalidSnapshot(err.to_string()),
        )
    }
}

impl From<oxrdfio::RdfParseError> for RdfPipelineError {
    fn from(err: oxrdfio::RdfParseError) -> Self {
        Self::parse("RDF input", ParseErrorKind::Syntax(err.to_string()))
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained, outermost first:
///
/// ```ignore
/// use rdf_pipeline::error::ErrorContext;
///
/// fn load(path: &Path) -> Result<MemoryDataset> {
///     parse_file(path).with_context(|| format!("loading {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<RdfPipelineError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: RdfPipelineError, new_ctx: &str) -> RdfPipelineError {
    match err {
        RdfPipelineError::Parse {
            context: existing,
            source,
        } => RdfPipelineError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        RdfPipelineError::Serialize {
            context: existing,
            source,
        } => RdfPipelineError::Serialize {
            context: chain_context(new_ctx, &existing),
            source,
        },
        RdfPipelineError::Selection { token, reason } => RdfPipelineError::Selection {
            token,
            reason: chain_context(new_ctx, &reason),
        },
        RdfPipelineError::Io {
            path,
            message,
            source,
        } => RdfPipelineError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        RdfPipelineError::Config(msg) => RdfPipelineError::Config(chain_context(new_ctx, &msg)),
        RdfPipelineError::Validation(msg) => {
            RdfPipelineError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings together as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| RdfPipelineError::Validation(context.into()))
    }
}
