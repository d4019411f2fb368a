//! Configuration validation.

use super::types::{AppConfig, BehaviorConfig, DiffSettings, OutputConfig};
use crate::format::{format_from_path, is_known_format};
use crate::selection::GraphToken;

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.output.validate());
        errors.extend(self.diff.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref format) = self.format {
            if !is_known_format(format) {
                errors.push(ConfigError::new(
                    "output.format",
                    format!(
                        "Unknown language '{format}'. Valid options: turtle, trig, ntriples, nquads, rdfxml, n3"
                    ),
                ));
            }
        } else if let Some(ref file) = self.file {
            if format_from_path(file).is_none() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!(
                        "Cannot infer a language from '{}', set output.format",
                        file.display()
                    ),
                ));
            }
        }

        for (i, raw) in self.graphs.iter().enumerate() {
            if let Err(e) = raw.parse::<GraphToken>() {
                errors.push(ConfigError::new(format!("output.graphs[{i}]"), e.to_string()));
            }
        }

        errors
    }
}

impl Validatable for DiffSettings {
    fn validate(&self) -> Vec<ConfigError> {
        Vec::new()
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_unknown_format() {
        let config = AppConfig::builder()
            .output_format(Some("yaml-ld".to_string()))
            .build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "output.format");
    }

    #[test]
    fn test_uninferable_extension() {
        let config = AppConfig::builder()
            .output_file(Some(PathBuf::from("out/data.bin")))
            .build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "output.file");

        let fixed = AppConfig::builder()
            .output_file(Some(PathBuf::from("out/data.bin")))
            .output_format(Some("nt".to_string()))
            .build();
        assert!(fixed.is_valid());
    }

    #[test]
    fn test_invalid_graph_tokens_are_reported_by_index() {
        let config = AppConfig::builder()
            .graphs(vec![
                "default".to_string(),
                "_:b1".to_string(),
                String::new(),
            ])
            .build();
        let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["output.graphs[1]", "output.graphs[2]"]);
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::new("output.format", "bad");
        assert_eq!(err.to_string(), "output.format: bad");
    }
}
