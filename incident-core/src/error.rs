use std::path::PathBuf;

use thiserror::Error;

use crate::form::FormField;

/// A select control or config value that does not name a known option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown severity '{0}' (expected Low, Medium or High)")]
    UnknownSeverity(String),
    #[error("unknown severity filter '{0}' (expected All, Low, Medium or High)")]
    UnknownFilter(String),
    #[error("unknown sort order '{0}' (expected newest or oldest)")]
    UnknownSortOrder(String),
}

/// Form submission rejected. Carries every field that failed, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("incident form has invalid fields: {}", join_fields(.fields))]
pub struct ValidationError {
    pub fields: Vec<FormField>,
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(FormField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("seed file {path} repeats incident id {id}")]
    DuplicateId { path: PathBuf, id: u64 },
    #[error("seed file {path} has incident id {id} outside 1..={max}")]
    InvalidId { path: PathBuf, id: u64, max: u64 },
    #[error("seed file {path} has an empty {} on incident {id}", .field.as_str())]
    EmptyField {
        path: PathBuf,
        id: u64,
        field: FormField,
    },
    #[error("invalid value for {key}: {source}")]
    Value {
        key: String,
        #[source]
        source: ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_fields() {
        let err = ValidationError {
            fields: vec![FormField::Title, FormField::Description],
        };
        assert_eq!(
            err.to_string(),
            "incident form has invalid fields: title, description"
        );
    }
}
