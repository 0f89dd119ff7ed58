//! Error types for schema loading and validation.

use thiserror::Error;

/// Error type for schema loading operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Enum field declared without a value table.
    #[error("enum field '{field}' on model '{model}' has no values")]
    MissingEnumValues {
        /// Model name.
        model: String,
        /// Field name.
        field: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Reference annotating a field the model does not declare.
    #[error("reference '{field}' on model '{model}' does not annotate a declared field")]
    ReferenceWithoutField {
        /// Model name.
        model: String,
        /// Referencing field name.
        field: String,
    },

    /// Enum field with an empty value table.
    #[error("enum field '{field}' on model '{model}' declares no values")]
    EmptyEnum {
        /// Model name.
        model: String,
        /// Field name.
        field: String,
    },
}

impl ParseError {
    /// Creates a missing enum values error.
    pub fn missing_enum_values(model: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingEnumValues {
            model: model.into(),
            field: field.into(),
        }
    }
}
