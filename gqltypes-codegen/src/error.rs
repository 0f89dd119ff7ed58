//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] gqltypes_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] gqltypes_schema::SchemaError),

    /// Field type with no scalar mapping.
    #[error("unknown type '{type_name}' in field '{field}' of model '{model}'")]
    UnknownType {
        /// Model name.
        model: String,
        /// Field name.
        field: String,
        /// Type name.
        type_name: String,
    },
}

impl CodegenError {
    /// Creates an unknown type error.
    pub fn unknown_type(
        model: impl Into<String>,
        field: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self::UnknownType {
            model: model.into(),
            field: field.into(),
            type_name: type_name.into(),
        }
    }
}
