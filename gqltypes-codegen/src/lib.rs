//! # gqltypes Codegen
//!
//! GraphQL type declaration generation from model schemas.
//!
//! This crate provides:
//! - One `<Model>Type = new GraphQLObjectType({...})` declaration per model
//! - Scalar, non-null, enum and reference field typing
//! - Per-model tracking of the identifiers each declaration needs in scope
//! - Pluggable syntax-tree construction through [`gqltypes_core::NodeBuilder`]

pub mod error;
pub mod generator;
pub mod graphql;
pub mod imports;
pub mod options;

pub use error::CodegenError;
pub use generator::{GeneratedType, GeneratedTypes, Generator};
pub use imports::{Fragment, Imports};
pub use options::{DeclarationStyle, GeneratorOptions, Identifiers, UnknownTypePolicy};

use gqltypes_schema::Schema;

/// Generates ESTree declarations for every model of a schema.
///
/// # Errors
/// Returns `CodegenError` if a field type cannot be resolved.
pub fn generate(schema: &Schema, options: &GeneratorOptions) -> Result<GeneratedTypes, CodegenError> {
    Generator::new(schema, options).generate()
}

/// Generates declarations from a JSON schema string.
///
/// # Arguments
/// * `json` - JSON schema content
/// * `options` - Generation options
///
/// # Errors
/// Returns `CodegenError` if parsing, validation, or generation fails.
pub fn generate_from_json(
    json: &str,
    options: &GeneratorOptions,
) -> Result<GeneratedTypes, CodegenError> {
    let schema = gqltypes_schema::parse_schema(json)?;
    gqltypes_schema::validate_schema(&schema)?;
    generate(&schema, options)
}

/// Generates declarations from a JSON schema file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation, or generation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    options: &GeneratorOptions,
) -> Result<GeneratedTypes, CodegenError> {
    let schema = gqltypes_schema::parse_schema_file(path)?;
    gqltypes_schema::validate_schema(&schema)?;
    generate(&schema, options)
}
