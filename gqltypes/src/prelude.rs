//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use gqltypes::prelude::*;
//! ```

// Syntax tree
pub use gqltypes_core::{
    DeclarationKind, EstreeBuilder, Expression, LiteralValue, NodeBuilder, VariableDeclaration,
};

// Schema
pub use gqltypes_schema::{
    EnumValue, Field, FieldType, Model, ParseError, Schema, SchemaError, parse_schema,
    validate_schema,
};

// Generation
pub use gqltypes_codegen::{
    CodegenError, DeclarationStyle, GeneratedType, GeneratedTypes, Generator, GeneratorOptions,
    Identifiers, Imports, UnknownTypePolicy, generate, generate_from_file, generate_from_json,
};
