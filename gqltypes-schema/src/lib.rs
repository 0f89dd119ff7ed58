//! # gqltypes Schema
//!
//! Model schema definitions consumed by the type generator.
//!
//! This crate provides:
//! - Typed model, field and enum value definitions
//! - JSON schema loading
//! - Schema validation

pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use parser::{parse_schema, parse_schema_file};
pub use types::{EnumValue, Field, FieldType, Model, Schema};
pub use validation::validate_schema;

pub use gqltypes_core::LiteralValue;
