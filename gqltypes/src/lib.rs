//! # gqltypes
//!
//! Generates GraphQL object type declarations from model schemas.
//!
//! Each model becomes an ESTree declaration such as
//! `var UserType = new GraphQLObjectType({ name, description, fields })`,
//! together with the list of identifiers it expects to be in scope.
//! Rendering the syntax tree to source text is left to an ESTree printer.
//!
//! ## Quick Start
//!
//! ```ignore
//! use gqltypes::prelude::*;
//!
//! let schema = Schema::new().with_model(
//!     Model::new("User").with_field(Field::integer("id").required()),
//! );
//! let types = generate(&schema, &GeneratorOptions::default())?;
//! let user = &types["User"];
//! println!("{}", serde_json::to_string(&user.ast)?);
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - ESTree nodes and the node-construction interface
//! - [`schema`] - Model schema types, JSON loading and validation
//! - [`codegen`] - Type declaration generation

pub mod prelude;

/// Syntax-tree nodes and builders.
pub mod core {
    pub use gqltypes_core::*;
}

/// Model schema definitions.
pub mod schema {
    pub use gqltypes_schema::*;
}

/// Type declaration generation.
pub mod codegen {
    pub use gqltypes_codegen::*;
}

// Re-export commonly used items at the crate root
pub use gqltypes_codegen::{
    CodegenError, GeneratedType, GeneratedTypes, Generator, GeneratorOptions, generate,
    generate_from_file, generate_from_json,
};
pub use gqltypes_schema::{Schema, parse_schema, validate_schema};
