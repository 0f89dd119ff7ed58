//! # gqltypes Core
//!
//! Syntax-tree primitives shared by the gqltypes crates.
//!
//! This crate provides:
//! - ESTree-compatible expression and declaration nodes
//! - The [`NodeBuilder`] construction interface used by the generator
//! - [`EstreeBuilder`], the default builder producing owned [`ast`] nodes

pub mod ast;
pub mod builder;

pub use ast::{
    DeclarationKind, Expression, Identifier, Literal, LiteralValue, NewExpression,
    ObjectExpression, Property, PropertyKind, VariableDeclaration, VariableDeclarator,
};
pub use builder::{EstreeBuilder, NodeBuilder};
