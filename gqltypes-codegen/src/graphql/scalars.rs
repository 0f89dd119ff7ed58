//! Field type resolution.

use crate::error::CodegenError;
use crate::graphql::enums::EnumGenerator;
use crate::imports::{Fragment, Imports};
use crate::options::{GeneratorOptions, UnknownTypePolicy};
use gqltypes_core::NodeBuilder;
use gqltypes_schema::{Field, FieldType};

/// Identifier emitted for unknown types under [`UnknownTypePolicy::Permissive`].
pub const UNDEFINED: &str = "undefined";

/// Resolves a field's type to a type expression.
pub struct ScalarResolver<'a, B> {
    builder: &'a B,
    options: &'a GeneratorOptions,
}

impl<'a, B: NodeBuilder> ScalarResolver<'a, B> {
    /// Creates a new resolver.
    #[must_use]
    pub fn new(builder: &'a B, options: &'a GeneratorOptions) -> Self {
        Self { builder, options }
    }

    /// Resolves the type expression of `field`, declared on `model`.
    ///
    /// Scalars are wrapped in the non-null constructor unless the field is
    /// nullable. Enum fields are built by [`EnumGenerator`] and never wrapped.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownType` for an unrecognised field type
    /// when the policy is [`UnknownTypePolicy::Reject`].
    pub fn resolve(&self, model: &str, field: &Field) -> Result<Fragment<B::Expr>, CodegenError> {
        let ids = &self.options.identifiers;

        let scalar = match &field.field_type {
            FieldType::Enum(values) => {
                return Ok(EnumGenerator::new(self.builder, self.options).generate(field, values));
            }
            FieldType::String => Some(ids.string.as_str()),
            FieldType::Integer => Some(ids.int.as_str()),
            FieldType::Float => Some(ids.float.as_str()),
            FieldType::Unknown(type_name) => match self.options.unknown_types {
                UnknownTypePolicy::Reject => {
                    return Err(CodegenError::unknown_type(model, &field.name, type_name));
                }
                UnknownTypePolicy::Permissive => {
                    tracing::warn!(
                        "Unknown type '{}' for field '{}' of model '{}', emitting '{}'",
                        type_name,
                        field.name,
                        model,
                        UNDEFINED
                    );
                    None
                }
            },
        };

        let mut imports = Imports::new();
        let expr = match scalar {
            Some(name) => {
                imports.insert(name);
                self.builder.identifier(name)
            }
            None => self.builder.identifier(UNDEFINED),
        };

        if field.is_nullable {
            return Ok(Fragment {
                node: expr,
                imports,
            });
        }

        imports.insert(ids.non_null.as_str());
        Ok(Fragment {
            node: self.builder.new_expression(&ids.non_null, vec![expr]),
            imports,
        })
    }
}
