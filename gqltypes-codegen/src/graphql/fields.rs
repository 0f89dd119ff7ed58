//! Field entry generation.

use crate::error::CodegenError;
use crate::graphql::description_property;
use crate::graphql::scalars::ScalarResolver;
use crate::imports::Fragment;
use crate::options::GeneratorOptions;
use gqltypes_core::NodeBuilder;
use gqltypes_schema::Field;

/// Generator for `name: { type, description }` field entries.
pub struct FieldGenerator<'a, B> {
    builder: &'a B,
    options: &'a GeneratorOptions,
}

impl<'a, B: NodeBuilder> FieldGenerator<'a, B> {
    /// Creates a new field generator.
    #[must_use]
    pub fn new(builder: &'a B, options: &'a GeneratorOptions) -> Self {
        Self { builder, options }
    }

    /// Generates the entry for a schema field, resolving its type.
    ///
    /// # Errors
    /// Propagates type resolution errors.
    pub fn generate(&self, model: &str, field: &Field) -> Result<Fragment<B::Prop>, CodegenError> {
        let resolved = ScalarResolver::new(self.builder, self.options).resolve(model, field)?;
        Ok(Fragment {
            node: self.build(&field.name, field.description.as_deref(), resolved.node),
            imports: resolved.imports,
        })
    }

    /// Builds an entry with an explicit type expression.
    #[must_use]
    pub fn build(&self, name: &str, description: Option<&str>, type_expr: B::Expr) -> B::Prop {
        let b = self.builder;
        b.property(
            name,
            b.object(vec![
                b.property("type", type_expr),
                description_property(b, self.options, description),
            ]),
        )
    }
}
