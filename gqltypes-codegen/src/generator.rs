//! Type declaration generator.

use crate::error::CodegenError;
use crate::graphql::ObjectGenerator;
use crate::imports::{Fragment, Imports};
use crate::options::GeneratorOptions;
use gqltypes_core::{EstreeBuilder, NodeBuilder, VariableDeclaration};
use gqltypes_schema::Schema;
use indexmap::IndexMap;

/// Generated declaration for one model.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedType<D = VariableDeclaration> {
    /// Declaration node.
    pub ast: D,
    /// External identifiers the declaration uses, in first-seen order.
    pub imports: Imports,
}

/// Generated declarations keyed by model name, in schema order.
pub type GeneratedTypes<D = VariableDeclaration> = IndexMap<String, GeneratedType<D>>;

/// Generates one type declaration per schema model.
pub struct Generator<'a, B = EstreeBuilder> {
    schema: &'a Schema,
    options: &'a GeneratorOptions,
    builder: B,
}

impl<'a> Generator<'a, EstreeBuilder> {
    /// Creates a generator producing ESTree nodes.
    #[must_use]
    pub fn new(schema: &'a Schema, options: &'a GeneratorOptions) -> Self {
        Self::with_builder(schema, options, EstreeBuilder)
    }
}

impl<'a, B: NodeBuilder> Generator<'a, B> {
    /// Creates a generator using a custom node builder.
    #[must_use]
    pub fn with_builder(schema: &'a Schema, options: &'a GeneratorOptions, builder: B) -> Self {
        Self {
            schema,
            options,
            builder,
        }
    }

    /// Generates declarations for every model.
    ///
    /// Models are processed in schema order, each with its own import set.
    ///
    /// # Errors
    /// Returns the first `CodegenError` raised for any model. No partial
    /// result is returned.
    pub fn generate(&self) -> Result<GeneratedTypes<B::Decl>, CodegenError> {
        let objects = ObjectGenerator::new(&self.builder, self.options);
        let mut types = IndexMap::with_capacity(self.schema.models.len());

        for (name, model) in &self.schema.models {
            let _span = tracing::debug_span!("generate_type", model = %name).entered();

            let Fragment { node, imports } = objects.generate(name, model)?;
            tracing::debug!(
                "Generated declaration for model '{}' ({} fields, {} imports)",
                name,
                model.fields.len() + model.references.len(),
                imports.len()
            );

            types.insert(name.clone(), GeneratedType { ast: node, imports });
        }

        Ok(types)
    }
}
