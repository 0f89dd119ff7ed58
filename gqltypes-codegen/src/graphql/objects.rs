//! Object type declaration generation.

use crate::error::CodegenError;
use crate::graphql::description_property;
use crate::graphql::fields::FieldGenerator;
use crate::graphql::references::ReferenceGenerator;
use crate::imports::{Fragment, Imports};
use crate::options::GeneratorOptions;
use gqltypes_core::NodeBuilder;
use gqltypes_schema::Model;

/// Suffix of generated type bindings.
pub const TYPE_SUFFIX: &str = "Type";

/// Returns the binding name generated for a model (`User` -> `UserType`).
#[must_use]
pub fn type_identifier(model_name: &str) -> String {
    format!("{model_name}{TYPE_SUFFIX}")
}

/// Generator for `<Model>Type` declarations.
pub struct ObjectGenerator<'a, B> {
    builder: &'a B,
    options: &'a GeneratorOptions,
}

impl<'a, B: NodeBuilder> ObjectGenerator<'a, B> {
    /// Creates a new object generator.
    #[must_use]
    pub fn new(builder: &'a B, options: &'a GeneratorOptions) -> Self {
        Self { builder, options }
    }

    /// Generates the declaration
    /// `var <name>Type = new GraphQLObjectType({ name, description, fields })`.
    ///
    /// Fields follow declaration order. A referenced field is immediately
    /// followed by its derived reference field.
    ///
    /// # Errors
    /// Propagates field generation errors.
    pub fn generate(&self, name: &str, model: &Model) -> Result<Fragment<B::Decl>, CodegenError> {
        let b = self.builder;
        let field_generator = FieldGenerator::new(b, self.options);
        let reference_generator = ReferenceGenerator::new(b, self.options);

        let mut imports = Imports::new();
        let mut fields = Vec::with_capacity(model.fields.len() + model.references.len());

        for (field_name, field) in &model.fields {
            let entry = field_generator.generate(name, field)?;
            imports.merge(entry.imports);
            fields.push(entry.node);

            if let Some(target) = model.reference(field_name) {
                let entry = reference_generator.generate(model, field_name, target);
                imports.merge(entry.imports);
                fields.push(entry.node);
            }
        }

        let declaration = b.object(vec![
            b.property("name", b.literal(name.into())),
            description_property(b, self.options, model.description.as_deref()),
            b.property("fields", b.object(fields)),
        ]);

        let init = b.new_expression(&self.options.identifiers.object_type, vec![declaration]);
        let node = b.variable(
            self.options.declaration_style.kind(),
            &type_identifier(name),
            init,
        );

        Ok(Fragment { node, imports })
    }
}
