//! Reference field generation.
//!
//! A reference annotates a foreign-key-like field (`authorId`) with the
//! model it points to. Besides the raw field, the object type gains a field
//! typed with the referenced model's type (`author: { type: UserType }`).

use crate::graphql::fields::FieldGenerator;
use crate::graphql::objects::type_identifier;
use crate::imports::Fragment;
use crate::options::GeneratorOptions;
use gqltypes_core::NodeBuilder;
use gqltypes_schema::Model;

/// Suffix stripped from referencing field names.
pub const ID_SUFFIX: &str = "Id";

/// Suffix appended when the derived name is already a field.
pub const COLLISION_SUFFIX: &str = "Ref";

/// Prefix marking a parent relationship.
pub const PARENT_PREFIX: &str = "parent";

/// Generator for derived reference fields.
pub struct ReferenceGenerator<'a, B> {
    builder: &'a B,
    options: &'a GeneratorOptions,
}

impl<'a, B: NodeBuilder> ReferenceGenerator<'a, B> {
    /// Creates a new reference generator.
    #[must_use]
    pub fn new(builder: &'a B, options: &'a GeneratorOptions) -> Self {
        Self { builder, options }
    }

    /// Generates the reference entry for field `ref_name` of `model`, which
    /// points to the model named `target`.
    #[must_use]
    pub fn generate(&self, model: &Model, ref_name: &str, target: &str) -> Fragment<B::Prop> {
        let name = reference_field_name(model, ref_name);
        let description = reference_description(&self.options.default_description, &name, target);
        let type_name = type_identifier(target);

        tracing::trace!(
            "Model '{}' reference '{}' -> field '{}' of type {}",
            model.name,
            ref_name,
            name,
            type_name
        );

        let type_expr = self.builder.identifier(&type_name);
        let node = FieldGenerator::new(self.builder, self.options).build(
            &name,
            Some(&description),
            type_expr,
        );

        Fragment::new(node).with_import(type_name)
    }
}

/// Derives the reference field name: strips a trailing `Id`, then appends
/// `Ref` if the result names any field declared on the model.
#[must_use]
pub fn reference_field_name(model: &Model, ref_name: &str) -> String {
    let mut name = ref_name
        .strip_suffix(ID_SUFFIX)
        .unwrap_or(ref_name)
        .to_string();

    if model.has_field(&name) {
        name.push_str(COLLISION_SUFFIX);
    }

    name
}

/// Builds the description of a reference field.
#[must_use]
pub fn reference_description(default_description: &str, field_name: &str, target: &str) -> String {
    if field_name.starts_with(PARENT_PREFIX) {
        format!("{default_description} (parent {target})")
    } else {
        format!("{default_description} (reference)")
    }
}
