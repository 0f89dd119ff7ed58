//! Enum type generation.

use crate::graphql::description_property;
use crate::imports::Fragment;
use crate::options::GeneratorOptions;
use convert_case::{Case, Casing};
use gqltypes_core::NodeBuilder;
use gqltypes_schema::{EnumValue, Field};
use indexmap::IndexMap;

/// Generator for nested enum type constructions.
pub struct EnumGenerator<'a, B> {
    builder: &'a B,
    options: &'a GeneratorOptions,
}

impl<'a, B: NodeBuilder> EnumGenerator<'a, B> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(builder: &'a B, options: &'a GeneratorOptions) -> Self {
        Self { builder, options }
    }

    /// Builds `new GraphQLEnumType({ name, description, values })` for an
    /// enum field.
    #[must_use]
    pub fn generate(&self, field: &Field, values: &IndexMap<String, EnumValue>) -> Fragment<B::Expr> {
        let b = self.builder;
        let enum_type = self.options.identifiers.enum_type.as_str();

        let entries = values
            .iter()
            .map(|(name, value)| {
                b.property(
                    &enum_value_key(name),
                    b.object(vec![
                        b.property("value", b.literal(value.value.clone())),
                        description_property(b, self.options, value.description.as_deref()),
                    ]),
                )
            })
            .collect();

        let declaration = b.object(vec![
            b.property("name", b.literal(capitalize(&field.name).into())),
            description_property(b, self.options, field.description.as_deref()),
            b.property("values", b.object(entries)),
        ]);

        Fragment::new(b.new_expression(enum_type, vec![declaration])).with_import(enum_type)
    }
}

/// Converts an enum value name to its key (`activeStatus` -> `ACTIVE_STATUS`).
#[must_use]
pub fn enum_value_key(name: &str) -> String {
    name.to_case(Case::UpperSnake)
}

/// Upper-cases the first character, leaving the rest untouched.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
