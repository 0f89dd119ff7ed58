//! GraphQL type declaration builders.
//!
//! Leaves first: [`ScalarResolver`] and [`EnumGenerator`] build type
//! expressions, [`FieldGenerator`] and [`ReferenceGenerator`] build field
//! entries, and [`ObjectGenerator`] assembles the declaration for a model.

pub mod enums;
pub mod fields;
pub mod objects;
pub mod references;
pub mod scalars;

pub use enums::EnumGenerator;
pub use fields::FieldGenerator;
pub use objects::{ObjectGenerator, type_identifier};
pub use references::ReferenceGenerator;
pub use scalars::ScalarResolver;

use crate::options::GeneratorOptions;
use gqltypes_core::NodeBuilder;

/// Builds a `description: "..."` property, falling back to the default
/// description.
pub(crate) fn description_property<B: NodeBuilder>(
    builder: &B,
    options: &GeneratorOptions,
    description: Option<&str>,
) -> B::Prop {
    let text = options.describe(description);
    builder.property("description", builder.literal(text.into()))
}
