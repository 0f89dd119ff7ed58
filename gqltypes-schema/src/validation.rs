//! Schema validation utilities.
//!
//! This module checks the structural invariants the generator relies on.

use crate::error::SchemaError;
use crate::types::{FieldType, Model, Schema};

/// Validates a schema for correctness.
///
/// A reference whose target model is missing from the schema is not an
/// error. It is logged at `warn` level, since the target may be declared
/// elsewhere.
///
/// # Errors
/// Returns `SchemaError` if a reference annotates an undeclared field or an
/// enum field declares no values.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    for model in schema.models.values() {
        validate_references(schema, model)?;
        validate_enums(model)?;
    }
    Ok(())
}

/// Validates the reference annotations of a model.
fn validate_references(schema: &Schema, model: &Model) -> Result<(), SchemaError> {
    for (field, target) in &model.references {
        if !model.has_field(field) {
            return Err(SchemaError::ReferenceWithoutField {
                model: model.name.clone(),
                field: field.clone(),
            });
        }

        if !schema.has_model(target) {
            tracing::warn!(
                "Model '{}' field '{}' references undeclared model '{}'",
                model.name,
                field,
                target
            );
        }
    }
    Ok(())
}

/// Validates the enum fields of a model.
fn validate_enums(model: &Model) -> Result<(), SchemaError> {
    for field in model.fields.values() {
        if let FieldType::Enum(values) = &field.field_type
            && values.is_empty()
        {
            return Err(SchemaError::EmptyEnum {
                model: model.name.clone(),
                field: field.name.clone(),
            });
        }
    }
    Ok(())
}
