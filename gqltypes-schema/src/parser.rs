//! JSON schema loader.
//!
//! The document shape is:
//!
//! ```json
//! { "models": { "User": {
//!     "description": "optional",
//!     "fields": { "id": { "type": "integer", "isNullable": false } },
//!     "references": { "groupId": "Group" } } } }
//! ```
//!
//! Models and fields are keyed by their map keys, which is also what
//! `references` keys point at. The optional `name` only overrides the name
//! emitted for a model or field and defaults to the map key. A reference
//! value may be either the target model name or an object carrying a `name`.

use crate::error::ParseError;
use crate::types::{EnumValue, Field, FieldType, Model, Schema};
use gqltypes_core::LiteralValue;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Parses a schema from a JSON string.
///
/// # Arguments
/// * `json` - JSON schema content
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or an enum field has no values.
pub fn parse_schema(json: &str) -> Result<Schema, ParseError> {
    let raw: RawSchema = serde_json::from_str(json)?;

    let mut schema = Schema::new();
    for (key, raw_model) in raw.models {
        let model = raw_model.into_model(&key)?;
        schema.insert_model(key, model);
    }

    Ok(schema)
}

/// Parses a schema from a JSON file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or its content is invalid.
pub fn parse_schema_file(path: &Path) -> Result<Schema, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_schema(&json)
}

#[derive(Debug, Deserialize)]
struct RawSchema {
    #[serde(default)]
    models: IndexMap<String, RawModel>,
}

#[derive(Debug, Deserialize)]
struct RawModel {
    name: Option<String>,
    description: Option<String>,
    #[serde(default)]
    fields: IndexMap<String, RawField>,
    #[serde(default)]
    references: IndexMap<String, RawReference>,
}

impl RawModel {
    fn into_model(self, key: &str) -> Result<Model, ParseError> {
        let name = self.name.unwrap_or_else(|| key.to_string());

        let mut fields = IndexMap::with_capacity(self.fields.len());
        for (field_key, raw_field) in self.fields {
            let field = raw_field.into_field(&name, &field_key)?;
            fields.insert(field_key, field);
        }

        let references = self
            .references
            .into_iter()
            .map(|(field, target)| (field, target.into_name()))
            .collect();

        Ok(Model {
            name,
            description: self.description,
            fields,
            references,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawField {
    name: Option<String>,
    description: Option<String>,
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default = "default_nullable")]
    is_nullable: bool,
    values: Option<IndexMap<String, RawEnumValue>>,
}

fn default_nullable() -> bool {
    true
}

impl RawField {
    fn into_field(self, model: &str, key: &str) -> Result<Field, ParseError> {
        let name = self.name.unwrap_or_else(|| key.to_string());

        let field_type = if self.type_name == "enum" {
            let Some(values) = self.values else {
                return Err(ParseError::missing_enum_values(model, name));
            };
            FieldType::Enum(
                values
                    .into_iter()
                    .map(|(k, v)| {
                        (
                            k,
                            EnumValue {
                                value: v.value,
                                description: v.description,
                            },
                        )
                    })
                    .collect(),
            )
        } else {
            FieldType::from_scalar_name(&self.type_name)
        };

        Ok(Field {
            name,
            description: self.description,
            field_type,
            is_nullable: self.is_nullable,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawEnumValue {
    value: LiteralValue,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawReference {
    Name(String),
    Model { name: String },
}

impl RawReference {
    fn into_name(self) -> String {
        match self {
            Self::Name(name) | Self::Model { name } => name,
        }
    }
}
