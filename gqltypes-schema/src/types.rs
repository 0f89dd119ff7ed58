//! Schema type definitions.
//!
//! This module contains the data structures describing models, their typed
//! fields and the references between models.

use gqltypes_core::LiteralValue;
use indexmap::IndexMap;

/// Complete schema: models keyed by name, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    /// Model definitions.
    pub models: IndexMap<String, Model>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a model, keyed by its name. A model with the same name is replaced
    /// in place.
    pub fn add_model(&mut self, model: Model) {
        self.insert_model(model.name.clone(), model);
    }

    /// Adds a model under an explicit key, which may differ from its name.
    pub fn insert_model(&mut self, key: impl Into<String>, model: Model) {
        self.models.insert(key.into(), model);
    }

    /// Adds a model and returns the schema.
    #[must_use]
    pub fn with_model(mut self, model: Model) -> Self {
        self.add_model(model);
        self
    }

    /// Looks up a model by name.
    #[must_use]
    pub fn get_model(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    /// Returns true if a model with the given name exists.
    #[must_use]
    pub fn has_model(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Returns the number of models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns true if the schema has no models.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Model definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Model name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Fields keyed by name, in declaration order.
    pub fields: IndexMap<String, Field>,
    /// Referenced model names keyed by the annotated field name.
    pub references: IndexMap<String, String>,
}

impl Model {
    /// Creates a new model without fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
            references: IndexMap::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a field, keyed by its name.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    /// Annotates `field` as a reference to the model named `target`.
    #[must_use]
    pub fn with_reference(mut self, field: impl Into<String>, target: impl Into<String>) -> Self {
        self.references.insert(field.into(), target.into());
        self
    }

    /// Returns the model referenced by the given field, if any.
    #[must_use]
    pub fn reference(&self, field: &str) -> Option<&str> {
        self.references.get(field).map(String::as_str)
    }

    /// Returns true if the model declares a field with the given name.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }
}

/// Field type variants.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// Text.
    String,
    /// Whole number.
    Integer,
    /// Floating point number.
    Float,
    /// Enumerated values keyed by value name, in declaration order.
    Enum(IndexMap<String, EnumValue>),
    /// Unrecognised type name, kept verbatim.
    Unknown(String),
}

impl FieldType {
    /// Maps a schema type name to a field type. `"enum"` is not handled here
    /// since it needs a value table.
    #[must_use]
    pub fn from_scalar_name(name: &str) -> Self {
        match name {
            "string" => Self::String,
            "integer" => Self::Integer,
            "float" => Self::Float,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Returns the schema name of this type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Enum(_) => "enum",
            Self::Unknown(name) => name,
        }
    }

    /// Returns true if this is an enum type.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }
}

/// Field definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Field type.
    pub field_type: FieldType,
    /// Whether the field may be null.
    pub is_nullable: bool,
}

impl Field {
    /// Creates a new nullable field.
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            description: None,
            field_type,
            is_nullable: true,
        }
    }

    /// Creates a nullable string field.
    #[must_use]
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::String)
    }

    /// Creates a nullable integer field.
    #[must_use]
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Integer)
    }

    /// Creates a nullable float field.
    #[must_use]
    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Float)
    }

    /// Creates a nullable enum field from `(name, value)` pairs.
    #[must_use]
    pub fn enumeration<I, K>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (K, EnumValue)>,
        K: Into<String>,
    {
        let values = values.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self::new(name, FieldType::Enum(values))
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the field as required (non-nullable).
    #[must_use]
    pub fn required(mut self) -> Self {
        self.is_nullable = false;
        self
    }

    /// Sets nullability.
    #[must_use]
    pub fn nullable(mut self, is_nullable: bool) -> Self {
        self.is_nullable = is_nullable;
        self
    }
}

/// Enum value definition.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    /// Underlying constant.
    pub value: LiteralValue,
    /// Description.
    pub description: Option<String>,
}

impl EnumValue {
    /// Creates a new enum value.
    #[must_use]
    pub fn new(value: impl Into<LiteralValue>) -> Self {
        Self {
            value: value.into(),
            description: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
