//! Generation options.
//!
//! Options can be built in code with the `with_*` setters or deserialized
//! from a camelCase JSON/TOML table. Every key is optional.

use gqltypes_core::DeclarationKind;
use serde::Deserialize;

/// Description used by default when the schema provides none.
pub const DEFAULT_DESCRIPTION: &str = "@TODO";

/// Binding style of generated top-level declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationStyle {
    /// Reassignable binding (`var`).
    #[default]
    Mutable,
    /// Single-assignment binding (`const`).
    Immutable,
}

impl DeclarationStyle {
    /// Returns the declaration keyword for this style.
    #[must_use]
    pub const fn kind(&self) -> DeclarationKind {
        match self {
            Self::Mutable => DeclarationKind::Var,
            Self::Immutable => DeclarationKind::Const,
        }
    }
}

/// Handling of field types with no scalar mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownTypePolicy {
    /// Abort generation with [`crate::CodegenError::UnknownType`].
    #[default]
    Reject,
    /// Emit an `undefined` type reference and keep going.
    Permissive,
}

/// Framework identifiers referenced by generated code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Identifiers {
    /// String scalar.
    pub string: String,
    /// Integer scalar.
    pub int: String,
    /// Float scalar.
    pub float: String,
    /// Non-null wrapper constructor.
    pub non_null: String,
    /// Enum type constructor.
    pub enum_type: String,
    /// Object type constructor.
    pub object_type: String,
}

impl Default for Identifiers {
    fn default() -> Self {
        Self {
            string: "GraphQLString".to_string(),
            int: "GraphQLInt".to_string(),
            float: "GraphQLFloat".to_string(),
            non_null: "GraphQLNonNull".to_string(),
            enum_type: "GraphQLEnumType".to_string(),
            object_type: "GraphQLObjectType".to_string(),
        }
    }
}

/// Options controlling type declaration generation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorOptions {
    /// Description for models, fields and enum values without one.
    pub default_description: String,
    /// Binding style of generated declarations.
    pub declaration_style: DeclarationStyle,
    /// Handling of unrecognised field types.
    pub unknown_types: UnknownTypePolicy,
    /// Framework identifier names.
    pub identifiers: Identifiers,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            default_description: DEFAULT_DESCRIPTION.to_string(),
            declaration_style: DeclarationStyle::default(),
            unknown_types: UnknownTypePolicy::default(),
            identifiers: Identifiers::default(),
        }
    }
}

impl GeneratorOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default description.
    #[must_use]
    pub fn with_default_description(mut self, description: impl Into<String>) -> Self {
        self.default_description = description.into();
        self
    }

    /// Sets the declaration style.
    #[must_use]
    pub fn with_declaration_style(mut self, style: DeclarationStyle) -> Self {
        self.declaration_style = style;
        self
    }

    /// Sets the unknown type policy.
    #[must_use]
    pub fn with_unknown_types(mut self, policy: UnknownTypePolicy) -> Self {
        self.unknown_types = policy;
        self
    }

    /// Sets the framework identifiers.
    #[must_use]
    pub fn with_identifiers(mut self, identifiers: Identifiers) -> Self {
        self.identifiers = identifiers;
        self
    }

    /// Returns `description`, or the default description when it is absent
    /// or empty.
    #[must_use]
    pub fn describe<'a>(&'a self, description: Option<&'a str>) -> &'a str {
        description
            .filter(|d| !d.is_empty())
            .unwrap_or(&self.default_description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GeneratorOptions::default();
        assert_eq!(options.default_description, DEFAULT_DESCRIPTION);
        assert_eq!(options.declaration_style, DeclarationStyle::Mutable);
        assert_eq!(options.unknown_types, UnknownTypePolicy::Reject);
        assert_eq!(options.identifiers.string, "GraphQLString");
        assert_eq!(options.identifiers.object_type, "GraphQLObjectType");
    }

    #[test]
    fn test_declaration_style_kind() {
        assert_eq!(DeclarationStyle::Mutable.kind(), DeclarationKind::Var);
        assert_eq!(DeclarationStyle::Immutable.kind(), DeclarationKind::Const);
    }

    #[test]
    fn test_describe_falls_back() {
        let options = GeneratorOptions::new().with_default_description("n/a");
        assert_eq!(options.describe(Some("Email address")), "Email address");
        assert_eq!(options.describe(None), "n/a");
        assert_eq!(options.describe(Some("")), "n/a");
    }

    #[test]
    fn test_builder_setters() {
        let options = GeneratorOptions::new()
            .with_declaration_style(DeclarationStyle::Immutable)
            .with_unknown_types(UnknownTypePolicy::Permissive)
            .with_identifiers(Identifiers {
                int: "Int".to_string(),
                ..Identifiers::default()
            });
        assert_eq!(options.declaration_style, DeclarationStyle::Immutable);
        assert_eq!(options.unknown_types, UnknownTypePolicy::Permissive);
        assert_eq!(options.identifiers.int, "Int");
        assert_eq!(options.identifiers.float, "GraphQLFloat");
    }

    #[test]
    fn test_deserialize_partial() {
        let options: GeneratorOptions = serde_json::from_str(
            r#"{
                "defaultDescription": "Undocumented",
                "declarationStyle": "immutable",
                "identifiers": { "nonNull": "NonNull" }
            }"#,
        )
        .expect("deserialize");

        assert_eq!(options.default_description, "Undocumented");
        assert_eq!(options.declaration_style, DeclarationStyle::Immutable);
        assert_eq!(options.unknown_types, UnknownTypePolicy::Reject);
        assert_eq!(options.identifiers.non_null, "NonNull");
        assert_eq!(options.identifiers.string, "GraphQLString");
    }
}
