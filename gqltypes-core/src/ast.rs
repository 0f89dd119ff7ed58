//! ESTree syntax nodes.
//!
//! Only the node kinds needed to express GraphQL type declarations are
//! modelled:
//! - [`Identifier`] and [`Literal`] leaves
//! - [`ObjectExpression`] with `init` [`Property`] entries
//! - [`NewExpression`] for constructor calls
//! - [`VariableDeclaration`] for the top-level binding
//!
//! Every node serializes to the ESTree JSON shape (`{"type": "...", ...}`)
//! so that any ESTree printer can render it.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Identifier node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// Identifier name.
    pub name: String,
}

impl Identifier {
    /// Creates a new identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the identifier name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut node = serializer.serialize_struct("Identifier", 2)?;
        node.serialize_field("type", "Identifier")?;
        node.serialize_field("name", &self.name)?;
        node.end()
    }
}

/// Primitive constant carried by a [`Literal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    /// String constant.
    String(String),
    /// Integer constant.
    Integer(i64),
    /// Integer constant above `i64::MAX`.
    Unsigned(u64),
    /// Floating point constant.
    Float(f64),
    /// Boolean constant.
    Boolean(bool),
    /// `null`.
    Null,
}

impl LiteralValue {
    /// Returns the string value, if this is a string literal.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u64> for LiteralValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Unsigned(value), Self::Integer)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Literal node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Literal {
    /// Constant value.
    pub value: LiteralValue,
}

/// Property kind. Only plain initializers are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PropertyKind {
    /// `key: value`
    #[default]
    #[serde(rename = "init")]
    Init,
}

/// Object property node (`key: value`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Property {
    /// Property key.
    pub key: Identifier,
    /// Property value.
    pub value: Expression,
    /// Property kind.
    pub kind: PropertyKind,
}

impl Property {
    /// Creates an `init` property.
    #[must_use]
    pub fn init(key: impl Into<String>, value: Expression) -> Self {
        Self {
            key: Identifier::new(key),
            value,
            kind: PropertyKind::Init,
        }
    }
}

/// Object literal node.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ObjectExpression {
    /// Properties in source order.
    pub properties: Vec<Property>,
}

impl ObjectExpression {
    /// Returns the value of the first property with the given key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Expression> {
        self.properties
            .iter()
            .find(|p| p.key.name == key)
            .map(|p| &p.value)
    }

    /// Returns the property keys in source order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|p| p.key.as_str())
    }

    /// Returns the number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if the object has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Constructor call node (`new Callee(args...)`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewExpression {
    /// Constructor identifier.
    pub callee: Identifier,
    /// Call arguments.
    pub arguments: Vec<Expression>,
}

/// Expression node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expression {
    /// Bare identifier.
    #[serde(serialize_with = "serialize_identifier_fields")]
    Identifier(Identifier),
    /// Literal constant.
    Literal(Literal),
    /// Object literal.
    #[serde(rename = "ObjectExpression")]
    Object(ObjectExpression),
    /// Constructor call.
    #[serde(rename = "NewExpression")]
    New(NewExpression),
}

/// Serializes the body of an identifier variant. The enum tag already
/// supplies `"type": "Identifier"`.
fn serialize_identifier_fields<S: Serializer>(
    identifier: &Identifier,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut node = serializer.serialize_struct("Identifier", 1)?;
    node.serialize_field("name", &identifier.name)?;
    node.end()
}

impl Expression {
    /// Returns the identifier name, if this is an identifier.
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Self::Identifier(id) => Some(id.as_str()),
            _ => None,
        }
    }

    /// Returns the literal value, if this is a literal.
    #[must_use]
    pub fn as_literal(&self) -> Option<&LiteralValue> {
        match self {
            Self::Literal(lit) => Some(&lit.value),
            _ => None,
        }
    }

    /// Returns the object expression, if this is one.
    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectExpression> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Returns the constructor call, if this is one.
    #[must_use]
    pub fn as_new(&self) -> Option<&NewExpression> {
        match self {
            Self::New(new) => Some(new),
            _ => None,
        }
    }
}

/// Binding keyword of a [`VariableDeclaration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    /// `var` (reassignable).
    #[default]
    Var,
    /// `const` (single assignment).
    Const,
}

impl DeclarationKind {
    /// Returns the keyword as written in source.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Const => "const",
        }
    }
}

/// Single `id = init` binding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableDeclarator {
    /// Bound name.
    pub id: Identifier,
    /// Initializer.
    pub init: Option<Expression>,
}

/// Variable declaration statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableDeclaration {
    /// Binding keyword.
    pub kind: DeclarationKind,
    /// Declarators in source order.
    pub declarations: Vec<VariableDeclarator>,
}

impl VariableDeclaration {
    /// Creates a declaration with a single initialized binding.
    #[must_use]
    pub fn single(kind: DeclarationKind, name: impl Into<String>, init: Expression) -> Self {
        Self {
            kind,
            declarations: vec![VariableDeclarator {
                id: Identifier::new(name),
                init: Some(init),
            }],
        }
    }

    /// Returns the name of the first binding.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.declarations.first().map(|d| d.id.as_str())
    }

    /// Returns the initializer of the first binding.
    #[must_use]
    pub fn init(&self) -> Option<&Expression> {
        self.declarations.first().and_then(|d| d.init.as_ref())
    }
}
