//! Node-construction interface.
//!
//! The generator never names concrete node types. It asks a [`NodeBuilder`]
//! for identifiers, literals, object expressions, constructor calls and
//! declarations, so any syntax-tree library can sit behind it.

use crate::ast::{
    DeclarationKind, Expression, Identifier, Literal, LiteralValue, NewExpression,
    ObjectExpression, Property, VariableDeclaration,
};

/// Constructs syntax nodes on behalf of the generator.
pub trait NodeBuilder {
    /// Expression node type.
    type Expr;
    /// Object property node type.
    type Prop;
    /// Top-level declaration node type.
    type Decl;

    /// Builds an identifier reference.
    fn identifier(&self, name: &str) -> Self::Expr;

    /// Builds a literal constant.
    fn literal(&self, value: LiteralValue) -> Self::Expr;

    /// Builds an `init` property `key: value`.
    fn property(&self, key: &str, value: Self::Expr) -> Self::Prop;

    /// Builds an object literal from properties in order.
    fn object(&self, properties: Vec<Self::Prop>) -> Self::Expr;

    /// Builds `new callee(arguments...)`.
    fn new_expression(&self, callee: &str, arguments: Vec<Self::Expr>) -> Self::Expr;

    /// Builds a single-binding variable declaration.
    fn variable(&self, kind: DeclarationKind, name: &str, init: Self::Expr) -> Self::Decl;
}

/// Builder producing owned ESTree nodes from [`crate::ast`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EstreeBuilder;

impl EstreeBuilder {
    /// Creates a new ESTree builder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl NodeBuilder for EstreeBuilder {
    type Expr = Expression;
    type Prop = Property;
    type Decl = VariableDeclaration;

    fn identifier(&self, name: &str) -> Expression {
        Expression::Identifier(Identifier::new(name))
    }

    fn literal(&self, value: LiteralValue) -> Expression {
        Expression::Literal(Literal { value })
    }

    fn property(&self, key: &str, value: Expression) -> Property {
        Property::init(key, value)
    }

    fn object(&self, properties: Vec<Property>) -> Expression {
        Expression::Object(ObjectExpression { properties })
    }

    fn new_expression(&self, callee: &str, arguments: Vec<Expression>) -> Expression {
        Expression::New(NewExpression {
            callee: Identifier::new(callee),
            arguments,
        })
    }

    fn variable(&self, kind: DeclarationKind, name: &str, init: Expression) -> VariableDeclaration {
        VariableDeclaration::single(kind, name, init)
    }
}
