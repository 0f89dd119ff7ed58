//! End-to-end generation tests.

use gqltypes::prelude::*;
use std::sync::Once;

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

const SCHEMA: &str = r#"{
    "models": {
        "User": {
            "name": "User",
            "description": "A registered user",
            "fields": {
                "id": { "name": "id", "type": "integer", "isNullable": false },
                "owner": { "name": "owner", "type": "string", "isNullable": true },
                "ownerId": { "name": "ownerId", "type": "integer", "isNullable": true },
                "rating": { "name": "rating", "type": "float", "isNullable": false },
                "status": {
                    "name": "status",
                    "type": "enum",
                    "isNullable": false,
                    "values": {
                        "active": { "value": 1 },
                        "inactive": { "value": 0, "description": "Locked out" }
                    }
                }
            },
            "references": { "ownerId": { "name": "User" } }
        },
        "Category": {
            "name": "Category",
            "fields": {
                "id": { "name": "id", "type": "integer", "isNullable": false },
                "name": { "name": "name", "type": "string", "description": "Display name" },
                "parentId": { "name": "parentId", "type": "integer" }
            },
            "references": { "parentId": "Category" }
        }
    }
}"#;

fn options() -> GeneratorOptions {
    GeneratorOptions::default().with_default_description("Undocumented")
}

fn fields_of<'a>(types: &'a GeneratedTypes, model: &str) -> &'a gqltypes::core::ObjectExpression {
    types[model]
        .ast
        .init()
        .and_then(Expression::as_new)
        .and_then(|new| new.arguments.first())
        .and_then(Expression::as_object)
        .and_then(|decl| decl.get("fields"))
        .and_then(Expression::as_object)
        .expect("fields object")
}

fn field<'a>(
    fields: &'a gqltypes::core::ObjectExpression,
    name: &str,
) -> &'a gqltypes::core::ObjectExpression {
    fields
        .get(name)
        .and_then(Expression::as_object)
        .unwrap_or_else(|| panic!("field '{name}'"))
}

fn string(value: &str) -> LiteralValue {
    LiteralValue::String(value.to_string())
}

#[test]
fn test_one_entry_per_model() {
    init_tracing();
    let types = generate_from_json(SCHEMA, &options()).expect("generate");
    assert_eq!(types.keys().collect::<Vec<_>>(), vec!["User", "Category"]);
}

#[test]
fn test_missing_descriptions_use_default() {
    init_tracing();
    let types = generate_from_json(SCHEMA, &options()).expect("generate");
    let fields = fields_of(&types, "Category");

    assert_eq!(
        field(fields, "id").get("description").and_then(Expression::as_literal),
        Some(&string("Undocumented"))
    );
    assert_eq!(
        field(fields, "name").get("description").and_then(Expression::as_literal),
        Some(&string("Display name"))
    );
}

#[test]
fn test_non_null_wrapping() {
    init_tracing();
    let types = generate_from_json(SCHEMA, &options()).expect("generate");
    let fields = fields_of(&types, "User");

    let rating = field(fields, "rating")
        .get("type")
        .and_then(Expression::as_new)
        .expect("non-null wrapper");
    assert_eq!(rating.callee.as_str(), "GraphQLNonNull");
    assert_eq!(rating.arguments[0].as_identifier(), Some("GraphQLFloat"));

    assert_eq!(
        field(fields, "owner").get("type").and_then(Expression::as_identifier),
        Some("GraphQLString")
    );
}

#[test]
fn test_parent_reference() {
    init_tracing();
    let types = generate_from_json(SCHEMA, &options()).expect("generate");
    let fields = fields_of(&types, "Category");

    assert_eq!(
        fields.keys().collect::<Vec<_>>(),
        vec!["id", "name", "parentId", "parent"]
    );
    let parent = field(fields, "parent");
    assert_eq!(
        parent.get("type").and_then(Expression::as_identifier),
        Some("CategoryType")
    );
    let description = parent
        .get("description")
        .and_then(Expression::as_literal)
        .and_then(LiteralValue::as_str)
        .expect("description");
    assert!(description.ends_with(" (parent Category)"));
}

#[test]
fn test_colliding_reference_gets_ref_suffix() {
    init_tracing();
    let types = generate_from_json(SCHEMA, &options()).expect("generate");
    let fields = fields_of(&types, "User");

    assert_eq!(
        fields.keys().collect::<Vec<_>>(),
        vec!["id", "owner", "ownerId", "ownerRef", "rating", "status"]
    );
    assert_eq!(
        field(fields, "ownerRef").get("description").and_then(Expression::as_literal),
        Some(&string("Undocumented (reference)"))
    );
}

#[test]
fn test_enum_entries() {
    init_tracing();
    let types = generate_from_json(SCHEMA, &options()).expect("generate");
    let fields = fields_of(&types, "User");

    let status = field(fields, "status")
        .get("type")
        .and_then(Expression::as_new)
        .expect("enum type");
    assert_eq!(status.callee.as_str(), "GraphQLEnumType");

    let values = status.arguments[0]
        .as_object()
        .and_then(|decl| decl.get("values"))
        .and_then(Expression::as_object)
        .expect("values");
    assert_eq!(values.keys().collect::<Vec<_>>(), vec!["ACTIVE", "INACTIVE"]);
    assert_eq!(
        field(values, "ACTIVE").get("value").and_then(Expression::as_literal),
        Some(&LiteralValue::Integer(1))
    );
    assert_eq!(
        field(values, "INACTIVE").get("value").and_then(Expression::as_literal),
        Some(&LiteralValue::Integer(0))
    );
}

#[test]
fn test_imports_are_unique() {
    init_tracing();
    let types = generate_from_json(SCHEMA, &options()).expect("generate");

    assert_eq!(
        types["User"].imports.to_vec(),
        vec![
            "GraphQLInt",
            "GraphQLNonNull",
            "GraphQLString",
            "UserType",
            "GraphQLFloat",
            "GraphQLEnumType",
        ]
    );
    for generated in types.values() {
        let mut names = generated.imports.to_vec();
        let before = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), before);
        assert!(!generated.imports.is_empty());
    }
}

#[test]
fn test_idempotent() {
    init_tracing();
    let first = generate_from_json(SCHEMA, &options()).expect("generate");
    let second = generate_from_json(SCHEMA, &options()).expect("generate");
    assert_eq!(first, second);
}

#[test]
fn test_immutable_declarations_serialize_as_const() {
    init_tracing();
    let options = options().with_declaration_style(DeclarationStyle::Immutable);
    let types = generate_from_json(SCHEMA, &options).expect("generate");

    let json = serde_json::to_value(&types["Category"].ast).expect("serialize");
    assert_eq!(json["type"], "VariableDeclaration");
    assert_eq!(json["kind"], "const");
    assert_eq!(json["declarations"][0]["id"]["name"], "CategoryType");
    assert_eq!(json["declarations"][0]["init"]["callee"]["name"], "GraphQLObjectType");
}

#[test]
fn test_unknown_type_policies() {
    init_tracing();
    let json = r#"{"models": {"Event": {"fields": {"at": {"type": "timestamp", "isNullable": false}}}}}"#;

    let err = generate_from_json(json, &options()).unwrap_err();
    assert!(matches!(err, CodegenError::UnknownType { ref type_name, .. } if type_name == "timestamp"));

    let permissive = options().with_unknown_types(UnknownTypePolicy::Permissive);
    let types = generate_from_json(json, &permissive).expect("generate");
    assert_eq!(types["Event"].imports.to_vec(), vec!["GraphQLNonNull"]);
}

#[test]
fn test_models_sharing_a_name_stay_separate() {
    init_tracing();
    let json = r#"{"models": {
        "A": {"name": "Shared", "fields": {"id": {"type": "integer"}}},
        "B": {"name": "Shared", "fields": {"id": {"type": "string"}}}
    }}"#;
    let types = generate_from_json(json, &options()).expect("generate");

    assert_eq!(types.len(), 2);
    assert_eq!(types.keys().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(
        field(fields_of(&types, "B"), "id").get("type").and_then(Expression::as_identifier),
        Some("GraphQLString")
    );
}

#[test]
fn test_reference_on_renamed_field() {
    init_tracing();
    let json = r#"{"models": {
        "User": {"fields": {"id": {"type": "integer"}}},
        "Post": {
            "fields": {"author_id": {"name": "authorId", "type": "integer"}},
            "references": {"author_id": "User"}
        }
    }}"#;
    let types = generate_from_json(json, &options()).expect("generate");
    let fields = fields_of(&types, "Post");

    assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["authorId", "author_idRef"]);
    assert_eq!(
        field(fields, "author_idRef").get("type").and_then(Expression::as_identifier),
        Some("UserType")
    );
}
