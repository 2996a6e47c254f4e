//! Structural expansion of objects into declarations.

use super::ir::{FieldDeclaration, TypeDeclaration, TypeDescriptor};
use super::naming::to_pascal_case;
use crate::{GenerateError, GenerateResult, SchemaValue, infer};

/// Emit a declaration named `name` from an object value.
///
/// Fields follow the byte order of their keys. An object-valued field, or an
/// array whose first element is an object, becomes a reference to a nested
/// declaration named after the normalized field key; that declaration is
/// built recursively and appended to [`TypeDeclaration::nested`] in field
/// order. Every other field is typed by [`infer`].
///
/// Fails with [`GenerateError::UnsupportedRootKind`] when `value` is not an
/// object.
pub fn emit(name: &str, value: &SchemaValue) -> GenerateResult<TypeDeclaration> {
    let entries = value
        .as_object()
        .ok_or(GenerateError::UnsupportedRootKind { kind: value.kind() })?;

    let mut declaration = TypeDeclaration::new(name);

    for (key, field_value) in entries {
        let identifier_name = to_pascal_case(key);

        let ty = match field_value {
            SchemaValue::Object(_) => {
                declaration
                    .nested
                    .push(emit(&identifier_name, field_value)?);
                TypeDescriptor::nested(identifier_name.as_str())
            }
            SchemaValue::Array(items) => match items.first() {
                Some(first @ SchemaValue::Object(_)) => {
                    declaration.nested.push(emit(&identifier_name, first)?);
                    TypeDescriptor::list_of(TypeDescriptor::nested(identifier_name.as_str()))
                }
                _ => infer(field_value),
            },
            _ => infer(field_value),
        };

        declaration.fields.push(FieldDeclaration {
            original_key: key.clone(),
            identifier_name,
            ty,
        });
    }

    tracing::trace!(
        declaration = name,
        fields = declaration.fields.len(),
        nested = declaration.nested.len(),
        "emitted declaration"
    );

    Ok(declaration)
}

/// Names that appear on more than one declaration in the flattened tree.
///
/// Distinct keys such as `user` and `User` normalize to the same
/// identifier; the emitter keeps both declarations.
pub fn duplicate_names(root: &TypeDeclaration) -> Vec<&str> {
    let mut seen = std::collections::BTreeMap::<&str, usize>::new();
    for declaration in root.flatten() {
        *seen.entry(declaration.name.as_str()).or_default() += 1;
    }
    seen.into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name)
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::codegen::PrimitiveKind;
    use crate::ValueKind;

    fn emit_json(input: &str) -> GenerateResult<TypeDeclaration> {
        emit("Root", &SchemaValue::parse(input).unwrap())
    }

    fn field_summary(declaration: &TypeDeclaration) -> Vec<(&str, &TypeDescriptor)> {
        declaration
            .fields
            .iter()
            .map(|f| (f.identifier_name.as_str(), &f.ty))
            .collect()
    }

    #[test]
    fn emit___empty_object___has_no_fields_or_nested() {
        let declaration = emit_json("{}").unwrap();

        assert_eq!(declaration.name, "Root");
        assert!(declaration.fields.is_empty());
        assert!(declaration.nested.is_empty());
    }

    #[test]
    fn emit___nested_object___hoists_declaration_named_after_key() {
        let declaration = emit_json(
            r#"{"user":{"name":"John","email":"e@x.com"},"posts":["post1","post2"]}"#,
        )
        .unwrap();

        assert_eq!(
            field_summary(&declaration),
            vec![
                (
                    "Posts",
                    &TypeDescriptor::list_of(TypeDescriptor::Primitive(PrimitiveKind::String))
                ),
                ("User", &TypeDescriptor::nested("User")),
            ]
        );
        assert_eq!(declaration.nested.len(), 1);
        let user = &declaration.nested[0];
        assert_eq!(user.name, "User");
        assert_eq!(
            field_summary(user),
            vec![
                ("Email", &TypeDescriptor::Primitive(PrimitiveKind::String)),
                ("Name", &TypeDescriptor::Primitive(PrimitiveKind::String)),
            ]
        );
    }

    #[test]
    fn emit___array_of_objects___uses_first_element_only() {
        let declaration =
            emit_json(r#"{"users":[{"name":"John","age":30},{"nickname":"J","age":1.5}]}"#)
                .unwrap();

        assert_eq!(
            declaration.fields[0].ty,
            TypeDescriptor::list_of(TypeDescriptor::nested("Users"))
        );
        let users = &declaration.nested[0];
        assert_eq!(
            field_summary(users),
            vec![
                ("Age", &TypeDescriptor::Primitive(PrimitiveKind::Integer)),
                ("Name", &TypeDescriptor::Primitive(PrimitiveKind::String)),
            ]
        );
    }

    #[test]
    fn emit___empty_array___is_list_of_any_without_nested() {
        let declaration = emit_json(r#"{"items": []}"#).unwrap();

        assert_eq!(
            declaration.fields[0].ty,
            TypeDescriptor::list_of(TypeDescriptor::Primitive(PrimitiveKind::Any))
        );
        assert!(declaration.nested.is_empty());
    }

    #[test]
    fn emit___keeps_original_key_as_serialization_tag() {
        let declaration = emit_json(r#"{"user_name": "x"}"#).unwrap();

        let field = &declaration.fields[0];
        assert_eq!(field.identifier_name, "UserName");
        assert_eq!(field.serialization_tag(), "user_name");
    }

    #[test]
    fn emit___nested_declarations___follow_field_order_depth_first() {
        let declaration = emit_json(
            r#"{"b": {"inner": {"x": 1}}, "a": {"y": true}, "c": [{"z": null}]}"#,
        )
        .unwrap();

        let names: Vec<&str> = declaration
            .flatten()
            .iter()
            .map(|d| d.name.as_str())
            .collect();

        assert_eq!(names, vec!["Root", "A", "B", "Inner", "C"]);
    }

    #[test]
    fn emit___non_object_root___returns_unsupported_root_kind() {
        let result = emit_json(r#"[{"a": 1}]"#);

        assert_eq!(
            result,
            Err(GenerateError::UnsupportedRootKind {
                kind: ValueKind::Array
            })
        );
    }

    #[test]
    fn emit___scalar_root___returns_unsupported_root_kind() {
        let result = emit_json("42");

        assert!(matches!(
            result,
            Err(GenerateError::UnsupportedRootKind {
                kind: ValueKind::Number
            })
        ));
    }

    #[test]
    fn duplicate_names___colliding_keys___are_reported_and_kept() {
        let declaration = emit_json(r#"{"User": {"a": 1}, "user": {"b": 2}}"#).unwrap();

        assert_eq!(declaration.nested.len(), 2);
        assert_eq!(duplicate_names(&declaration), vec!["User"]);
    }

    #[test]
    fn duplicate_names___distinct_names___is_empty() {
        let declaration = emit_json(r#"{"a": {}, "b": {}}"#).unwrap();

        assert!(duplicate_names(&declaration).is_empty());
    }
}
