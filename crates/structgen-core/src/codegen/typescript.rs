//! TypeScript interface generation from declarations.

use super::ir::{PrimitiveKind, TypeDeclaration, TypeDescriptor};
use super::naming::is_identifier;

/// Name given to the root interface.
pub const DEFAULT_ROOT_NAME: &str = "GeneratedInterface";

/// Generate TypeScript interfaces for a declaration tree.
///
/// Properties keep the original input keys, quoted when they are not valid
/// identifiers, so the interfaces describe the JSON as-is.
pub fn generate_typescript(root: &TypeDeclaration) -> String {
    root.flatten()
        .into_iter()
        .map(generate_interface)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn generate_interface(declaration: &TypeDeclaration) -> String {
    let mut lines = vec![format!("export interface {} {{", declaration.name)];

    for field in &declaration.fields {
        lines.push(format!(
            "  {}: {};",
            property_name(field.serialization_tag()),
            map_type_to_typescript(&field.ty)
        ));
    }

    lines.push("}".to_string());
    lines.join("\n")
}

fn property_name(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        // JSON string syntax is a valid TS string literal
        serde_json::Value::String(key.to_string()).to_string()
    }
}

fn map_type_to_typescript(ty: &TypeDescriptor) -> String {
    match ty {
        TypeDescriptor::Primitive(kind) => match kind {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Integer | PrimitiveKind::Float => "number",
            PrimitiveKind::String => "string",
            PrimitiveKind::Any => "any",
            PrimitiveKind::AnyObject => "Record<string, any>",
        }
        .to_string(),
        TypeDescriptor::ListOf(inner) => format!("{}[]", map_type_to_typescript(inner)),
        TypeDescriptor::NestedReference(name) => name.clone(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::SchemaValue;
    use crate::codegen::emit;

    fn generate(input: &str) -> String {
        let value = SchemaValue::parse(input).unwrap();
        generate_typescript(&emit(DEFAULT_ROOT_NAME, &value).unwrap())
    }

    #[test]
    fn map_type_to_typescript___numbers_collapse_to_number() {
        let p = TypeDescriptor::Primitive;
        assert_eq!(map_type_to_typescript(&p(PrimitiveKind::Integer)), "number");
        assert_eq!(map_type_to_typescript(&p(PrimitiveKind::Float)), "number");
    }

    #[test]
    fn map_type_to_typescript___handles_lists() {
        let ty = TypeDescriptor::list_of(TypeDescriptor::Primitive(PrimitiveKind::AnyObject));

        assert_eq!(map_type_to_typescript(&ty), "Record<string, any>[]");
    }

    #[test]
    fn property_name___quotes_non_identifiers() {
        assert_eq!(property_name("user_name"), "user_name");
        assert_eq!(property_name("user-name"), "\"user-name\"");
        assert_eq!(property_name("say \"hi\""), r#""say \"hi\"""#);
    }

    #[test]
    fn generate_typescript___nested_object___emits_sibling_interface() {
        let code = generate(r#"{"user":{"name":"John","is-admin":false},"tags":["a"]}"#);

        assert_eq!(
            code,
            "export interface GeneratedInterface {\n  tags: string[];\n  user: User;\n}\n\n\
             export interface User {\n  \"is-admin\": boolean;\n  name: string;\n}"
        );
    }

    #[test]
    fn generate_typescript___array_of_objects___emits_array_of_interface() {
        let code = generate(r#"{"users":[{"age":30}]}"#);

        assert!(code.contains("  users: Users[];\n"));
        assert!(code.ends_with("export interface Users {\n  age: number;\n}"));
    }

    #[test]
    fn generate_typescript___empty_object___emits_empty_interface() {
        assert_eq!(generate("{}"), "export interface GeneratedInterface {\n}");
    }
}
