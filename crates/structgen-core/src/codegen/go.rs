//! Go struct generation from declarations.

use super::ir::{PrimitiveKind, TypeDeclaration, TypeDescriptor};

/// Name given to the root struct.
pub const DEFAULT_ROOT_NAME: &str = "GeneratedStruct";

/// Generate Go structs for a declaration tree.
///
/// The root struct comes first, followed by every nested struct in
/// depth-first order. Structs are separated by a blank line and the output
/// has no trailing newline.
pub fn generate_go(root: &TypeDeclaration) -> String {
    root.flatten()
        .into_iter()
        .map(generate_go_struct)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Generate a single Go struct with `json` tags.
fn generate_go_struct(declaration: &TypeDeclaration) -> String {
    let mut code = format!("type {} struct {{\n", declaration.name);

    for field in &declaration.fields {
        code.push_str(&format!(
            "\t{} {} {}\n",
            field.identifier_name,
            map_type_to_go(&field.ty),
            struct_tag(field.serialization_tag())
        ));
    }

    code.push('}');
    code
}

/// Map an inferred type to a Go type.
fn map_type_to_go(ty: &TypeDescriptor) -> String {
    match ty {
        TypeDescriptor::Primitive(kind) => match kind {
            PrimitiveKind::Boolean => "bool",
            PrimitiveKind::Integer => "int",
            PrimitiveKind::Float => "float64",
            PrimitiveKind::String => "string",
            PrimitiveKind::Any => "interface{}",
            PrimitiveKind::AnyObject => "map[string]interface{}",
        }
        .to_string(),
        TypeDescriptor::ListOf(inner) => format!("[]{}", map_type_to_go(inner)),
        TypeDescriptor::NestedReference(name) => name.clone(),
    }
}

/// Render the `json` struct tag for a key.
///
/// Tags are raw string literals unless the tag holds a backtick or a carriage
/// return, which a raw literal cannot carry; those get an interpreted literal.
fn struct_tag(key: &str) -> String {
    let tag = format!("json:\"{}\"", escape_tag_value(key));
    if tag.contains(['`', '\r']) {
        quote_go_string(&tag)
    } else {
        format!("`{tag}`")
    }
}

/// Escape a key for use inside a quoted struct tag value.
fn escape_tag_value(key: &str) -> String {
    key.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Quote `s` as a Go interpreted string literal.
fn quote_go_string(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
