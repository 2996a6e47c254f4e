//! Intermediate representation for emitted declarations.
//!
//! The emitter builds this tree once; each renderer ([`go`](super::go),
//! [`typescript`](super::typescript)) turns it into text without looking at
//! the original input again.
//!
//! # Structure
//!
//! - [`TypeDeclaration`]: one named type with ordered fields and the
//!   declarations hoisted out of its fields
//! - [`FieldDeclaration`]: a field with its original key and inferred type
//! - [`TypeDescriptor`]: the inferred type of a single value
//!
//! # Limitations
//!
//! - No unions or optionals: mixed arrays take their first element's type
//! - Declaration names are not deduplicated

/// Scalar kinds a value can infer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Boolean,
    Integer,
    Float,
    String,

    /// No information (null, empty array element).
    Any,

    /// `any` reached from an object that was not expanded structurally.
    AnyObject,
}

/// The inferred type of a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// A scalar type.
    Primitive(PrimitiveKind),

    /// A homogeneous list.
    ListOf(Box<TypeDescriptor>),

    /// Reference to a declaration emitted alongside the parent.
    NestedReference(String),
}

impl TypeDescriptor {
    /// Wrap a type in a list
    pub fn list_of(inner: TypeDescriptor) -> Self {
        TypeDescriptor::ListOf(Box::new(inner))
    }

    /// Reference a nested declaration by name
    pub fn nested(name: impl Into<String>) -> Self {
        TypeDescriptor::NestedReference(name.into())
    }
}

/// A field in a type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    /// Key as written in the input.
    pub original_key: String,

    /// Normalized identifier used in generated code.
    pub identifier_name: String,

    /// Inferred field type.
    pub ty: TypeDescriptor,
}

impl FieldDeclaration {
    /// The tag used to map the field back to the input key.
    pub fn serialization_tag(&self) -> &str {
        &self.original_key
    }
}

/// A named type with its fields and hoisted nested declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    /// Declaration name.
    pub name: String,

    /// Fields in lexicographic order of their original keys.
    pub fields: Vec<FieldDeclaration>,

    /// Declarations produced while building the fields, in field order.
    pub nested: Vec<TypeDeclaration>,
}

impl TypeDeclaration {
    /// Create an empty declaration
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// All declarations in output order: this one first, then each nested
    /// declaration followed by its own nested declarations.
    pub fn flatten(&self) -> Vec<&TypeDeclaration> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a TypeDeclaration>) {
        out.push(self);
        for nested in &self.nested {
            nested.collect_into(out);
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    fn decl(name: &str, nested: Vec<TypeDeclaration>) -> TypeDeclaration {
        TypeDeclaration {
            name: name.to_string(),
            fields: Vec::new(),
            nested,
        }
    }

    #[test]
    fn flatten___orders_depth_first_pre_order() {
        let tree = decl(
            "Root",
            vec![
                decl("A", vec![decl("A1", vec![]), decl("A2", vec![])]),
                decl("B", vec![]),
            ],
        );

        let names: Vec<&str> = tree.flatten().iter().map(|d| d.name.as_str()).collect();

        assert_eq!(names, vec!["Root", "A", "A1", "A2", "B"]);
    }

    #[test]
    fn flatten___single_declaration___returns_itself() {
        let tree = TypeDeclaration::new("Root");

        assert_eq!(tree.flatten().len(), 1);
    }

    #[test]
    fn serialization_tag___is_original_key() {
        let field = FieldDeclaration {
            original_key: "user_name".to_string(),
            identifier_name: "UserName".to_string(),
            ty: TypeDescriptor::Primitive(PrimitiveKind::String),
        };

        assert_eq!(field.serialization_tag(), "user_name");
    }
}
