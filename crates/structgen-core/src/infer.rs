//! Scalar type inference for single values

use crate::codegen::{PrimitiveKind, TypeDescriptor};
use crate::SchemaValue;

/// Infer the type of a single value.
///
/// Arrays are typed by their first element only. Objects reaching this
/// function were not expanded structurally and fall back to
/// [`PrimitiveKind::AnyObject`]; field-level objects are handled by
/// [`codegen::emit`](crate::codegen::emit) instead.
pub fn infer(value: &SchemaValue) -> TypeDescriptor {
    match value {
        SchemaValue::Null => TypeDescriptor::Primitive(PrimitiveKind::Any),
        SchemaValue::Bool(_) => TypeDescriptor::Primitive(PrimitiveKind::Boolean),
        SchemaValue::Number(_) if value.is_integral() => {
            TypeDescriptor::Primitive(PrimitiveKind::Integer)
        }
        SchemaValue::Number(_) => TypeDescriptor::Primitive(PrimitiveKind::Float),
        SchemaValue::String(_) => TypeDescriptor::Primitive(PrimitiveKind::String),
        SchemaValue::Array(items) => match items.first() {
            None => TypeDescriptor::list_of(TypeDescriptor::Primitive(PrimitiveKind::Any)),
            Some(first) => TypeDescriptor::list_of(infer(first)),
        },
        SchemaValue::Object(_) => TypeDescriptor::Primitive(PrimitiveKind::AnyObject),
    }
}
