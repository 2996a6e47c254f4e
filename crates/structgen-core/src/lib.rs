//! structgen-core - Type inference and declaration emission
//!
//! This crate turns an example JSON document into source-code type
//! declarations:
//! - [`SchemaValue`] is the decoded input
//! - [`infer`] assigns a [`TypeDescriptor`] to a single value
//! - [`codegen::emit`] walks an object into a [`TypeDeclaration`] tree
//! - [`Registry`] maps generator names to built-in or script generators
//!
//! # Example
//!
//! ```
//! use structgen_core::Registry;
//!
//! let registry = Registry::with_builtins();
//! let code = registry.generate("go-struct", r#"{"id": 1}"#).unwrap();
//!
//! assert_eq!(code, "type GeneratedStruct struct {\n\tId int `json:\"id\"`\n}");
//! ```

pub mod codegen;
mod error;
mod generator;
mod infer;
mod registry;
mod script;
mod value;

pub use codegen::{FieldDeclaration, PrimitiveKind, TypeDeclaration, TypeDescriptor};
pub use error::{GenerateError, GenerateResult};
pub use generator::{BuiltinGenerator, GeneratorBehavior, GeneratorDescriptor, Target};
pub use infer::infer;
pub use registry::Registry;
pub use script::{DEFAULT_INTERPRETERS, ScriptGenerator};
pub use value::{SchemaValue, ValueKind};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        GenerateError, GenerateResult, GeneratorBehavior, GeneratorDescriptor, Registry,
        SchemaValue, Target, TypeDeclaration, TypeDescriptor,
    };
}
