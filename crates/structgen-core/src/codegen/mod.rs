//! Declaration generation from example values.
//!
//! # Architecture
//!
//! Generation is a two-stage pipeline:
//!
//! ```text
//! JSON text
//!     ↓
//!  [SchemaValue::parse]
//!     ↓
//!  [emit] → TypeDeclaration tree
//!     ↓
//!  ├─→ [Go generator] → type X struct { ... }
//!  └─→ [TypeScript generator] → export interface X { ... }
//! ```
//!
//! The tree is built once per call and owned by that call; renderers only
//! read it, so adding a target language never touches inference.
//!
//! # Usage
//!
//! ```rust
//! use structgen_core::SchemaValue;
//! use structgen_core::codegen::{emit, generate_go};
//!
//! let value = SchemaValue::parse(r#"{"user": {"name": "John"}}"#).unwrap();
//! let tree = emit("Root", &value).unwrap();
//!
//! assert_eq!(tree.flatten().len(), 2);
//! println!("{}", generate_go(&tree));
//! ```
//!
//! # See Also
//!
//! - [`ir`] module for the intermediate representation
//! - [`naming`] module for identifier normalization

pub mod emitter;
pub mod go;
pub mod ir;
pub mod naming;
pub mod typescript;

pub use emitter::{duplicate_names, emit};
pub use go::generate_go;
pub use ir::{FieldDeclaration, PrimitiveKind, TypeDeclaration, TypeDescriptor};
pub use typescript::generate_typescript;
