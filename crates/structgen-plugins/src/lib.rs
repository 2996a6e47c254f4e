//! structgen-plugins - Plugin persistence and discovery
//!
//! Custom script plugins are recorded in a JSON file; official scripts are
//! found by scanning a directory. Both are folded, together with the
//! built-in generators, into a [`structgen_core::Registry`].
//!
//! # Plugins File
//!
//! ```text
//! [
//!   {
//!     "name": "rust_struct_gen",
//!     "description": "Custom plugin: rust_struct_gen",
//!     "type": "script",
//!     "path": "/home/me/plugins/rust_struct_gen.py"
//!   }
//! ]
//! ```
//!
//! # Example
//!
//! ```no_run
//! use structgen_plugins::{PluginStore, build_registry};
//!
//! let store = PluginStore::open("/home/me/.structgen/plugins.json");
//! store.add("/home/me/plugins/rust_struct_gen.py")?;
//!
//! let registry = build_registry("plugins/official", &store, None)?;
//! assert!(registry.lookup("rust_struct_gen").is_some());
//! # Ok::<(), structgen_plugins::StoreError>(())
//! ```

mod catalog;
mod discovery;
mod error;
mod store;

pub use catalog::{build_registry, list_plugins};
pub use discovery::discover_scripts;
pub use error::StoreError;
pub use store::{PluginInfo, PluginKind, PluginStore};

/// Result type for plugin store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Extension of script files picked up by discovery.
pub const SCRIPT_EXTENSION: &str = "py";
