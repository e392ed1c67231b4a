//! Catalog module
//!
//! Node type descriptors, categories, and the ordered registry the add menu
//! is built from.

pub mod builtin;
pub mod descriptor;
pub mod registry;

pub use builtin::{builtin_catalog, DEFAULT_TREE_TYPE};
pub use descriptor::{CatalogEntry, Category, CategoryEntry, NodeSetting, NodeTypeDescriptor};
pub use registry::NodeTypeRegistry;
