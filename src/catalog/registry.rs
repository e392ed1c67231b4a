//! Node type registry.
//!
//! An ordered catalog of categories and separators. The add menu is built
//! from it once at startup, so registration order is display order.

use std::collections::HashMap;

use log::{debug, info};

use super::descriptor::{CatalogEntry, Category, CategoryEntry, NodeTypeDescriptor};
use crate::error::{Error, Result};

/// Ordered registry of catalog entries keyed by category key.
///
/// # Example
///
/// ```ignore
/// let mut registry = NodeTypeRegistry::new();
/// registry.register("math_menu", Category::from_pairs("umog_math_menu", "Math", &[("umog_AddNode", "Add")])?)?;
/// registry.push_separator();
///
/// for entry in registry.iter() {
///     println!("{}: {} nodes", entry.key, entry.entry.nodes().len());
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeTypeRegistry {
    /// Entries in registration order.
    entries: Vec<CatalogEntry>,
    /// Map of node type ID to the key of the category listing it.
    node_types: HashMap<String, String>,
}

impl NodeTypeRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a category or separator under `key`.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateCategory`] if `key` is already registered
    /// - [`Error::Configuration`] if the category is malformed
    /// - [`Error::DuplicateNodeType`] if one of its node ids is already listed
    ///   by another category
    ///
    /// Nothing is registered when an error is returned.
    pub fn register(&mut self, key: impl Into<String>, entry: impl Into<CategoryEntry>) -> Result<()> {
        self.register_entry(CatalogEntry::new(key, entry))
    }

    /// Appends a keyed entry. See [`register`](Self::register).
    pub fn register_entry(&mut self, entry: CatalogEntry) -> Result<()> {
        if entry.key.is_empty() {
            return Err(Error::configuration("catalog entry has an empty key"));
        }
        if self.contains(&entry.key) {
            return Err(Error::DuplicateCategory(entry.key));
        }

        if let CategoryEntry::Category(category) = &entry.entry {
            category.validate()?;
            if let Some((id, owner)) = category
                .nodes
                .iter()
                .find_map(|n| self.node_types.get(&n.id).map(|owner| (&n.id, owner)))
            {
                return Err(Error::DuplicateNodeType {
                    id: id.clone(),
                    category: owner.clone(),
                });
            }
            for node in &category.nodes {
                self.node_types.insert(node.id.clone(), entry.key.clone());
            }
            debug!(
                "registered category '{}' ({} node types)",
                entry.key,
                category.nodes.len()
            );
        } else {
            debug!("registered separator '{}'", entry.key);
        }

        self.entries.push(entry);
        Ok(())
    }

    /// Appends a separator under a generated key and returns the key.
    pub fn push_separator(&mut self) -> String {
        let key = (1..)
            .map(|n| format!("separator_{}", n))
            .find(|key| !self.contains(key))
            .unwrap_or_default();
        self.entries.push(CatalogEntry::separator(key.clone()));
        key
    }

    /// Removes the entry registered under `key`.
    pub fn unregister(&mut self, key: &str) -> Option<CatalogEntry> {
        let position = self.entries.iter().position(|e| e.key == key)?;
        let removed = self.entries.remove(position);
        for node in removed.entry.nodes() {
            self.node_types.remove(&node.id);
        }
        debug!("unregistered catalog entry '{}'", key);
        Some(removed)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            info!("clearing {} catalog entries", self.entries.len());
        }
        self.entries.clear();
        self.node_types.clear();
    }

    /// Iterates entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Iterates categories in registration order, skipping separators.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.entries
            .iter()
            .filter_map(|e| e.entry.as_category().map(|c| (e.key.as_str(), c)))
    }

    /// Iterates every node type in display order.
    pub fn node_types(&self) -> impl Iterator<Item = &NodeTypeDescriptor> {
        self.entries.iter().flat_map(|e| e.entry.nodes())
    }

    /// Looks up an entry by key.
    pub fn get(&self, key: &str) -> Option<&CategoryEntry> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.entry)
    }

    /// Finds a node type and the key of the category listing it.
    pub fn find_node_type(&self, id: &str) -> Option<(&str, &NodeTypeDescriptor)> {
        let key = self.node_types.get(id)?;
        let category = self.get(key)?.as_category()?;
        category.node(id).map(|node| (key.as_str(), node))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    pub fn contains_node_type(&self, id: &str) -> bool {
        self.node_types.contains_key(id)
    }

    /// Returns the number of entries, separators included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn math() -> Category {
        Category::from_pairs("umog_math_menu", "Math", &[("add", "Add"), ("sub", "Subtract")]).unwrap()
    }

    fn mesh() -> Category {
        Category::from_pairs(
            "umog_mesh_menu",
            "Mesh",
            &[("umog_GetMeshNode", "Get Mesh"), ("umog_SetMeshNode", "Set Mesh")],
        )
        .unwrap()
    }

    #[test]
    fn test_registry_creation() {
        let registry = NodeTypeRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_iteration_follows_registration_order() {
        let mut registry = NodeTypeRegistry::new();
        registry.register("mesh_menu", mesh()).unwrap();
        registry.register("gap", CategoryEntry::Separator).unwrap();
        registry.register("math_menu", math()).unwrap();

        let keys: Vec<&str> = registry.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["mesh_menu", "gap", "math_menu"]);

        let nodes: Vec<&str> = registry.node_types().map(|n| n.id.as_str()).collect();
        assert_eq!(nodes, vec!["umog_GetMeshNode", "umog_SetMeshNode", "add", "sub"]);
    }

    #[test]
    fn test_separator_yields_no_nodes() {
        let mut registry = NodeTypeRegistry::new();
        registry.register("gap", CategoryEntry::Separator).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.node_types().count(), 0);
        assert_eq!(registry.categories().count(), 0);
    }

    #[test]
    fn test_duplicate_category_key() {
        let mut registry = NodeTypeRegistry::new();
        registry.register("math_menu", math()).unwrap();
        let before = registry.clone();

        let err = registry.register("math_menu", mesh()).unwrap_err();
        assert_eq!(err, Error::DuplicateCategory("math_menu".to_string()));
        assert!(err.is_duplicate_registration());
        assert_eq!(registry, before);
    }

    #[test]
    fn test_duplicate_node_type_across_categories() {
        let mut registry = NodeTypeRegistry::new();
        registry.register("math_menu", math()).unwrap();

        let clash = Category::from_pairs("umog_more_menu", "More", &[("mul", "Multiply"), ("add", "Add")]).unwrap();
        let err = registry.register("more_menu", clash).unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateNodeType {
                id: "add".to_string(),
                category: "math_menu".to_string(),
            }
        );
        assert!(!registry.contains("more_menu"));
        assert!(!registry.contains_node_type("mul"));
    }

    #[test]
    fn test_malformed_category_rejected_at_registration() {
        let mut registry = NodeTypeRegistry::new();
        let malformed = Category {
            menu_id: "umog_bad_menu".to_string(),
            label: "Bad".to_string(),
            description: String::new(),
            icon: String::new(),
            nodes: vec![NodeTypeDescriptor::new("ok", "Ok"), NodeTypeDescriptor::new("broken", "")],
        };
        assert!(matches!(
            registry.register("bad_menu", malformed),
            Err(Error::Configuration(_))
        ));
        assert!(registry.is_empty());
        assert!(!registry.contains_node_type("ok"));
    }

    #[test]
    fn test_push_separator_generates_unique_keys() {
        let mut registry = NodeTypeRegistry::new();
        registry.register("separator_1", CategoryEntry::Separator).unwrap();
        let first = registry.push_separator();
        let second = registry.push_separator();
        assert_eq!(first, "separator_2");
        assert_eq!(second, "separator_3");
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_find_node_type() {
        let mut registry = NodeTypeRegistry::new();
        registry.register("math_menu", math()).unwrap();

        let (key, node) = registry.find_node_type("sub").unwrap();
        assert_eq!(key, "math_menu");
        assert_eq!(node.label, "Subtract");
        assert!(registry.find_node_type("div").is_none());
    }

    #[test]
    fn test_unregister_releases_node_types() {
        let mut registry = NodeTypeRegistry::new();
        registry.register("math_menu", math()).unwrap();
        registry.register("mesh_menu", mesh()).unwrap();

        let removed = registry.unregister("math_menu").unwrap();
        assert_eq!(removed.key, "math_menu");
        assert!(!registry.contains_node_type("add"));
        assert!(registry.contains_node_type("umog_GetMeshNode"));

        // The freed node ids can be registered again
        registry.register("math_menu", math()).unwrap();
        let keys: Vec<&str> = registry.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["mesh_menu", "math_menu"]);
    }

    #[test]
    fn test_clear() {
        let mut registry = NodeTypeRegistry::new();
        registry.register("math_menu", math()).unwrap();
        registry.push_separator();
        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.contains_node_type("add"));
    }
}
