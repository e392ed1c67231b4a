//! Node type descriptors and the categories that group them.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A key/value pair applied to an insert command before it executes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeSetting {
    pub name: String,
    pub value: String,
}

impl NodeSetting {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Static information about one insertable node type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeTypeDescriptor {
    /// Namespaced identifier the host graph instantiates (e.g. "umog_AddNode").
    pub id: String,
    /// Human-readable name shown in menus.
    pub label: String,
    /// Default settings applied to the node on insertion.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub settings: Vec<NodeSetting>,
}

impl NodeTypeDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            settings: Vec::new(),
        }
    }

    /// Adds a default setting.
    pub fn with_setting(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.push(NodeSetting::new(name, value));
        self
    }

    fn validate(&self, position: usize) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::configuration(format!(
                "node entry {} has an empty identifier",
                position
            )));
        }
        if self.label.trim().is_empty() {
            return Err(Error::configuration(format!(
                "node '{}' has an empty label",
                self.id
            )));
        }
        if let Some(setting) = self.settings.iter().find(|s| s.name.trim().is_empty()) {
            return Err(Error::configuration(format!(
                "node '{}' has a setting with an empty name (value '{}')",
                self.id, setting.value
            )));
        }
        Ok(())
    }
}

/// An ordered, labeled group of node types shown together in the add menu.
///
/// Node order is display order and is never resorted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Identifier of the menu built for this category (e.g. "umog_math_menu").
    pub menu_id: String,
    /// Text shown for the category's sub-menu.
    pub label: String,
    #[serde(default)]
    pub description: String,
    /// Icon hint passed through to the host.
    #[serde(default)]
    pub icon: String,
    pub nodes: Vec<NodeTypeDescriptor>,
}

impl Category {
    /// Creates a category, validating every node descriptor.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] if the menu id or label is empty, a node has an
    /// empty identifier or label, or a node id appears twice.
    pub fn new(
        menu_id: impl Into<String>,
        label: impl Into<String>,
        nodes: Vec<NodeTypeDescriptor>,
    ) -> Result<Self> {
        let category = Self {
            menu_id: menu_id.into(),
            label: label.into(),
            description: String::new(),
            icon: String::new(),
            nodes,
        };
        category.validate()?;
        Ok(category)
    }

    /// Builds a category from `(id, label)` pairs.
    pub fn from_pairs(
        menu_id: impl Into<String>,
        label: impl Into<String>,
        nodes: &[(&str, &str)],
    ) -> Result<Self> {
        let nodes = nodes
            .iter()
            .map(|(id, label)| NodeTypeDescriptor::new(*id, *label))
            .collect();
        Self::new(menu_id, label, nodes)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Checks the category is well-formed.
    pub fn validate(&self) -> Result<()> {
        if self.menu_id.trim().is_empty() {
            return Err(Error::configuration(format!(
                "category '{}' has an empty menu id",
                self.label
            )));
        }
        if self.label.trim().is_empty() {
            return Err(Error::configuration(format!(
                "category '{}' has an empty label",
                self.menu_id
            )));
        }
        for (position, node) in self.nodes.iter().enumerate() {
            node.validate(position)?;
            if self.nodes[..position].iter().any(|n| n.id == node.id) {
                return Err(Error::configuration(format!(
                    "node '{}' is listed twice in category '{}'",
                    node.id, self.label
                )));
            }
        }
        Ok(())
    }

    /// Returns the node with the given identifier.
    pub fn node(&self, id: &str) -> Option<&NodeTypeDescriptor> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// One entry of the catalog: a category or a visual divider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CategoryEntry {
    Category(Category),
    Separator,
}

impl CategoryEntry {
    /// Node types contributed by this entry. Separators contribute none.
    pub fn nodes(&self) -> &[NodeTypeDescriptor] {
        match self {
            CategoryEntry::Category(category) => &category.nodes,
            CategoryEntry::Separator => &[],
        }
    }

    pub fn as_category(&self) -> Option<&Category> {
        match self {
            CategoryEntry::Category(category) => Some(category),
            CategoryEntry::Separator => None,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, CategoryEntry::Separator)
    }
}

impl From<Category> for CategoryEntry {
    fn from(category: Category) -> Self {
        CategoryEntry::Category(category)
    }
}

/// A keyed catalog entry, as stored by the registry and in configuration files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub key: String,
    #[serde(flatten)]
    pub entry: CategoryEntry,
}

impl CatalogEntry {
    pub fn new(key: impl Into<String>, entry: impl Into<CategoryEntry>) -> Self {
        Self {
            key: key.into(),
            entry: entry.into(),
        }
    }

    pub fn separator(key: impl Into<String>) -> Self {
        Self::new(key, CategoryEntry::Separator)
    }
}
