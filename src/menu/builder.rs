//! Menu building
//!
//! One [`CategoryMenu`] is built per catalog category at startup and kept in
//! the [`MenuRegistry`]. The top-level [`AddMenu`] only remembers the order of
//! menus and dividers, and looks the menus up again when drawn.

use log::{debug, info, warn};

use super::command::insert_node;
use super::layout::MenuLayout;
use crate::catalog::{Category, CategoryEntry, NodeTypeRegistry};
use crate::error::{Error, Result};

/// Something that can be drawn as a sub-menu.
pub trait MenuSource {
    /// Unique, addressable menu identifier.
    fn menu_id(&self) -> &str;

    fn label(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    fn icon(&self) -> &str {
        ""
    }

    /// Draws the menu contents into `layout`.
    fn draw(&self, layout: &mut dyn MenuLayout);
}

/// Sub-menu listing the node types of one category.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryMenu {
    category: Category,
}

impl CategoryMenu {
    pub fn new(category: Category) -> Self {
        Self { category }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }
}

impl MenuSource for CategoryMenu {
    fn menu_id(&self) -> &str {
        &self.category.menu_id
    }

    fn label(&self) -> &str {
        &self.category.label
    }

    fn description(&self) -> &str {
        &self.category.description
    }

    fn icon(&self) -> &str {
        &self.category.icon
    }

    fn draw(&self, layout: &mut dyn MenuLayout) {
        for node in &self.category.nodes {
            insert_node(layout, &node.id, &node.label, &node.settings, None);
        }
    }
}

/// Registry of addressable menus, keyed by menu id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuRegistry {
    menus: Vec<CategoryMenu>,
}

impl MenuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a menu.
    ///
    /// Returns [`Error::DuplicateMenu`] if the id is taken.
    pub fn register_menu(&mut self, menu: CategoryMenu) -> Result<()> {
        if self.contains(menu.menu_id()) {
            return Err(Error::DuplicateMenu(menu.menu_id().to_string()));
        }
        debug!("registered menu '{}'", menu.menu_id());
        self.menus.push(menu);
        Ok(())
    }

    /// Removes a menu by id.
    pub fn unregister_menu(&mut self, menu_id: &str) -> Option<CategoryMenu> {
        let position = self.menus.iter().position(|m| m.menu_id() == menu_id)?;
        debug!("unregistered menu '{}'", menu_id);
        Some(self.menus.remove(position))
    }

    pub fn get(&self, menu_id: &str) -> Option<&CategoryMenu> {
        self.menus.iter().find(|m| m.menu_id() == menu_id)
    }

    pub fn contains(&self, menu_id: &str) -> bool {
        self.get(menu_id).is_some()
    }

    /// Iterates menus in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryMenu> {
        self.menus.iter()
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}

/// One entry of the top-level add menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddMenuItem {
    /// Sub-menu, by menu id.
    Menu(String),
    Separator,
}

/// The top-level "Add" menu of the node editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddMenu {
    label: String,
    tree_type: String,
    items: Vec<AddMenuItem>,
}

impl AddMenu {
    /// Builds one [`CategoryMenu`] per category in `catalog` and registers it
    /// in `menus`.
    ///
    /// If a menu id is already registered the menus registered by this call
    /// are removed again and [`Error::DuplicateMenu`] is returned.
    pub fn build(
        catalog: &NodeTypeRegistry,
        menus: &mut MenuRegistry,
        tree_type: impl Into<String>,
    ) -> Result<Self> {
        let mut items = Vec::with_capacity(catalog.len());
        let mut registered: Vec<String> = Vec::new();

        for entry in catalog.iter() {
            match &entry.entry {
                CategoryEntry::Category(category) => {
                    let menu = CategoryMenu::new(category.clone());
                    let menu_id = menu.menu_id().to_string();
                    if let Err(err) = menus.register_menu(menu) {
                        for id in registered.iter().rev() {
                            menus.unregister_menu(id);
                        }
                        return Err(err);
                    }
                    registered.push(menu_id.clone());
                    items.push(AddMenuItem::Menu(menu_id));
                }
                CategoryEntry::Separator => items.push(AddMenuItem::Separator),
            }
        }

        let menu = Self {
            label: "Add".to_string(),
            tree_type: tree_type.into(),
            items,
        };
        info!(
            "built add menu for '{}' ({} sub-menus)",
            menu.tree_type,
            registered.len()
        );
        Ok(menu)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tree_type(&self) -> &str {
        &self.tree_type
    }

    pub fn items(&self) -> &[AddMenuItem] {
        &self.items
    }

    /// Menu ids in display order.
    pub fn menu_ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            AddMenuItem::Menu(id) => Some(id.as_str()),
            AddMenuItem::Separator => None,
        })
    }

    /// Whether the menu is shown in an editor of `tree_type`.
    pub fn is_visible(&self, tree_type: &str) -> bool {
        self.tree_type == tree_type
    }

    /// Draws the menu for an editor of `tree_type`.
    ///
    /// Returns `false` and draws nothing for other tree types.
    pub fn draw(&self, menus: &MenuRegistry, layout: &mut dyn MenuLayout, tree_type: &str) -> bool {
        if !self.is_visible(tree_type) {
            return false;
        }
        for item in &self.items {
            match item {
                AddMenuItem::Menu(menu_id) => match menus.get(menu_id) {
                    Some(menu) => layout.menu(menu),
                    None => warn!("menu '{}' is not registered, skipping", menu_id),
                },
                AddMenuItem::Separator => layout.separator(),
            }
        }
        true
    }
}
