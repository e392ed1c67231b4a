//! Editor runtime
//!
//! Owns every registry. [`Runtime::startup`] registers socket types, the
//! node catalog and the menus built from it; [`Runtime::shutdown`] removes
//! them again in reverse order.

use anyhow::bail;
use log::info;

use crate::catalog::NodeTypeRegistry;
use crate::error::Result;
use crate::menu::{AddMenu, InsertNodeCommand, MenuLayout, MenuRegistry, NodeInserter};
use crate::persistence::EditorConfig;
use crate::socket::SocketTypeRegistry;

/// Registries of a running editor.
#[derive(Clone, Debug, PartialEq)]
pub struct Runtime {
    tree_type: String,
    socket_types: SocketTypeRegistry,
    node_types: NodeTypeRegistry,
    menus: MenuRegistry,
    add_menu: Option<AddMenu>,
}

impl Runtime {
    /// Registers everything listed in `config`.
    ///
    /// Registration stops at the first error. The partially filled registries
    /// are dropped with the error, so nothing stays registered.
    pub fn startup(config: &EditorConfig) -> Result<Self> {
        let mut runtime = Self {
            tree_type: config.tree_type.clone(),
            socket_types: SocketTypeRegistry::new(),
            node_types: NodeTypeRegistry::new(),
            menus: MenuRegistry::new(),
            add_menu: None,
        };

        for socket_type in &config.socket_types {
            runtime.socket_types.register(socket_type.clone())?;
        }
        for entry in &config.catalog {
            runtime.node_types.register_entry(entry.clone())?;
        }
        runtime.add_menu = Some(AddMenu::build(
            &runtime.node_types,
            &mut runtime.menus,
            config.tree_type.as_str(),
        )?);

        info!(
            "editor runtime started for '{}': {} socket types, {} catalog entries, {} menus",
            runtime.tree_type,
            runtime.socket_types.len(),
            runtime.node_types.len(),
            runtime.menus.len()
        );
        Ok(runtime)
    }

    /// Unregisters menus, catalog entries and socket types, each in reverse
    /// registration order.
    pub fn shutdown(&mut self) {
        if let Some(add_menu) = self.add_menu.take() {
            let ids: Vec<&str> = add_menu.menu_ids().collect();
            for menu_id in ids.into_iter().rev() {
                self.menus.unregister_menu(menu_id);
            }
        }

        let keys: Vec<String> = self.node_types.iter().map(|e| e.key.clone()).collect();
        for key in keys.iter().rev() {
            self.node_types.unregister(key);
        }

        let ids: Vec<String> = self.socket_types.iter().map(|t| t.id.clone()).collect();
        for id in ids.iter().rev() {
            self.socket_types.unregister(id);
        }

        info!("editor runtime for '{}' shut down", self.tree_type);
    }

    /// True once every registry is empty.
    pub fn is_empty(&self) -> bool {
        self.add_menu.is_none()
            && self.menus.is_empty()
            && self.node_types.is_empty()
            && self.socket_types.is_empty()
    }

    pub fn tree_type(&self) -> &str {
        &self.tree_type
    }

    pub fn socket_types(&self) -> &SocketTypeRegistry {
        &self.socket_types
    }

    pub fn node_types(&self) -> &NodeTypeRegistry {
        &self.node_types
    }

    pub fn menus(&self) -> &MenuRegistry {
        &self.menus
    }

    pub fn add_menu(&self) -> Option<&AddMenu> {
        self.add_menu.as_ref()
    }

    /// Draws the add menu for an editor of `tree_type`.
    ///
    /// Returns whether anything was drawn.
    pub fn draw_add_menu(&self, layout: &mut dyn MenuLayout, tree_type: &str) -> bool {
        match &self.add_menu {
            Some(add_menu) => add_menu.draw(&self.menus, layout, tree_type),
            None => false,
        }
    }

    /// Hands `command` to the host graph if its node type is in the catalog.
    pub fn execute(&self, command: &InsertNodeCommand, host: &mut dyn NodeInserter) -> anyhow::Result<()> {
        if !self.node_types.contains_node_type(&command.type_id) {
            bail!("node type '{}' is not in the catalog", command.type_id);
        }
        host.insert_node(command)
    }
}
