//! Menu module
//!
//! Builds the node editor's "Add" menu from the node type catalog and turns
//! picked entries into insert-node commands.

pub mod builder;
pub mod command;
pub mod egui_layout;
pub mod layout;

pub use builder::{AddMenu, AddMenuItem, CategoryMenu, MenuRegistry, MenuSource};
pub use command::{insert_node, InsertNodeCommand, NodeInserter};
pub use egui_layout::EguiLayout;
pub use layout::{LayoutItem, MenuLayout, RecordingLayout};
