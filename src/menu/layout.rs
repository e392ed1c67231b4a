//! Menu drawing surfaces.
//!
//! Menus never talk to a widget toolkit directly. They describe themselves
//! to a [`MenuLayout`], which either draws (see `EguiLayout`) or records.

use super::builder::MenuSource;
use super::command::InsertNodeCommand;

/// Target that menus draw into.
pub trait MenuLayout {
    /// Adds an insert-node affordance.
    fn operator(&mut self, command: InsertNodeCommand);

    /// Adds a visual divider.
    fn separator(&mut self);

    /// Adds an entry that opens `menu` as a sub-menu.
    fn menu(&mut self, menu: &dyn MenuSource);
}

/// One recorded layout element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutItem {
    /// A sub-menu entry. Its contents are drawn only when opened.
    Menu {
        menu_id: String,
        label: String,
        icon: String,
    },
    Separator,
    Operator(InsertNodeCommand),
}

/// Layout that records what was drawn, for headless hosts and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingLayout {
    items: Vec<LayoutItem>,
}

impl RecordingLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[LayoutItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<LayoutItem> {
        self.items
    }

    /// Iterates the recorded insert commands in draw order.
    pub fn commands(&self) -> impl Iterator<Item = &InsertNodeCommand> {
        self.items.iter().filter_map(|item| match item {
            LayoutItem::Operator(command) => Some(command),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl MenuLayout for RecordingLayout {
    fn operator(&mut self, command: InsertNodeCommand) {
        self.items.push(LayoutItem::Operator(command));
    }

    fn separator(&mut self) {
        self.items.push(LayoutItem::Separator);
    }

    fn menu(&mut self, menu: &dyn MenuSource) {
        self.items.push(LayoutItem::Menu {
            menu_id: menu.menu_id().to_string(),
            label: menu.label().to_string(),
            icon: menu.icon().to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_layout() {
        let mut layout = RecordingLayout::new();
        assert!(layout.is_empty());

        layout.operator(InsertNodeCommand::new("a", "A"));
        layout.separator();
        layout.operator(InsertNodeCommand::new("b", "B"));

        assert_eq!(layout.items().len(), 3);
        assert_eq!(layout.items()[1], LayoutItem::Separator);
        let ids: Vec<&str> = layout.commands().map(|c| c.type_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
