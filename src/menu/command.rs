//! Insert-node commands.
//!
//! A menu affordance carries one of these. When the user picks it, the
//! command is handed to the host graph, which creates and wires the node.

use serde::{Deserialize, Serialize};

use super::layout::MenuLayout;
use crate::catalog::NodeSetting;

/// Request for the host graph to instantiate a node type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertNodeCommand {
    /// Node type identifier to instantiate.
    pub type_id: String,
    /// Text shown on the affordance.
    pub label: String,
    /// Icon hint; `None` draws no icon.
    pub icon: Option<String>,
    /// Ask the host to let the user place the node interactively.
    pub use_transform: bool,
    /// Settings applied to the created node.
    pub settings: Vec<NodeSetting>,
}

impl InsertNodeCommand {
    /// Creates a command with interactive placement and no settings.
    pub fn new(type_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            label: label.into(),
            icon: None,
            use_transform: true,
            settings: Vec::new(),
        }
    }

    /// Adds each `(name, value)` pair to the command's settings, in order.
    pub fn apply_settings(&mut self, settings: &[NodeSetting]) {
        for setting in settings {
            self.settings.push(setting.clone());
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Looks up a setting value by name. The last entry wins.
    pub fn setting(&self, name: &str) -> Option<&str> {
        self.settings
            .iter()
            .rev()
            .find(|s| s.name == name)
            .map(|s| s.value.as_str())
    }
}

/// Adds an insert-node affordance to `layout`.
///
/// Every call builds its own command, so settings never leak between calls.
pub fn insert_node(
    layout: &mut dyn MenuLayout,
    type_id: &str,
    label: &str,
    settings: &[NodeSetting],
    icon: Option<&str>,
) {
    let mut command = InsertNodeCommand::new(type_id, label);
    command.icon = icon.map(str::to_string);
    command.apply_settings(settings);
    layout.operator(command);
}

/// The host graph: executes insert commands picked from the menu.
pub trait NodeInserter {
    fn insert_node(&mut self, command: &InsertNodeCommand) -> anyhow::Result<()>;
}

/// Collects commands instead of executing them.
impl NodeInserter for Vec<InsertNodeCommand> {
    fn insert_node(&mut self, command: &InsertNodeCommand) -> anyhow::Result<()> {
        self.push(command.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::layout::RecordingLayout;

    #[test]
    fn test_new_command_defaults() {
        let command = InsertNodeCommand::new("umog_AddNode", "Add");
        assert_eq!(command.type_id, "umog_AddNode");
        assert_eq!(command.label, "Add");
        assert!(command.use_transform);
        assert!(command.settings.is_empty());
        assert!(command.icon.is_none());
    }

    #[test]
    fn test_settings_applied_in_order() {
        let mut command = InsertNodeCommand::new("umog_IntegerMathNode", "Integer Math");
        command.apply_settings(&[
            NodeSetting::new("operation", "'ADD'"),
            NodeSetting::new("operation", "'SUB'"),
        ]);
        assert_eq!(command.settings.len(), 2);
        assert_eq!(command.setting("operation"), Some("'SUB'"));
        assert_eq!(command.setting("missing"), None);
    }

    #[test]
    fn test_insert_node_uses_fresh_settings_per_call() {
        let mut layout = RecordingLayout::new();
        insert_node(&mut layout, "a", "A", &[NodeSetting::new("k", "v")], None);
        insert_node(&mut layout, "b", "B", &[], None);
        insert_node(&mut layout, "c", "C", &[], Some("PLUS"));

        let commands: Vec<&InsertNodeCommand> = layout.commands().collect();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0].settings, vec![NodeSetting::new("k", "v")]);
        assert!(commands[1].settings.is_empty());
        assert!(commands[2].settings.is_empty());
        assert_eq!(commands[2].icon.as_deref(), Some("PLUS"));
    }

    #[test]
    fn test_vec_inserter_collects() {
        let mut host: Vec<InsertNodeCommand> = Vec::new();
        host.insert_node(&InsertNodeCommand::new("umog_NumberNode", "Number")).unwrap();
        assert_eq!(host.len(), 1);
        assert_eq!(host[0].type_id, "umog_NumberNode");
    }
}
