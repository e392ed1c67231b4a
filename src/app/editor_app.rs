//! Main application struct for the node editor demo
//!
//! Shows the "Add" menu built from the editor configuration, records picked
//! insert commands as a stand-in host graph, and exposes a Float socket so
//! clamping and change propagation can be tried out.

use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui::{self, Align, Layout, RichText};

use super::theme;
use crate::error::Error;
use crate::menu::{EguiLayout, InsertNodeCommand};
use crate::persistence::EditorConfig;
use crate::runtime::Runtime;
use crate::socket::{NodeId, Socket, SocketValue, ValueBounds, FLOAT_SOCKET};

/// Tree type of an editor the add menu is not registered for.
const FOREIGN_TREE_TYPE: &str = "ShaderNodeTree";

/// Number of update log lines kept on screen.
const MAX_LOG_LINES: usize = 8;

/// Main application state for the node editor demo
pub struct EditorApp {
    /// Registries, or the error that stopped startup
    runtime: Result<Runtime, Error>,

    /// Tree type of the editor being shown
    active_tree_type: String,

    /// Nodes inserted through the add menu
    graph: Vec<InsertNodeCommand>,

    /// Float input socket driven by the slider
    socket: Option<Socket>,

    /// Slider position, before clamping
    slider_value: f64,

    /// Values seen by the socket's update hook
    updates: Rc<RefCell<Vec<String>>>,

    /// Last error message to display
    error_message: Option<String>,

    /// Whether theme has been applied
    theme_applied: bool,
}

impl EditorApp {
    /// Create a new EditorApp from an editor configuration
    pub fn new(config: &EditorConfig) -> Self {
        let runtime = Runtime::startup(config);
        let updates = Rc::new(RefCell::new(Vec::new()));

        let mut error_message = None;
        let socket = match &runtime {
            Ok(runtime) => match Self::demo_socket(runtime, &updates) {
                Ok(socket) => socket,
                Err(e) => {
                    error_message = Some(e.to_string());
                    None
                }
            },
            Err(e) => {
                log::error!("editor startup failed: {}", e);
                error_message = Some(e.to_string());
                None
            }
        };

        Self {
            active_tree_type: config.tree_type.clone(),
            runtime,
            graph: Vec::new(),
            socket,
            slider_value: 0.0,
            updates,
            error_message,
            theme_applied: false,
        }
    }

    /// Builds the Float socket, bounded to -10..=10, if the type is registered
    fn demo_socket(runtime: &Runtime, updates: &Rc<RefCell<Vec<String>>>) -> crate::error::Result<Option<Socket>> {
        let Some(socket_type) = runtime.socket_types().get(FLOAT_SOCKET) else {
            return Ok(None);
        };

        let log = Rc::clone(updates);
        let socket = Socket::input(NodeId(1), "Value", socket_type)?
            .with_bounds(ValueBounds::new(-10.0, 10.0)?)?
            .with_hook(move |node: NodeId, value: &SocketValue| -> anyhow::Result<()> {
                let mut log = log.borrow_mut();
                log.push(format!("{} <- {:?}", node, value));
                if log.len() > MAX_LOG_LINES {
                    log.remove(0);
                }
                Ok(())
            });
        Ok(Some(socket))
    }

    /// Draw the menu bar with the add menu
    fn draw_menu_bar(&mut self, ui: &mut egui::Ui) -> MenuActions {
        let mut actions = MenuActions::default();

        egui::menu::bar(ui, |ui| {
            ui.add_space(8.0);

            if let Ok(runtime) = &self.runtime {
                let visible = runtime
                    .add_menu()
                    .is_some_and(|menu| menu.is_visible(&self.active_tree_type));
                let label = runtime.add_menu().map_or("Add", |menu| menu.label());

                ui.add_enabled_ui(visible, |ui| {
                    let response = ui.menu_button(label, |ui| {
                        let mut layout = EguiLayout::new(ui);
                        runtime.draw_add_menu(&mut layout, &self.active_tree_type);
                        layout.into_invoked()
                    });
                    if let Some(invoked) = response.inner {
                        actions.insert.extend(invoked);
                    }
                });
            }

            ui.separator();

            // Editor tree type switch
            ui.label(RichText::new("Editor").color(theme::text::SECONDARY));
            let own_tree_type = self
                .runtime
                .as_ref()
                .map(|r| r.tree_type().to_string())
                .unwrap_or_default();
            egui::ComboBox::from_id_salt("tree_type")
                .selected_text(self.active_tree_type.as_str())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.active_tree_type, own_tree_type.clone(), own_tree_type.as_str());
                    ui.selectable_value(
                        &mut self.active_tree_type,
                        FOREIGN_TREE_TYPE.to_string(),
                        FOREIGN_TREE_TYPE,
                    );
                });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Clear").clicked() {
                    actions.clear_graph = true;
                }
            });
        });

        actions
    }

    /// Draw the canvas with the inserted nodes and the socket panel
    fn draw_main_area(&mut self, ui: &mut egui::Ui) -> MenuActions {
        let mut actions = MenuActions::default();
        let rect = ui.available_rect_before_wrap();
        theme::draw_grid_background(ui.painter(), rect);

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.add_space(12.0);
            ui.vertical(|ui| {
                ui.label(RichText::new("Nodes").color(theme::text::PRIMARY).strong());
                if self.graph.is_empty() {
                    ui.label(RichText::new("Add nodes from the Add menu").color(theme::text::DISABLED));
                }
                for (index, command) in self.graph.iter().enumerate() {
                    let mut line = format!("{}. {} ({})", index + 1, command.label, command.type_id);
                    for setting in &command.settings {
                        line.push_str(&format!(" {}={}", setting.name, setting.value));
                    }
                    ui.label(RichText::new(line).color(theme::text::SECONDARY));
                }

                ui.add_space(16.0);
                self.draw_socket_panel(ui, &mut actions);
            });
        });

        actions
    }

    fn draw_socket_panel(&mut self, ui: &mut egui::Ui, actions: &mut MenuActions) {
        let Some(socket) = &self.socket else {
            return;
        };

        ui.horizontal(|ui| {
            if let Ok(runtime) = &self.runtime {
                if let Some(socket_type) = runtime.socket_types().get(socket.type_id()) {
                    theme::socket_swatch(ui, socket_type.color());
                }
            }
            ui.label(RichText::new(format!("{} ({})", socket.name(), socket.type_id())).color(theme::text::PRIMARY));
        });

        let bounds = socket.bounds();
        ui.horizontal(|ui| {
            let slider = egui::Slider::new(&mut self.slider_value, bounds.min * 2.0..=bounds.max * 2.0).text("set");
            if ui.add(slider).changed() {
                actions.set_value = Some(self.slider_value);
            }
        });

        let stored = socket.get().map(SocketValue::as_f64).unwrap_or_default();
        ui.label(
            RichText::new(format!("get() = {:.3}  bounds = [{}, {}]", stored, bounds.min, bounds.max))
                .color(theme::accent::SUCCESS),
        );

        for line in self.updates.borrow().iter() {
            ui.label(RichText::new(line).color(theme::text::DISABLED).small());
        }
    }

    /// Draw the bottom status bar
    fn draw_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);

            if let Some(ref error) = self.error_message {
                ui.label(RichText::new(format!("⚠ {}", error)).color(theme::accent::ERROR).small());
            } else if let Ok(runtime) = &self.runtime {
                ui.label(
                    RichText::new(format!(
                        "{} socket types • {} node types • {} menus",
                        runtime.socket_types().len(),
                        runtime.node_types().node_types().count(),
                        runtime.menus().len()
                    ))
                    .color(theme::text::SECONDARY)
                    .small(),
                );
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(format!("{} nodes", self.graph.len())).color(theme::text::DISABLED).small());
            });
        });
    }

    fn apply(&mut self, actions: MenuActions) {
        if actions.clear_graph {
            self.graph.clear();
        }
        if let Ok(runtime) = &self.runtime {
            for command in &actions.insert {
                if let Err(e) = runtime.execute(command, &mut self.graph) {
                    log::warn!("insert failed: {}", e);
                    self.error_message = Some(e.to_string());
                }
            }
        }
        if let (Some(value), Some(socket)) = (actions.set_value, self.socket.as_mut()) {
            if let Err(e) = socket.set(value) {
                self.error_message = Some(e.to_string());
            }
        }
    }
}

/// Actions collected while drawing, for deferred execution
#[derive(Default)]
struct MenuActions {
    insert: Vec<InsertNodeCommand>,
    set_value: Option<f64>,
    clear_graph: bool,
}

impl MenuActions {
    fn merge(&mut self, other: MenuActions) {
        self.insert.extend(other.insert);
        self.set_value = other.set_value.or(self.set_value);
        self.clear_graph |= other.clear_graph;
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        let mut actions = egui::TopBottomPanel::top("menu_bar")
            .frame(egui::Frame::none()
                .fill(theme::background::PANEL)
                .inner_margin(egui::Margin::symmetric(0.0, 4.0)))
            .show(ctx, |ui| self.draw_menu_bar(ui))
            .inner;

        egui::TopBottomPanel::bottom("status_bar")
            .frame(egui::Frame::none()
                .fill(theme::background::PANEL)
                .inner_margin(egui::Margin::symmetric(0.0, 4.0)))
            .show(ctx, |ui| {
                self.draw_status_bar(ui);
            });

        let canvas_actions = egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.draw_main_area(ui))
            .inner;
        actions.merge(canvas_actions);

        // Handle deferred actions (to avoid borrow checker issues)
        self.apply(actions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_starts_with_builtin_config() {
        let app = EditorApp::new(&EditorConfig::builtin().unwrap());
        assert!(app.runtime.is_ok());
        assert!(app.socket.is_some());
        assert!(app.error_message.is_none());
        assert_eq!(app.active_tree_type, "umog_UMOGNodeTree");
    }

    #[test]
    fn test_apply_inserts_and_clamps() {
        let mut app = EditorApp::new(&EditorConfig::builtin().unwrap());
        app.apply(MenuActions {
            insert: vec![InsertNodeCommand::new("umog_AddNode", "Add")],
            set_value: Some(25.0),
            clear_graph: false,
        });

        assert_eq!(app.graph.len(), 1);
        let socket = app.socket.as_ref().unwrap();
        assert_eq!(socket.get(), Some(&SocketValue::Float(10.0)));
        assert_eq!(app.updates.borrow().len(), 1);
    }

    #[test]
    fn test_unknown_node_type_reports_error() {
        let mut app = EditorApp::new(&EditorConfig::builtin().unwrap());
        app.apply(MenuActions {
            insert: vec![InsertNodeCommand::new("umog_Missing", "Missing")],
            ..MenuActions::default()
        });
        assert!(app.graph.is_empty());
        assert!(app.error_message.is_some());
    }

    #[test]
    fn test_startup_error_is_shown() {
        let mut config = EditorConfig::builtin().unwrap();
        let duplicate = config.socket_types[0].clone();
        config.socket_types.push(duplicate);

        let app = EditorApp::new(&config);
        assert!(app.runtime.is_err());
        assert!(app.socket.is_none());
        assert!(app.error_message.is_some());
    }
}
