//! egui menu adapter
//!
//! Draws menus as egui menu buttons. Picked commands are collected during
//! drawing and handed to the host afterwards, so drawing never needs mutable
//! access to the node graph.

use egui::{InnerResponse, Ui};

use super::builder::MenuSource;
use super::command::InsertNodeCommand;
use super::layout::MenuLayout;

/// [`MenuLayout`] that draws into an [`egui::Ui`].
pub struct EguiLayout<'a> {
    ui: &'a mut Ui,
    invoked: Vec<InsertNodeCommand>,
}

impl<'a> EguiLayout<'a> {
    pub fn new(ui: &'a mut Ui) -> Self {
        Self {
            ui,
            invoked: Vec::new(),
        }
    }

    /// Commands the user picked while drawing.
    pub fn invoked(&self) -> &[InsertNodeCommand] {
        &self.invoked
    }

    pub fn into_invoked(self) -> Vec<InsertNodeCommand> {
        self.invoked
    }
}

impl MenuLayout for EguiLayout<'_> {
    fn operator(&mut self, command: InsertNodeCommand) {
        if self.ui.button(command.label.as_str()).clicked() {
            self.ui.close_menu();
            self.invoked.push(command);
        }
    }

    fn separator(&mut self) {
        self.ui.separator();
    }

    fn menu(&mut self, menu: &dyn MenuSource) {
        let InnerResponse { inner, response } = self.ui.menu_button(menu.label(), |ui| {
            let mut nested = EguiLayout::new(ui);
            menu.draw(&mut nested);
            nested.into_invoked()
        });
        if !menu.description().is_empty() {
            response.on_hover_text(menu.description());
        }
        if let Some(invoked) = inner {
            self.invoked.extend(invoked);
        }
    }
}
