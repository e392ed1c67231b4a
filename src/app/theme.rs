//! Theme definitions for the node editor demo
//!
//! Color constants, styling utilities, and the canvas background.

use eframe::egui::{self, Color32, Rounding, Stroke, Vec2};

/// Background colors
pub mod background {
    use super::Color32;

    /// Node canvas background
    pub const CANVAS: Color32 = Color32::from_rgb(29, 29, 29);

    /// Canvas grid lines
    pub const GRID: Color32 = Color32::from_rgb(42, 42, 42);

    /// Menu bar and status bar
    pub const PANEL: Color32 = Color32::from_rgb(48, 48, 48);

    /// Widget background (buttons, sliders)
    pub const WIDGET: Color32 = Color32::from_rgb(60, 60, 60);

    pub const WIDGET_HOVERED: Color32 = Color32::from_rgb(75, 75, 75);

    pub const WIDGET_ACTIVE: Color32 = Color32::from_rgb(90, 90, 90);
}

/// Text colors
pub mod text {
    use super::Color32;

    pub const PRIMARY: Color32 = Color32::from_rgb(230, 230, 230);

    pub const SECONDARY: Color32 = Color32::from_rgb(150, 150, 150);

    pub const DISABLED: Color32 = Color32::from_rgb(95, 95, 95);
}

/// UI accent colors
pub mod accent {
    use super::Color32;

    /// Selection and highlights - orange
    pub const PRIMARY: Color32 = Color32::from_rgb(255, 140, 25);

    pub const SUCCESS: Color32 = Color32::from_rgb(129, 199, 132);

    pub const ERROR: Color32 = Color32::from_rgb(239, 83, 80);
}

/// Grid spacing of the canvas background
pub const GRID_SPACING: f32 = 24.0;

/// Radius of socket color swatches
pub const SOCKET_RADIUS: f32 = 5.0;

/// Standard rounding for widgets
pub const ROUNDING: Rounding = Rounding {
    nw: 3.0,
    ne: 3.0,
    sw: 3.0,
    se: 3.0,
};

/// Apply the dark editor theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    let visuals = &mut style.visuals;
    visuals.dark_mode = true;
    visuals.window_fill = background::PANEL;
    visuals.panel_fill = background::CANVAS;

    visuals.widgets.noninteractive.bg_fill = background::WIDGET;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text::SECONDARY);

    visuals.widgets.inactive.bg_fill = background::WIDGET;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text::PRIMARY);
    visuals.widgets.inactive.rounding = ROUNDING;

    visuals.widgets.hovered.bg_fill = background::WIDGET_HOVERED;
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text::PRIMARY);
    visuals.widgets.hovered.rounding = ROUNDING;

    visuals.widgets.active.bg_fill = background::WIDGET_ACTIVE;
    visuals.widgets.active.fg_stroke = Stroke::new(1.5, accent::PRIMARY);
    visuals.widgets.active.rounding = ROUNDING;

    visuals.selection.bg_fill = accent::PRIMARY.gamma_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent::PRIMARY);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);
    style.spacing.button_padding = Vec2::new(10.0, 4.0);

    ctx.set_style(style);
}

/// Draw the canvas grid on a painter
pub fn draw_grid_background(painter: &egui::Painter, rect: egui::Rect) {
    painter.rect_filled(rect, 0.0, background::CANVAS);

    let stroke = Stroke::new(1.0, background::GRID);
    let mut x = rect.left() - (rect.left() % GRID_SPACING);
    while x <= rect.right() {
        painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], stroke);
        x += GRID_SPACING;
    }
    let mut y = rect.top() - (rect.top() % GRID_SPACING);
    while y <= rect.bottom() {
        painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], stroke);
        y += GRID_SPACING;
    }
}

/// Draw a socket color swatch inline
pub fn socket_swatch(ui: &mut egui::Ui, color: Color32) -> egui::Response {
    let size = Vec2::splat(SOCKET_RADIUS * 2.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), SOCKET_RADIUS, color);
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_colors_are_distinct() {
        assert_ne!(accent::SUCCESS, accent::ERROR);
        assert_ne!(accent::PRIMARY, accent::ERROR);
    }

    #[test]
    fn grid_is_visible_on_canvas() {
        assert_ne!(background::GRID, background::CANVAS);
        assert!(GRID_SPACING >= 10.0);
        assert!(GRID_SPACING <= 50.0);
    }
}
