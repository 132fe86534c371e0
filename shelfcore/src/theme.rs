//! Panel theme — flat, square-cornered, 1px outlines

use egui::{Color32, Rounding, Stroke, Style, Visuals};

/// The panel's small palette.
pub struct ShelfColors;

impl ShelfColors {
    pub const BG: Color32 = Color32::from_rgb(245, 245, 242);
    pub const INK: Color32 = Color32::from_rgb(20, 20, 20);
    pub const FAINT: Color32 = Color32::from_rgb(120, 120, 120);
    pub const SELECTION: Color32 = Color32::from_rgb(208, 218, 235);
    pub const HOVER: Color32 = Color32::from_rgb(230, 233, 238);
}

/// Theme configuration for the shelf panel.
pub struct ShelfTheme {
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for ShelfTheme {
    fn default() -> Self {
        Self {
            window_padding: 6.0,
            item_spacing: 3.0,
        }
    }
}

impl ShelfTheme {
    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        let mut visuals = Visuals::light();
        visuals.window_fill = ShelfColors::BG;
        visuals.panel_fill = ShelfColors::BG;
        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, ShelfColors::INK);
        visuals.selection.bg_fill = ShelfColors::SELECTION;
        visuals.selection.stroke = Stroke::new(1.0, ShelfColors::INK);

        let flat = |ws: &mut egui::style::WidgetVisuals| {
            ws.rounding = Rounding::ZERO;
            ws.bg_stroke = Stroke::new(1.0, ShelfColors::FAINT);
        };
        flat(&mut visuals.widgets.noninteractive);
        flat(&mut visuals.widgets.inactive);
        flat(&mut visuals.widgets.hovered);
        flat(&mut visuals.widgets.active);
        flat(&mut visuals.widgets.open);

        style.visuals = visuals;
        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 3.0);

        ctx.set_style(style);
    }

    /// Frame for the borderless companion window: filled, outlined.
    pub fn grip_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(ShelfColors::BG)
            .stroke(Stroke::new(1.0, ShelfColors::INK))
            .inner_margin(egui::Margin::same(8.0))
    }
}

/// Menu bar styling helper.
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::none()
        .fill(ShelfColors::BG)
        .stroke(Stroke::new(1.0, ShelfColors::FAINT))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner)
        .inner
}
