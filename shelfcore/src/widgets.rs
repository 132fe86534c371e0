//! Shared widgets for the shelf panel

use crate::theme::ShelfColors;
use egui::{Align2, FontId, Pos2, Rect, Stroke, Ui, Vec2};

/// Status bar: filled strip with a 1px top border.
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(ShelfColors::BG)
        .stroke(Stroke::new(1.0, ShelfColors::FAINT))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(11.0).color(ShelfColors::INK));
        });
}

/// Ghost label that trails the pointer while a drag is live. Drawn on the
/// tooltip layer so it floats above the list.
pub fn drag_ghost(ctx: &egui::Context, pos: Pos2, label: &str, removing: bool) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Tooltip,
        egui::Id::new("shelf_drag_ghost"),
    ));

    let text = if removing {
        format!("✕ {}", label)
    } else {
        label.to_string()
    };
    let font = FontId::proportional(12.0);
    let galley_size = painter
        .layout_no_wrap(text.clone(), font.clone(), ShelfColors::INK)
        .size();
    let pad = Vec2::new(6.0, 3.0);
    let rect = Rect::from_min_size(pos + Vec2::new(12.0, 4.0), galley_size + pad * 2.0);

    painter.rect_filled(rect, 0.0, ShelfColors::BG);
    painter.rect_stroke(rect, 0.0, Stroke::new(1.0, ShelfColors::INK));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        text,
        font,
        ShelfColors::INK,
    );
}
