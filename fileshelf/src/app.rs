//! The shelf panel application
//!
//! All model mutation happens here, in response to discrete input events:
//! OS file drops add entries, the drag controller turns gestures into
//! reorders or removals, and the context menu covers open/remove. The
//! model persists itself; this file only renders and routes events.

use egui::{Align2, Context, FontId, Pos2, Rect, Sense, Stroke, Vec2};
use shelfcore::icons::{self, IconResolver};
use shelfcore::launch;
use shelfcore::model::ShelfModel;
use shelfcore::reorder::{DragPhase, DragReorderController, DropOutcome, DropTarget};
use shelfcore::store::{ShelfStore, WindowGeometry};
use shelfcore::theme::{menu_bar, ShelfColors, ShelfTheme};
use shelfcore::widgets::{drag_ghost, status_bar};
use std::path::PathBuf;
use std::time::Instant;

const ROW_HEIGHT: f32 = 26.0;

/// How long a status message stays up.
const STATUS_SECS: u64 = 4;

pub struct ShelfApp {
    model: ShelfModel,
    reorder: DragReorderController,
    icons: IconResolver,
    /// Geometry record store (the model carries its own shelf store).
    store: ShelfStore,
    /// Selection by path, so it survives reorders.
    selected: Option<PathBuf>,
    status_message: String,
    status_time: Instant,
    show_about: bool,
    show_grip_demo: bool,
    /// List bounds from the current frame, for drag-out detection.
    list_rect: Rect,
    /// Files are being held over the window (drop hint).
    files_hovering: bool,
    /// Latest observed window placement, written once at shutdown.
    pending_geometry: Option<WindowGeometry>,
}

impl ShelfApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            model: ShelfModel::load(ShelfStore::new()),
            reorder: DragReorderController::new(),
            icons: IconResolver::new(),
            store: ShelfStore::new(),
            selected: None,
            status_message: "drop files here to pin them".to_string(),
            status_time: Instant::now(),
            show_about: false,
            show_grip_demo: false,
            list_rect: Rect::NOTHING,
            files_hovering: false,
            pending_geometry: None,
        }
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
        self.status_time = Instant::now();
    }

    /// Files dropped onto the window from outside are pinned, duplicates
    /// suppressed by the model.
    fn intake_file_drops(&mut self, ctx: &Context) {
        self.files_hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());

        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if dropped.is_empty() {
            return;
        }

        let mut added = 0;
        let mut already = 0;
        for path in dropped {
            if self.model.add(path) {
                added += 1;
            } else {
                already += 1;
            }
        }
        match (added, already) {
            (0, _) => self.set_status("already on the shelf"),
            (1, 0) => self.set_status("pinned 1 file"),
            (n, 0) => self.set_status(format!("pinned {} files", n)),
            (n, d) => self.set_status(format!("pinned {} files ({} already here)", n, d)),
        }
    }

    fn open_entry(&mut self, path: &PathBuf) {
        match launch::launch(path) {
            Ok(()) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.to_string_lossy().into_owned());
                self.set_status(format!("opening {}", name));
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    fn draw_menu_bar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("menu_bar")
            .frame(egui::Frame::none().fill(ShelfColors::BG))
            .show(ctx, |ui| {
                menu_bar(ui, |ui| {
                    ui.menu_button("shelf", |ui| {
                        let has_selection = self.selected.is_some();
                        if ui
                            .add_enabled(has_selection, egui::Button::new("open"))
                            .clicked()
                        {
                            if let Some(path) = self.selected.clone() {
                                self.open_entry(&path);
                            }
                            ui.close_menu();
                        }
                        if ui
                            .add_enabled(has_selection, egui::Button::new("remove from shelf"))
                            .clicked()
                        {
                            if let Some(path) = self.selected.take() {
                                self.model.remove(&path);
                                self.set_status("removed");
                            }
                            ui.close_menu();
                        }
                        ui.separator();
                        if ui.button("drag-handle demo").clicked() {
                            self.show_grip_demo = true;
                            ui.close_menu();
                        }
                        if ui.button("about").clicked() {
                            self.show_about = true;
                            ui.close_menu();
                        }
                        ui.separator();
                        if ui.button("quit").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let count = self.model.len();
                        let text = match count {
                            0 => "empty".to_string(),
                            1 => "1 pinned".to_string(),
                            n => format!("{} pinned", n),
                        };
                        ui.label(
                            egui::RichText::new(text)
                                .size(11.0)
                                .color(ShelfColors::FAINT),
                        );
                    });
                });
            });
    }

    fn draw_status_bar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .frame(egui::Frame::none().fill(ShelfColors::BG))
            .show(ctx, |ui| {
                let text = if self.status_time.elapsed().as_secs() < STATUS_SECS {
                    self.status_message.clone()
                } else if self.reorder.is_dragging() {
                    "drag out of the list to remove".to_string()
                } else {
                    "double-click to open".to_string()
                };
                status_bar(ui, &text);
            });
    }

    fn render_list(&mut self, ui: &mut egui::Ui) {
        let panel_rect = ui.available_rect_before_wrap();
        self.list_rect = panel_rect;

        // clone display data up front so event handling below can borrow
        // the model mutably
        let entries: Vec<(PathBuf, String, bool)> = self
            .model
            .snapshot()
            .iter()
            .map(|e| (e.path.clone(), e.display_name(), e.path.exists()))
            .collect();

        let pointer_pos = ui.input(|i| i.pointer.interact_pos());
        let primary_pressed = ui.input(|i| i.pointer.primary_pressed());
        let primary_down = ui.input(|i| i.pointer.primary_down());
        let primary_released = ui.input(|i| i.pointer.primary_released());

        let mut press_on: Option<(PathBuf, Pos2)> = None;
        let mut select_action: Option<PathBuf> = None;
        let mut open_action: Option<PathBuf> = None;
        let mut remove_action: Option<PathBuf> = None;
        let mut row_rects: Vec<(PathBuf, Rect)> = Vec::new();

        if entries.is_empty() {
            ui.painter().text(
                panel_rect.center(),
                Align2::CENTER_CENTER,
                "drop files here",
                FontId::proportional(13.0),
                ShelfColors::FAINT,
            );
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (path, name, exists) in &entries {
                    let (rect, response) = ui.allocate_exact_size(
                        egui::vec2(ui.available_width(), ROW_HEIGHT),
                        Sense::click(),
                    );
                    row_rects.push((path.clone(), rect));

                    let is_selected = self.selected.as_deref() == Some(path.as_path());
                    let is_dragged = self.reorder.dragging_path() == Some(path.as_path());

                    if ui.is_rect_visible(rect) {
                        let painter = ui.painter();
                        if is_selected {
                            painter.rect_filled(rect, 0.0, ShelfColors::SELECTION);
                        } else if response.hovered() {
                            painter.rect_filled(rect, 0.0, ShelfColors::HOVER);
                        }
                        if is_dragged {
                            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, ShelfColors::FAINT));
                        }

                        // icon: thumbnail for images, category glyph otherwise
                        let icon_px = 18.0;
                        let icon_center = egui::pos2(rect.min.x + 4.0 + icon_px / 2.0, rect.center().y);
                        if let Some(tex) = self.icons.resolve(ui.ctx(), path) {
                            let tex_size = tex.size_vec2();
                            let scale = icon_px / tex_size.x.max(tex_size.y);
                            let icon_rect = Rect::from_center_size(icon_center, tex_size * scale);
                            painter.image(
                                tex.id(),
                                icon_rect,
                                Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                                egui::Color32::WHITE,
                            );
                        } else {
                            painter.text(
                                icon_center,
                                Align2::CENTER_CENTER,
                                icons::glyph(path),
                                FontId::proportional(14.0),
                                ShelfColors::INK,
                            );
                        }

                        let text_color = if *exists { ShelfColors::INK } else { ShelfColors::FAINT };
                        painter.text(
                            egui::pos2(rect.min.x + 4.0 + icon_px + 6.0, rect.center().y),
                            Align2::LEFT_CENTER,
                            name,
                            FontId::proportional(13.0),
                            text_color,
                        );
                        if !exists {
                            painter.text(
                                egui::pos2(rect.max.x - 6.0, rect.center().y),
                                Align2::RIGHT_CENTER,
                                "missing",
                                FontId::proportional(10.0),
                                ShelfColors::FAINT,
                            );
                        }
                    }

                    // arm the drag controller on press; confirmation happens
                    // in the pointer-move handling below
                    if primary_pressed && response.hovered() {
                        if let Some(pos) = pointer_pos {
                            press_on = Some((path.clone(), pos));
                        }
                    }

                    if response.clicked() {
                        select_action = Some(path.clone());
                    }
                    if response.double_clicked() {
                        open_action = Some(path.clone());
                    }
                    response.context_menu(|ui| {
                        if ui.button("open").clicked() {
                            open_action = Some(path.clone());
                            ui.close_menu();
                        }
                        if ui.button("remove from shelf").clicked() {
                            remove_action = Some(path.clone());
                            ui.close_menu();
                        }
                    });
                }
            });

        // drop hint while files are held over the window
        if self.files_hovering {
            let painter = ui.painter();
            painter.rect_stroke(panel_rect.shrink(2.0), 0.0, Stroke::new(2.0, ShelfColors::INK));
            painter.text(
                panel_rect.center(),
                Align2::CENTER_CENTER,
                "release to pin",
                FontId::proportional(13.0),
                ShelfColors::INK,
            );
        }

        // ---- gesture wiring ----

        if let Some((path, pos)) = press_on {
            self.reorder.on_pointer_down(&path, pos);
        }

        if primary_down {
            match pointer_pos {
                Some(pos) => {
                    let _ = self.reorder.on_pointer_move(pos);
                    if self.reorder.is_dragging() && !self.list_rect.contains(pos) {
                        self.reorder.on_drag_leave_bounds();
                    }
                }
                // pointer left the window entirely while dragging
                None => self.reorder.on_drag_leave_bounds(),
            }
        }

        if primary_released && *self.reorder.phase() != DragPhase::Idle {
            let target = match pointer_pos {
                Some(pos) if self.list_rect.contains(pos) => row_rects
                    .iter()
                    .find(|(_, r)| r.contains(pos))
                    .map(|(p, _)| DropTarget::Entry(p.as_path()))
                    .unwrap_or(DropTarget::Vacant),
                _ => DropTarget::Vacant,
            };
            match self.reorder.on_drop(target, &mut self.model) {
                DropOutcome::Removed(path) => {
                    if self.selected.as_ref() == Some(&path) {
                        self.selected = None;
                    }
                    let entry_name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    self.set_status(format!("removed {}", entry_name));
                }
                DropOutcome::Moved { path, .. } => {
                    self.selected = Some(path);
                }
                DropOutcome::None => {}
            }
        }

        // ---- deferred row actions ----

        if let Some(path) = select_action {
            self.selected = Some(path);
        }
        if let Some(path) = remove_action {
            if self.model.remove(&path) {
                if self.selected.as_ref() == Some(&path) {
                    self.selected = None;
                }
                self.set_status("removed");
            }
        }
        if let Some(path) = open_action {
            self.open_entry(&path);
        }
    }

    fn draw_drag_ghost(&self, ctx: &Context) {
        let Some(path) = self.reorder.dragging_path() else {
            return;
        };
        let Some(pos) = ctx.pointer_hover_pos() else {
            return;
        };
        let label = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let removing = matches!(self.reorder.phase(), DragPhase::DraggingOutside { .. });
        drag_ghost(ctx, pos, &label, removing);
    }

    fn draw_about(&mut self, ctx: &Context) {
        if !self.show_about {
            return;
        }
        egui::Window::new("about fileshelf")
            .collapsible(false)
            .resizable(false)
            .default_width(240.0)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.heading("fileshelf");
                    ui.label("version 0.1.0");
                    ui.add_space(8.0);
                    ui.label("a shelf for pinned file shortcuts");
                    ui.add_space(4.0);
                    ui.label("drop files to pin");
                    ui.label("drag within the list to reorder");
                    ui.label("drag out of the list to remove");
                    ui.add_space(12.0);
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                    ui.add_space(4.0);
                });
            });
    }

    /// The companion window: no decorations, dragged by grabbing its body.
    fn draw_grip_demo(&mut self, ctx: &Context) {
        if !self.show_grip_demo {
            return;
        }
        ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("fileshelf_grip_demo"),
            egui::ViewportBuilder::default()
                .with_title("shelf grip")
                .with_inner_size([240.0, 120.0])
                .with_decorations(false)
                .with_resizable(false),
            |ctx, _class| {
                egui::CentralPanel::default()
                    .frame(ShelfTheme::grip_frame())
                    .show(ctx, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(14.0);
                            ui.label("borderless window");
                            ui.label(
                                egui::RichText::new("hold and drag anywhere to move")
                                    .size(11.0)
                                    .color(ShelfColors::FAINT),
                            );
                            ui.add_space(8.0);
                            if ui.button("close").clicked() {
                                self.show_grip_demo = false;
                            }
                        });

                        // whole-body drag; widgets above still win the pointer
                        let response = ui.interact(
                            ui.max_rect(),
                            ui.id().with("grip_surface"),
                            Sense::click_and_drag(),
                        );
                        if response.drag_started_by(egui::PointerButton::Primary) {
                            ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
                        }
                    });

                if ctx.input(|i| i.viewport().close_requested()) {
                    self.show_grip_demo = false;
                }
            },
        );
    }

    fn track_geometry(&mut self, ctx: &Context) {
        let (outer, inner) = ctx.input(|i| (i.viewport().outer_rect, i.viewport().inner_rect));
        if let (Some(outer), Some(inner)) = (outer, inner) {
            self.pending_geometry = Some(WindowGeometry {
                left: outer.min.x,
                top: outer.min.y,
                width: inner.width(),
                height: inner.height(),
            });
        }
    }
}

impl eframe::App for ShelfApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.intake_file_drops(ctx);
        self.track_geometry(ctx);

        self.draw_menu_bar(ctx);
        self.draw_status_bar(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(ShelfColors::BG).inner_margin(egui::Margin::same(4.0)))
            .show(ctx, |ui| {
                self.render_list(ui);
            });

        self.draw_drag_ghost(ctx);
        self.draw_about(ctx);
        self.draw_grip_demo(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(geometry) = self.pending_geometry {
            if let Err(e) = self.store.save_geometry(&geometry) {
                eprintln!("[fileshelf] could not save window geometry: {}", e);
            }
        }
    }
}
