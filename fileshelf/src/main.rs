//! fileshelf — a floating panel of pinned file shortcuts
//!
//! Drop files on the window to pin them; drag within the list to reorder;
//! drag an entry out of the list to remove it; double-click to open.

mod app;

use app::ShelfApp;
use eframe::NativeOptions;
use shelfcore::ShelfStore;

fn main() -> eframe::Result<()> {
    let store = ShelfStore::new();

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([300.0, 420.0])
        .with_min_inner_size([220.0, 160.0])
        .with_title("fileshelf");

    // restore last session's placement; absent or corrupt geometry just
    // means the window manager picks
    if let Some(g) = store.load_geometry() {
        viewport = viewport
            .with_position(egui::pos2(g.left, g.top))
            .with_inner_size([g.width, g.height]);
    }

    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "fileshelf",
        options,
        Box::new(|cc| {
            shelfcore::ShelfTheme::default().apply(&cc.egui_ctx);
            Box::new(ShelfApp::new(cc))
        }),
    )
}
