//! shelfcore — shared library for the fileshelf panel
//!
//! The panel itself (list rendering, menus, windows) lives in the
//! `fileshelf` binary crate. Everything with actual invariants is here:
//! the ordered shelf model, the drag-reorder state machine, and the
//! persistence store.

pub mod icons;
pub mod launch;
pub mod model;
pub mod reorder;
pub mod store;
pub mod theme;
pub mod widgets;

pub use model::{ShelfEntry, ShelfModel};
pub use reorder::DragReorderController;
pub use store::{ShelfStore, WindowGeometry};
pub use theme::ShelfTheme;
