//! The shelf — an ordered list of pinned file paths
//!
//! Single source of truth for the running session. Unique by path, order
//! meaningful. Every mutation that actually changes state is followed by a
//! best-effort save; a failed save keeps the in-memory shelf authoritative
//! and the next successful save catches up.

use crate::store::ShelfStore;
use std::path::{Path, PathBuf};

/// One pinned shortcut. The path is the identity; the display name is
/// always derived from it, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfEntry {
    pub path: PathBuf,
}

impl ShelfEntry {
    /// Final path component, falling back to the whole path for roots.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

pub struct ShelfModel {
    entries: Vec<ShelfEntry>,
    store: ShelfStore,
}

impl ShelfModel {
    /// Load the shelf from its persisted record. Duplicate paths in a
    /// hand-edited record are dropped, first occurrence wins.
    pub fn load(store: ShelfStore) -> Self {
        let mut entries: Vec<ShelfEntry> = Vec::new();
        for path in store.load_shelf() {
            if !entries.iter().any(|e| e.path == path) {
                entries.push(ShelfEntry { path });
            }
        }
        Self { entries, store }
    }

    /// Append `path` at the end. Adding an already-present path is a no-op.
    /// Returns whether the shelf changed.
    pub fn add(&mut self, path: PathBuf) -> bool {
        if self.contains(&path) {
            return false;
        }
        self.entries.push(ShelfEntry { path });
        self.persist();
        true
    }

    /// Remove the entry with `path`. Removing an absent path is a no-op.
    pub fn remove(&mut self, path: &Path) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.path != path);
        if self.entries.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Move the entry with `path` to `target_index` (clamped to the valid
    /// range). The index is the current visual position of the drop target,
    /// so it stays meaningful even if the list length changed since the
    /// caller computed it. Moving an entry onto its own position is a no-op.
    pub fn move_to(&mut self, path: &Path, target_index: usize) -> bool {
        let Some(from) = self.index_of(path) else {
            return false;
        };
        let entry = self.entries.remove(from);
        let to = target_index.min(self.entries.len());
        self.entries.insert(to, entry);
        if to == from {
            return false;
        }
        self.persist();
        true
    }

    /// Read-only ordered view for rendering.
    pub fn snapshot(&self) -> &[ShelfEntry] {
        &self.entries
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|e| e.path == path)
    }

    pub fn index_of(&self, path: &Path) -> Option<usize> {
        self.entries.iter().position(|e| e.path == path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best-effort save of the current order. Write failures are logged and
    /// swallowed; the in-memory shelf stays correct for the session.
    fn persist(&self) {
        let paths: Vec<PathBuf> = self.entries.iter().map(|e| e.path.clone()).collect();
        if let Err(e) = self.store.save_shelf(&paths) {
            eprintln!("[fileshelf] could not save shelf: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_model(tag: &str) -> (ShelfModel, PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "fileshelf_model_{}_{}",
            tag,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        (ShelfModel::load(ShelfStore::at(&dir)), dir)
    }

    fn paths(model: &ShelfModel) -> Vec<&str> {
        model
            .snapshot()
            .iter()
            .map(|e| e.path.to_str().unwrap())
            .collect()
    }

    #[test]
    fn add_suppresses_duplicates() {
        let (mut model, dir) = scratch_model("dup");
        assert!(model.add(PathBuf::from("/tmp/a")));
        assert!(model.add(PathBuf::from("/tmp/b")));
        assert!(!model.add(PathBuf::from("/tmp/a")));
        assert_eq!(paths(&model), ["/tmp/a", "/tmp/b"]);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn remove_is_idempotent() {
        let (mut model, dir) = scratch_model("remove");
        model.add(PathBuf::from("/tmp/a"));
        assert!(model.remove(Path::new("/tmp/a")));
        assert!(!model.remove(Path::new("/tmp/a")));
        assert!(!model.contains(Path::new("/tmp/a")));
        assert!(model.is_empty());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn move_to_target_index() {
        let (mut model, dir) = scratch_model("move");
        model.add(PathBuf::from("/tmp/a"));
        model.add(PathBuf::from("/tmp/b"));
        model.add(PathBuf::from("/tmp/c"));
        // drop a on c: target index 2
        assert!(model.move_to(Path::new("/tmp/a"), 2));
        assert_eq!(paths(&model), ["/tmp/b", "/tmp/c", "/tmp/a"]);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn move_to_own_position_is_noop() {
        let (mut model, dir) = scratch_model("noop");
        model.add(PathBuf::from("/tmp/a"));
        model.add(PathBuf::from("/tmp/b"));
        model.add(PathBuf::from("/tmp/c"));
        assert!(!model.move_to(Path::new("/tmp/a"), 0));
        assert_eq!(paths(&model), ["/tmp/a", "/tmp/b", "/tmp/c"]);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn move_clamps_out_of_range_index() {
        let (mut model, dir) = scratch_model("clamp");
        model.add(PathBuf::from("/tmp/a"));
        model.add(PathBuf::from("/tmp/b"));
        assert!(model.move_to(Path::new("/tmp/a"), 99));
        assert_eq!(paths(&model), ["/tmp/b", "/tmp/a"]);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn move_absent_path_is_noop() {
        let (mut model, dir) = scratch_model("absent");
        model.add(PathBuf::from("/tmp/a"));
        assert!(!model.move_to(Path::new("/tmp/missing"), 0));
        assert_eq!(paths(&model), ["/tmp/a"]);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn mutations_persist_and_reload() {
        let dir = std::env::temp_dir().join(format!("fileshelf_model_reload_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        {
            let mut model = ShelfModel::load(ShelfStore::at(&dir));
            model.add(PathBuf::from("/tmp/a"));
            model.add(PathBuf::from("/tmp/b"));
            model.add(PathBuf::from("/tmp/c"));
            model.move_to(Path::new("/tmp/c"), 0);
            model.remove(Path::new("/tmp/a"));
        }
        let reloaded = ShelfModel::load(ShelfStore::at(&dir));
        assert_eq!(paths(&reloaded), ["/tmp/c", "/tmp/b"]);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn load_drops_duplicates_from_edited_record() {
        let dir = std::env::temp_dir().join(format!("fileshelf_model_dedup_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let store = ShelfStore::at(&dir);
        store
            .save_shelf(&[
                PathBuf::from("/tmp/a"),
                PathBuf::from("/tmp/b"),
                PathBuf::from("/tmp/a"),
            ])
            .unwrap();
        let model = ShelfModel::load(ShelfStore::at(&dir));
        assert_eq!(paths(&model), ["/tmp/a", "/tmp/b"]);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn display_name_derives_from_path() {
        let entry = ShelfEntry { path: PathBuf::from("/home/u/notes.txt") };
        assert_eq!(entry.display_name(), "notes.txt");
        let root = ShelfEntry { path: PathBuf::from("/") };
        assert_eq!(root.display_name(), "/");
    }
}
