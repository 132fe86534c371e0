//! Persistence for the two shelf records
//!
//! The shelf (an ordered list of absolute paths) and the window geometry
//! live in two separate JSON files so that corruption in one can never
//! take the other down with it. Loads degrade to defaults; saves replace
//! the whole record atomically (temp file + rename) so a reader never
//! observes a half-written file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

const SHELF_FILE: &str = "shelf.json";
const GEOMETRY_FILE: &str = "window.json";

/// Outer window placement, written once at shutdown.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct WindowGeometry {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// File-backed store for the shelf record and the window geometry record.
pub struct ShelfStore {
    dir: PathBuf,
}

impl ShelfStore {
    /// Store rooted at the user's config directory.
    pub fn new() -> Self {
        let dir = directories::ProjectDirs::from("", "", "fileshelf")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("fileshelf"));
        Self { dir }
    }

    /// Store rooted at an explicit directory (tests, portable installs).
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn shelf_path(&self) -> PathBuf {
        self.dir.join(SHELF_FILE)
    }

    fn geometry_path(&self) -> PathBuf {
        self.dir.join(GEOMETRY_FILE)
    }

    /// Read the persisted shelf. Absent or unparsable records load as an
    /// empty shelf; a parse failure is logged, never escalated.
    pub fn load_shelf(&self) -> Vec<PathBuf> {
        let path = self.shelf_path();
        let json = match std::fs::read_to_string(&path) {
            Ok(s) => s,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&json) {
            Ok(paths) => paths,
            Err(e) => {
                eprintln!("[fileshelf] shelf record unreadable, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Replace the persisted shelf with `paths`.
    pub fn save_shelf(&self, paths: &[PathBuf]) -> Result<()> {
        let json = serde_json::to_string_pretty(paths)?;
        self.write_record(&self.shelf_path(), &json)
    }

    /// Read the persisted window geometry, if any.
    pub fn load_geometry(&self) -> Option<WindowGeometry> {
        let json = std::fs::read_to_string(self.geometry_path()).ok()?;
        match serde_json::from_str(&json) {
            Ok(g) => Some(g),
            Err(e) => {
                eprintln!("[fileshelf] geometry record unreadable, ignoring: {}", e);
                None
            }
        }
    }

    /// Replace the persisted window geometry.
    pub fn save_geometry(&self, geometry: &WindowGeometry) -> Result<()> {
        let json = serde_json::to_string_pretty(geometry)?;
        self.write_record(&self.geometry_path(), &json)
    }

    /// Whole-record replace: write to a sibling temp file, then rename over
    /// the target. Rename is atomic on the same filesystem, so readers see
    /// either the old record or the new one, never a partial write.
    fn write_record(&self, path: &Path, contents: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, contents)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl Default for ShelfStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_store(tag: &str) -> (ShelfStore, PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "fileshelf_store_{}_{}",
            tag,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        (ShelfStore::at(&dir), dir)
    }

    #[test]
    fn shelf_round_trips_in_order() {
        let (store, dir) = scratch_store("roundtrip");
        let paths = vec![
            PathBuf::from("/tmp/b.txt"),
            PathBuf::from("/tmp/a.txt"),
            PathBuf::from("/tmp/c.png"),
        ];
        store.save_shelf(&paths).unwrap();
        assert_eq!(store.load_shelf(), paths);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn absent_record_loads_empty() {
        let (store, dir) = scratch_store("absent");
        assert!(store.load_shelf().is_empty());
        assert!(store.load_geometry().is_none());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn corrupt_shelf_loads_empty() {
        let (store, dir) = scratch_store("corrupt");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(SHELF_FILE), "{not json").unwrap();
        assert!(store.load_shelf().is_empty());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn save_replaces_whole_record() {
        let (store, dir) = scratch_store("replace");
        store.save_shelf(&[PathBuf::from("/tmp/a"), PathBuf::from("/tmp/b")]).unwrap();
        store.save_shelf(&[PathBuf::from("/tmp/b")]).unwrap();
        assert_eq!(store.load_shelf(), vec![PathBuf::from("/tmp/b")]);
        // no temp file left behind
        assert!(!dir.join("shelf.json.tmp").exists());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn geometry_round_trips() {
        let (store, dir) = scratch_store("geometry");
        let g = WindowGeometry { left: 60.0, top: 40.0, width: 320.0, height: 480.0 };
        store.save_geometry(&g).unwrap();
        assert_eq!(store.load_geometry(), Some(g));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn corrupt_geometry_loads_none() {
        let (store, dir) = scratch_store("badgeo");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(GEOMETRY_FILE), "[1, 2, 3]").unwrap();
        assert!(store.load_geometry().is_none());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn records_are_independent() {
        let (store, dir) = scratch_store("independent");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(SHELF_FILE), "garbage").unwrap();
        let g = WindowGeometry { left: 0.0, top: 0.0, width: 100.0, height: 100.0 };
        store.save_geometry(&g).unwrap();
        assert!(store.load_shelf().is_empty());
        assert_eq!(store.load_geometry(), Some(g));
        let _ = std::fs::remove_dir_all(dir);
    }
}
