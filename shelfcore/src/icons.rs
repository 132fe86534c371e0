//! Best-effort icon resolution for shelf entries
//!
//! Raster-image entries get a small decoded thumbnail; everything else
//! falls back to a text glyph picked by extension category. Resolution
//! never fails loudly — an unreadable or vanished file simply renders
//! with the fallback glyph. Shelf correctness never depends on an icon.

use egui::{ColorImage, Context, TextureHandle, TextureOptions};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Thumbnail edge length in pixels.
const THUMB_SIZE: u32 = 32;

/// Cache cap; cleared wholesale when reached.
const CACHE_CAP: usize = 64;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Resolves per-entry icons, caching decoded thumbnails by path.
pub struct IconResolver {
    thumbnails: HashMap<String, TextureHandle>,
    /// Paths that failed to decode — never retried.
    failed: HashSet<String>,
}

impl IconResolver {
    pub fn new() -> Self {
        Self {
            thumbnails: HashMap::new(),
            failed: HashSet::new(),
        }
    }

    /// Thumbnail texture for `path`, if it is a decodable raster image.
    /// Any read or decode failure marks the path failed and yields `None`
    /// from then on.
    pub fn resolve(&mut self, ctx: &Context, path: &Path) -> Option<TextureHandle> {
        if !is_image(path) {
            return None;
        }
        let key = path.to_string_lossy().into_owned();

        if let Some(tex) = self.thumbnails.get(&key) {
            return Some(tex.clone());
        }
        if self.failed.contains(&key) {
            return None;
        }
        if self.thumbnails.len() >= CACHE_CAP {
            self.thumbnails.clear();
        }

        if let Ok(bytes) = std::fs::read(path) {
            if let Ok(img) = image::load_from_memory(&bytes) {
                let thumb = img.thumbnail(THUMB_SIZE, THUMB_SIZE).to_rgba8();
                let (w, h) = thumb.dimensions();
                let color_image =
                    ColorImage::from_rgba_unmultiplied([w as usize, h as usize], thumb.as_raw());
                let texture =
                    ctx.load_texture(format!("shelf_icon_{}", key), color_image, TextureOptions::NEAREST);
                self.thumbnails.insert(key, texture.clone());
                return Some(texture);
            }
        }

        self.failed.insert(key);
        None
    }

    /// Drop cached thumbnails so edited files re-resolve.
    pub fn clear(&mut self) {
        self.thumbnails.clear();
        self.failed.clear();
    }
}

impl Default for IconResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default()
}

fn is_image(path: &Path) -> bool {
    IMAGE_EXTENSIONS.contains(&extension_of(path).as_str())
}

/// Fallback glyph by extension category, for entries with no thumbnail.
pub fn glyph(path: &Path) -> &'static str {
    if path.is_dir() {
        return "📁";
    }
    match extension_of(path).as_str() {
        "png" | "jpg" | "jpeg" | "gif" | "bmp" | "svg" => "🖼",
        "mp3" | "wav" | "flac" | "ogg" | "mid" | "midi" => "🎵",
        "mp4" | "mkv" | "webm" | "avi" => "🎞",
        "pdf" | "epub" => "📕",
        "zip" | "tar" | "gz" | "xz" | "7z" => "🗜",
        "sh" | "rs" | "py" | "js" | "c" | "h" | "toml" | "json" => "📜",
        _ => "📄",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn glyph_by_category() {
        assert_eq!(glyph(Path::new("/tmp/x/song.mp3")), "🎵");
        assert_eq!(glyph(Path::new("/tmp/x/shot.PNG")), "🖼");
        assert_eq!(glyph(Path::new("/tmp/x/book.pdf")), "📕");
        assert_eq!(glyph(Path::new("/tmp/x/readme")), "📄");
    }

    #[test]
    fn only_raster_extensions_resolve() {
        assert!(is_image(Path::new("/tmp/a.png")));
        assert!(is_image(Path::new("/tmp/a.JPEG")));
        assert!(!is_image(Path::new("/tmp/a.txt")));
        assert!(!is_image(Path::new("/tmp/a")));
    }

    #[test]
    fn unreadable_image_is_marked_failed() {
        let ctx = Context::default();
        let mut resolver = IconResolver::new();
        let missing = PathBuf::from("/tmp/fileshelf_no_such_image.png");
        assert!(resolver.resolve(&ctx, &missing).is_none());
        assert!(resolver.failed.contains(&missing.to_string_lossy().into_owned()));
        // second call short-circuits on the failed set
        assert!(resolver.resolve(&ctx, &missing).is_none());
    }
}
