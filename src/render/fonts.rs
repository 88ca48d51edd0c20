use once_cell::sync::Lazy;
use rusttype::Font;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

static FONT_CACHE: Lazy<Mutex<HashMap<PathBuf, Arc<Font<'static>>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

const SYSTEM_CANDIDATES: [&str; 6] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// A face the compositor can rasterize with. Either a parsed TrueType font or
/// the built-in 8x8 bitmap face.
#[derive(Clone)]
pub enum FontFace {
    TrueType(Arc<Font<'static>>),
    Bitmap,
}

/// Resolve a drawable face. Font availability is environment-dependent and
/// never fatal: the configured file is tried first, then the standard system
/// locations, and any failure falls back to the bitmap face.
pub fn resolve(font_file: Option<&Path>) -> FontFace {
    if let Some(path) = font_file {
        if let Some(font) = load_cached(path) {
            return FontFace::TrueType(font);
        }
        log::debug!(
            "configured font {} unavailable, trying system fonts",
            path.display()
        );
    }

    for candidate in SYSTEM_CANDIDATES {
        if let Some(font) = load_cached(Path::new(candidate)) {
            return FontFace::TrueType(font);
        }
    }

    log::debug!("no TrueType face available, using built-in bitmap font");
    FontFace::Bitmap
}

fn load_cached(path: &Path) -> Option<Arc<Font<'static>>> {
    if let Some(f) = FONT_CACHE.lock().unwrap().get(path) {
        return Some(Arc::clone(f));
    }

    let bytes = std::fs::read(path).ok()?;
    let font = Font::try_from_vec(bytes)?;

    let font = Arc::new(font);
    FONT_CACHE
        .lock()
        .unwrap()
        .insert(path.to_path_buf(), Arc::clone(&font));
    Some(font)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_an_error() {
        assert!(load_cached(Path::new("/no/such/font.ttf")).is_none());
        // resolve never fails, whatever the environment provides
        let _face = resolve(Some(Path::new("/no/such/font.ttf")));
    }
}
