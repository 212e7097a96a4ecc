//! PNG pipeline helpers shared by the tools.
//!
//! Every tool reads a PNG into a [`Pixmap`], transforms it, and writes a
//! PNG back out. Nothing here touches the network: files go from disk to
//! memory and back to disk on the same machine.

use std::path::Path;

use tiny_skia::Pixmap;

use crate::error::{LocalkitError, Result};

/// Whether a path looks like a PNG file.
fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// Load a PNG file into a pixmap.
pub fn load_png(path: &Path) -> Result<Pixmap> {
    if !is_png(path) {
        return Err(LocalkitError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }

    Pixmap::load_png(path).map_err(|e| LocalkitError::ImageDecode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Write a pixmap out as a PNG file.
pub fn save_png(pixmap: &Pixmap, path: &Path) -> Result<()> {
    pixmap.save_png(path).map_err(|e| LocalkitError::ImageEncode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_png_extension_is_rejected_before_reading() {
        let err = load_png(Path::new("/nonexistent/photo.bmp")).unwrap_err();
        assert!(matches!(err, LocalkitError::UnsupportedFormat { .. }));
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        // The file does not exist, so this must get past the format check
        // and fail at decode instead.
        let err = load_png(Path::new("/nonexistent/photo.PNG")).unwrap_err();
        assert!(matches!(err, LocalkitError::ImageDecode { .. }));
    }

    #[test]
    fn round_trip_preserves_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("probe.png");

        let pixmap = Pixmap::new(7, 3).unwrap();
        save_png(&pixmap, &path).unwrap();

        let loaded = load_png(&path).unwrap();
        assert_eq!(loaded.width(), 7);
        assert_eq!(loaded.height(), 3);
    }
}
