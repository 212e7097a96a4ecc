//! Invert tool.

use tiny_skia::{ColorU8, Pixmap};

use crate::error::Result;

use super::{Tool, ToolOptions};

/// Inverts the color channels of an image, leaving alpha untouched.
pub struct InvertTool;

impl Tool for InvertTool {
    fn id(&self) -> &'static str {
        "invert"
    }

    fn summary(&self) -> &'static str {
        "Invert the colors of a PNG image"
    }

    fn apply(&self, source: &Pixmap, _options: &ToolOptions) -> Result<Pixmap> {
        let mut output = source.clone();

        for pixel in output.pixels_mut() {
            let color = pixel.demultiply();
            *pixel = ColorU8::from_rgba(
                255 - color.red(),
                255 - color.green(),
                255 - color.blue(),
                color.alpha(),
            )
            .premultiply();
        }

        Ok(output)
    }
}
