//! Grayscale tool.

use tiny_skia::{ColorU8, Pixmap};

use crate::error::Result;

use super::{Tool, ToolOptions};

/// Converts an image to grayscale using Rec. 709 luma weights.
pub struct GrayscaleTool;

impl Tool for GrayscaleTool {
    fn id(&self) -> &'static str {
        "grayscale"
    }

    fn summary(&self) -> &'static str {
        "Convert a PNG image to grayscale"
    }

    fn apply(&self, source: &Pixmap, _options: &ToolOptions) -> Result<Pixmap> {
        let mut output = source.clone();

        for pixel in output.pixels_mut() {
            let color = pixel.demultiply();
            let luma = luma709(color.red(), color.green(), color.blue());
            *pixel = ColorU8::from_rgba(luma, luma, luma, color.alpha()).premultiply();
        }

        Ok(output)
    }
}

/// Rec. 709 luma, integer arithmetic, rounded to nearest.
fn luma709(r: u8, g: u8, b: u8) -> u8 {
    let weighted = 2126 * u32::from(r) + 7152 * u32::from(g) + 722 * u32::from(b);
    ((weighted + 5000) / 10000) as u8
}
