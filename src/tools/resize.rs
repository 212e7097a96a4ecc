//! Resize tool.

use tiny_skia::{FilterQuality, Pixmap, PixmapPaint, Transform};

use crate::error::{LocalkitError, Result};

use super::{Tool, ToolOptions};

/// Resizes an image to a target width and/or height.
///
/// When only one dimension is given, the other is derived so the aspect
/// ratio is preserved.
pub struct ResizeTool;

impl Tool for ResizeTool {
    fn id(&self) -> &'static str {
        "resize"
    }

    fn summary(&self) -> &'static str {
        "Resize a PNG image (--width and/or --height)"
    }

    fn apply(&self, source: &Pixmap, options: &ToolOptions) -> Result<Pixmap> {
        let (source_w, source_h) = (source.width(), source.height());

        let (target_w, target_h) = match (options.width, options.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, scaled(source_h, w, source_w)),
            (None, Some(h)) => (scaled(source_w, h, source_h), h),
            (None, None) => {
                return Err(LocalkitError::InvalidToolArgs {
                    tool: self.id().to_string(),
                    message: "at least one of --width or --height is required".to_string(),
                })
            }
        };

        if target_w == 0 || target_h == 0 {
            return Err(LocalkitError::InvalidToolArgs {
                tool: self.id().to_string(),
                message: "target dimensions must be non-zero".to_string(),
            });
        }

        let mut target = Pixmap::new(target_w, target_h).ok_or_else(|| {
            LocalkitError::InvalidToolArgs {
                tool: self.id().to_string(),
                message: format!("cannot allocate a {}x{} surface", target_w, target_h),
            }
        })?;

        let scale_x = target_w as f32 / source_w as f32;
        let scale_y = target_h as f32 / source_h as f32;
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        target.draw_pixmap(
            0,
            0,
            source.as_ref(),
            &paint,
            Transform::from_scale(scale_x, scale_y),
            None,
        );

        Ok(target)
    }
}

/// Scale `dim` by `num/den`, rounded, clamped to at least one pixel.
fn scaled(dim: u32, num: u32, den: u32) -> u32 {
    let scaled = (u64::from(dim) * u64::from(num) + u64::from(den) / 2) / u64::from(den);
    (scaled as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dimensions_are_honored() {
        let source = Pixmap::new(10, 10).unwrap();
        let options = ToolOptions {
            width: Some(4),
            height: Some(6),
            ..ToolOptions::default()
        };
        let output = ResizeTool.apply(&source, &options).unwrap();
        assert_eq!((output.width(), output.height()), (4, 6));
    }

    #[test]
    fn missing_dimension_preserves_aspect_ratio() {
        let source = Pixmap::new(100, 50) .unwrap();
        let options = ToolOptions {
            width: Some(40),
            ..ToolOptions::default()
        };
        let output = ResizeTool.apply(&source, &options).unwrap();
        assert_eq!((output.width(), output.height()), (40, 20));
    }

    #[test]
    fn no_dimensions_is_an_error() {
        let source = Pixmap::new(10, 10).unwrap();
        let err = ResizeTool.apply(&source, &ToolOptions::default()).unwrap_err();
        assert!(matches!(err, LocalkitError::InvalidToolArgs { .. }));
    }

    #[test]
    fn zero_dimension_is_an_error() {
        let source = Pixmap::new(10, 10).unwrap();
        let options = ToolOptions {
            width: Some(0),
            height: Some(5),
            ..ToolOptions::default()
        };
        assert!(ResizeTool.apply(&source, &options).is_err());
    }

    #[test]
    fn downscale_never_collapses_to_zero() {
        assert_eq!(scaled(1, 1, 1000), 1);
    }
}
