//! Rotate tool.

use tiny_skia::Pixmap;

use crate::error::{LocalkitError, Result};

use super::{Tool, ToolOptions};

/// Rotates an image by a multiple of 90 degrees.
///
/// Only quarter turns are offered: they are exact, with no resampling and
/// no canvas padding.
pub struct RotateTool;

impl Tool for RotateTool {
    fn id(&self) -> &'static str {
        "rotate"
    }

    fn summary(&self) -> &'static str {
        "Rotate a PNG image by a multiple of 90 degrees (--angle)"
    }

    fn apply(&self, source: &Pixmap, options: &ToolOptions) -> Result<Pixmap> {
        let Some(angle) = options.angle else {
            return Err(LocalkitError::InvalidToolArgs {
                tool: self.id().to_string(),
                message: "--angle is required".to_string(),
            });
        };

        // Normalize to [0, 360). Negative angles rotate counter-clockwise.
        let turns = angle.rem_euclid(360);
        let rotated = match turns {
            0 => Some(source.clone()),
            90 => quarter_turn(source, Quarter::Cw),
            180 => Some(half_turn(source)),
            270 => quarter_turn(source, Quarter::Ccw),
            _ => {
                return Err(LocalkitError::InvalidToolArgs {
                    tool: self.id().to_string(),
                    message: format!("angle must be a multiple of 90, got {}", angle),
                })
            }
        };

        rotated.ok_or_else(|| LocalkitError::InvalidToolArgs {
            tool: self.id().to_string(),
            message: "cannot allocate the rotated surface".to_string(),
        })
    }
}

enum Quarter {
    Cw,
    Ccw,
}

fn quarter_turn(source: &Pixmap, direction: Quarter) -> Option<Pixmap> {
    let (w, h) = (source.width() as usize, source.height() as usize);
    let mut target = Pixmap::new(source.height(), source.width())?;

    let src = source.pixels();
    let (tw, th) = (h, w);
    let dst = target.pixels_mut();
    for dy in 0..th {
        for dx in 0..tw {
            let (sx, sy) = match direction {
                Quarter::Cw => (dy, h - 1 - dx),
                Quarter::Ccw => (w - 1 - dy, dx),
            };
            dst[dy * tw + dx] = src[sy * w + sx];
        }
    }
    Some(target)
}

fn half_turn(source: &Pixmap) -> Pixmap {
    let mut target = source.clone();
    target.pixels_mut().reverse();
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_skia::ColorU8;

    /// A 2x1 pixmap: red on the left, blue on the right.
    fn red_blue() -> Pixmap {
        let mut pixmap = Pixmap::new(2, 1).unwrap();
        pixmap.pixels_mut()[0] = ColorU8::from_rgba(255, 0, 0, 255).premultiply();
        pixmap.pixels_mut()[1] = ColorU8::from_rgba(0, 0, 255, 255).premultiply();
        pixmap
    }

    fn options(angle: i32) -> ToolOptions {
        ToolOptions {
            angle: Some(angle),
            ..ToolOptions::default()
        }
    }

    #[test]
    fn quarter_turn_swaps_dimensions() {
        let output = RotateTool.apply(&red_blue(), &options(90)).unwrap();
        assert_eq!((output.width(), output.height()), (1, 2));
    }

    #[test]
    fn clockwise_turn_moves_left_pixel_to_the_top() {
        let source = red_blue();
        let output = RotateTool.apply(&source, &options(90)).unwrap();
        // Red was at (0,0); after a CW turn it sits at (0,0) of a 1x2 image.
        assert_eq!(output.pixels()[0], source.pixels()[0]);
        assert_eq!(output.pixels()[1], source.pixels()[1]);
    }

    #[test]
    fn half_turn_reverses_pixel_order() {
        let source = red_blue();
        let output = RotateTool.apply(&source, &options(180)).unwrap();
        assert_eq!(output.pixels()[0], source.pixels()[1]);
        assert_eq!(output.pixels()[1], source.pixels()[0]);
    }

    #[test]
    fn four_quarter_turns_are_the_identity() {
        let source = red_blue();
        let mut current = source.clone();
        for _ in 0..4 {
            current = RotateTool.apply(&current, &options(90)).unwrap();
        }
        assert_eq!(current.pixels(), source.pixels());
    }

    #[test]
    fn negative_angle_rotates_counter_clockwise() {
        let source = red_blue();
        let ccw = RotateTool.apply(&source, &options(-90)).unwrap();
        let three_cw = RotateTool.apply(&source, &options(270)).unwrap();
        assert_eq!(ccw.pixels(), three_cw.pixels());
    }

    #[test]
    fn zero_angle_is_a_copy() {
        let source = red_blue();
        let output = RotateTool.apply(&source, &options(360)).unwrap();
        assert_eq!(output.pixels(), source.pixels());
    }

    #[test]
    fn odd_angle_is_rejected() {
        let err = RotateTool.apply(&red_blue(), &options(45)).unwrap_err();
        assert!(matches!(err, LocalkitError::InvalidToolArgs { .. }));
    }

    #[test]
    fn missing_angle_is_rejected() {
        let err = RotateTool
            .apply(&red_blue(), &ToolOptions::default())
            .unwrap_err();
        assert!(matches!(err, LocalkitError::InvalidToolArgs { .. }));
    }
}
