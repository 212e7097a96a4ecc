//! The tool set.
//!
//! Each tool is a small pixel transform over the PNG pipeline. Tools are
//! registered in [`registry::ToolRegistry`] and opened through
//! [`activation::ToolView`], which runs the capability gate before any
//! pixels are touched.
//!
//! # Modules
//!
//! - [`registry`] - Builtin tool registry
//! - [`activation`] - Tool-view activation (the gate's trigger point)
//! - [`grayscale`], [`invert`], [`resize`], [`rotate`] - The builtin tools

pub mod activation;
pub mod grayscale;
pub mod invert;
pub mod registry;
pub mod resize;
pub mod rotate;

pub use activation::ToolView;
pub use registry::ToolRegistry;

use tiny_skia::Pixmap;

use crate::error::Result;

/// Options passed to a tool run.
///
/// Tools read what they need and reject what they cannot work with.
#[derive(Debug, Clone, Default)]
pub struct ToolOptions {
    /// Target width in pixels.
    pub width: Option<u32>,
    /// Target height in pixels.
    pub height: Option<u32>,
    /// Rotation angle in degrees.
    pub angle: Option<i32>,
}

/// An image tool: one transform from source pixels to output pixels.
pub trait Tool: Send + Sync {
    /// Stable tool identifier used on the command line.
    fn id(&self) -> &'static str;

    /// One-line description shown by `localkit list`.
    fn summary(&self) -> &'static str;

    /// Apply the transform.
    fn apply(&self, source: &Pixmap, options: &ToolOptions) -> Result<Pixmap>;
}
