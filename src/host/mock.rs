//! Configurable facilities double for tests.

use super::facilities::Facilities;

/// A facilities implementation with fixed answers.
///
/// Defaults to supporting everything; individual probes can be switched off
/// to simulate a deficient host.
///
/// # Example
///
/// ```
/// use localkit::host::{Facilities, FixedHost};
///
/// let host = FixedHost {
///     surface: false,
///     ..FixedHost::default()
/// };
/// assert!(!host.can_create_surface());
/// assert!(host.can_spool_blob());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedHost {
    pub surface: bool,
    pub blob: bool,
    pub object_url: bool,
    pub fixed_buffer: bool,
    pub pixel_buffer: bool,
}

impl Default for FixedHost {
    fn default() -> Self {
        Self {
            surface: true,
            blob: true,
            object_url: true,
            fixed_buffer: true,
            pixel_buffer: true,
        }
    }
}

impl FixedHost {
    /// A host where nothing is supported.
    pub fn supporting_nothing() -> Self {
        Self {
            surface: false,
            blob: false,
            object_url: false,
            fixed_buffer: false,
            pixel_buffer: false,
        }
    }
}

impl Facilities for FixedHost {
    fn can_create_surface(&self) -> bool {
        self.surface
    }

    fn can_spool_blob(&self) -> bool {
        self.blob
    }

    fn can_mint_object_url(&self) -> bool {
        self.object_url
    }

    fn can_alloc_fixed_buffer(&self) -> bool {
        self.fixed_buffer
    }

    fn can_wrap_pixel_buffer(&self) -> bool {
        self.pixel_buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_supports_everything() {
        let host = FixedHost::default();
        assert!(host.can_create_surface());
        assert!(host.can_spool_blob());
        assert!(host.can_mint_object_url());
        assert!(host.can_alloc_fixed_buffer());
        assert!(host.can_wrap_pixel_buffer());
    }

    #[test]
    fn supporting_nothing_fails_everything() {
        let host = FixedHost::supporting_nothing();
        assert!(!host.can_create_surface());
        assert!(!host.can_spool_blob());
        assert!(!host.can_mint_object_url());
        assert!(!host.can_alloc_fixed_buffer());
        assert!(!host.can_wrap_pixel_buffer());
    }
}
