//! The facilities probe trait and its production implementation.
//!
//! Each probe is a cheap yes/no query answered fresh on every call.
//! Nothing is cached between checks, and a probe leaves no lasting trace
//! on the host (the blob probe's spool file is unlinked on drop).

use std::io::Write;

use tiny_skia::{IntSize, Pixmap};
use url::Url;

/// Dimensions of the throwaway surfaces allocated by probes.
const PROBE_DIM: u32 = 4;

/// Size of the fixed-buffer allocation probe.
const PROBE_BUFFER_LEN: usize = 64 * 1024;

/// Payload written by the blob spool probe.
const PROBE_BLOB: &[u8] = b"localkit-probe";

/// Host facilities the processing pipeline depends on.
///
/// One method per capability the gate verifies. Implementations must be
/// non-blocking and safe to call any number of times.
pub trait Facilities {
    /// A 2D drawing surface can be allocated.
    fn can_create_surface(&self) -> bool;

    /// Binary large objects can be spooled to temporary storage.
    fn can_spool_blob(&self) -> bool;

    /// Arbitrary object URLs can be minted.
    fn can_mint_object_url(&self) -> bool;

    /// Fixed-length binary buffers can be allocated.
    fn can_alloc_fixed_buffer(&self) -> bool;

    /// Raw RGBA pixel buffers can be wrapped as images.
    fn can_wrap_pixel_buffer(&self) -> bool;
}

/// Production facilities backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalHost;

impl LocalHost {
    /// Create a production facilities handle.
    pub fn new() -> Self {
        Self
    }
}

impl Facilities for LocalHost {
    fn can_create_surface(&self) -> bool {
        Pixmap::new(PROBE_DIM, PROBE_DIM).is_some()
    }

    fn can_spool_blob(&self) -> bool {
        let Ok(mut file) = tempfile::tempfile() else {
            return false;
        };
        file.write_all(PROBE_BLOB).and_then(|_| file.flush()).is_ok()
    }

    fn can_mint_object_url(&self) -> bool {
        Url::parse("blob:localkit/probe").is_ok()
    }

    fn can_alloc_fixed_buffer(&self) -> bool {
        let mut buffer: Vec<u8> = Vec::new();
        buffer.try_reserve_exact(PROBE_BUFFER_LEN).is_ok()
    }

    fn can_wrap_pixel_buffer(&self) -> bool {
        let Some(size) = IntSize::from_wh(PROBE_DIM, PROBE_DIM) else {
            return false;
        };
        let data = vec![0u8; (PROBE_DIM * PROBE_DIM * 4) as usize];
        Pixmap::from_vec(data, size).is_some()
    }
}
