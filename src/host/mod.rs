//! Host environment facilities.
//!
//! The processing pipeline leans on a handful of host facilities: pixel
//! surfaces, blob spooling, object URLs, binary buffers. This module is the
//! seam the capability gate probes through: the [`Facilities`] trait plus
//! the production [`LocalHost`] implementation that queries the real
//! process environment.
//!
//! # Modules
//!
//! - [`facilities`] - The `Facilities` trait and `LocalHost`
//! - [`mock`] - `FixedHost`, a configurable test double

pub mod facilities;
pub mod mock;

pub use facilities::{Facilities, LocalHost};
pub use mock::FixedHost;
