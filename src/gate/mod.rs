//! The capability gate.
//!
//! Before a tool is allowed to operate, the gate verifies that the host
//! provides every facility the processing pipeline depends on. The check
//! is synchronous, evaluates every capability (no short-circuiting, so a
//! deficient host is diagnosed completely in one pass), and reports its
//! result as data. An unsupported host is an expected outcome, never an
//! error.
//!
//! # Modules
//!
//! - [`capability`] - The fixed capability set and pure evaluation
//! - [`verdict`] - Aggregate pass/fail result
//! - [`support`] - `SupportGate`, the stateful per-activation gate

pub mod capability;
pub mod support;
pub mod verdict;

pub use capability::{evaluate, Capability, CAPABILITIES};
pub use support::{SupportGate, SupportNotifier};
pub use verdict::Verdict;
