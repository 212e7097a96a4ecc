//! localkit - Local, private file tools.
//!
//! localkit is a multi-tool toolbox whose tools process the user's files
//! entirely on the local machine: no upload, no registration. Before any
//! tool operates, the capability gate verifies that the host provides the
//! facilities the processing pipeline depends on, and blocks usage with a
//! localized message when it does not.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and dispatching
//! - [`error`] - Error types and result aliases
//! - [`gate`] - The capability gate guarding tool activation
//! - [`host`] - Host facilities probed by the gate
//! - [`i18n`] - Localized string tables
//! - [`pipeline`] - PNG load/save helpers
//! - [`state`] - Preferences persistence
//! - [`tools`] - The tool set and activation wiring
//! - [`ui`] - Terminal output, theme, and the gate's alert presentation
//!
//! # Example
//!
//! ```
//! use localkit::gate::evaluate;
//! use localkit::host::FixedHost;
//!
//! // A host missing blob spooling fails the check, by name.
//! let host = FixedHost { blob: false, ..FixedHost::default() };
//! let verdict = evaluate(&host);
//! assert!(!verdict.is_supported());
//! assert_eq!(verdict.missing(), ["blob"]);
//! ```

pub mod cli;
pub mod error;
pub mod gate;
pub mod host;
pub mod i18n;
pub mod pipeline;
pub mod state;
pub mod tools;
pub mod ui;

pub use error::{LocalkitError, Result};
