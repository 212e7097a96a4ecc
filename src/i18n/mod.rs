//! Localized string tables.
//!
//! localkit ships its user-facing strings in nine product locales. The
//! catalog is static data: no interpolation, no pluralization. Callers
//! request a [`Msg`] key and get the active locale's translation back.
//!
//! # Modules
//!
//! - [`locale`] - Product locales, default locale, and locale resolution
//! - [`catalog`] - The message catalog and the [`t`] lookup function

pub mod catalog;
pub mod locale;

pub use catalog::{t, Msg};
pub use locale::{resolve_locale, LocaleInfo, DEFAULT_LOCALE, LOCALES};
