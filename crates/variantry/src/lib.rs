#![forbid(unsafe_code)]

//! Variant expansion and deterministic naming for UI screenshot tests.
//!
//! A component is usually checked under several rendering variants: design
//! mode (`ios`, `md`), text direction (`ltr`, `rtl`) and color theme
//! (`light`, `dark`). This crate expands a [`VariantSelection`] into the
//! ordered cartesian product of those dimensions and hands back one
//! [`VariantDescriptor`] per combination, each able to name the test run and
//! its screenshot artifact.
//!
//! # Quick Start
//!
//! ```
//! use variantry::{Theme, VariantSelection, expand};
//!
//! for variant in expand(None) {
//!     let title = variant.title("button: basic");
//!     let file = variant.screenshot("button-basic");
//!     // run the test body under `variant.config()` ...
//!     # let _ = (title, file);
//! }
//!
//! let dark = VariantSelection::new().themes([Theme::Light, Theme::Dark]).expand();
//! assert_eq!(dark.len(), 8);
//! assert_eq!(dark[1].screenshot("button"), "button-ios-ltr-dark.png");
//! ```
//!
//! # Defaults
//!
//! Unset dimensions fall back to `[ios, md]`, `[ltr, rtl]` and `[light]`.
//! Dark themes only appear when asked for.
//!
//! # Configuration
//!
//! [`VariantSelection::from_env`] reads `VARIANTRY_MODES`,
//! `VARIANTRY_DIRECTIONS` and `VARIANTRY_THEMES` (comma-separated names).
//! With the `serde` feature (default) selections also load from JSON, and
//! [`manifest`] writes a JSONL listing of every variant's names.
//!
//! # Logging
//!
//! Expansion and configuration loading emit `tracing` events at `debug` and
//! `trace`; rejected configuration values are logged at `warn`.

pub mod config;
pub mod dimension;
pub mod expand;
#[cfg(feature = "serde")]
pub mod manifest;
pub mod selection;
pub mod variant;

pub use config::{SelectionConfigError, SelectionConfigParse};
pub use dimension::{Direction, Mode, ParseDimensionError, Theme};
pub use expand::expand;
pub use selection::VariantSelection;
pub use variant::{Variant, VariantDescriptor};
