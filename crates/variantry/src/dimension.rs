#![forbid(unsafe_code)]

//! The three rendering dimensions a UI test is parameterized over.
//!
//! Each dimension is a closed enum. String names are the lower-case
//! identifiers used in test titles and screenshot file names, and are the
//! only names accepted by [`FromStr`](std::str::FromStr).

use std::fmt;

// ============================================================================
// Mode
// ============================================================================

/// Visual design-system variant a component renders under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Mode {
    /// iOS look and feel.
    Ios,
    /// Material Design look and feel.
    Md,
}

impl Mode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 2] = [Self::Ios, Self::Md];

    /// Modes used when a selection leaves `modes` unset.
    pub const DEFAULTS: &'static [Self] = &[Self::Ios, Self::Md];

    /// Get the mode name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Md => "md",
        }
    }
}

// ============================================================================
// Direction
// ============================================================================

/// Text and layout flow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Direction {
    /// Left to right.
    Ltr,
    /// Right to left.
    Rtl,
}

impl Direction {
    /// Every direction, in declaration order.
    pub const ALL: [Self; 2] = [Self::Ltr, Self::Rtl];

    /// Directions used when a selection leaves `directions` unset.
    pub const DEFAULTS: &'static [Self] = &[Self::Ltr, Self::Rtl];

    /// Get the direction name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

// ============================================================================
// Theme
// ============================================================================

/// Color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Theme {
    /// Light scheme. Screenshot baselines carry no theme suffix.
    Light,
    /// Dark scheme.
    Dark,
}

impl Theme {
    /// Every theme, in declaration order.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// Themes used when a selection leaves `themes` unset.
    ///
    /// Only [`Theme::Light`]: dark variants must be requested explicitly.
    pub const DEFAULTS: &'static [Self] = &[Self::Light];

    /// Get the theme name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

// ============================================================================
// Parsing & Display
// ============================================================================

/// A string did not name a value of the expected dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDimensionError {
    /// Dimension being parsed (`"mode"`, `"direction"` or `"theme"`).
    pub dimension: &'static str,
    /// The rejected input, as given.
    pub value: String,
}

impl ParseDimensionError {
    fn new(dimension: &'static str, value: &str) -> Self {
        Self {
            dimension,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for ParseDimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.dimension, self.value)
    }
}

impl std::error::Error for ParseDimensionError {}

macro_rules! impl_dimension_text {
    ($ty:ty, $label:literal) => {
        impl std::str::FromStr for $ty {
            type Err = ParseDimensionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .into_iter()
                    .find(|candidate| candidate.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| ParseDimensionError::new($label, s))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_dimension_text!(Mode, "mode");
impl_dimension_text!(Direction, "direction");
impl_dimension_text!(Theme, "theme");
