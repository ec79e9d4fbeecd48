#![forbid(unsafe_code)]

//! Resolved variants and the naming helpers bound to them.
//!
//! A [`Variant`] is one concrete `(mode, direction, theme)` triple. A
//! [`VariantDescriptor`] pairs a variant with two pure naming functions:
//!
//! - **title**: `"{base} - {mode}/{direction}/{theme}"`, unique per variant so
//!   parameterized runs of one test do not collide in reports.
//! - **screenshot**: `"{base}-{mode}-{direction}.png"` for light and
//!   `"{base}-{mode}-{direction}-dark.png"` for dark. Light is the baseline
//!   name; only dark carries a theme suffix.
//!
//! Base strings are used verbatim. Nothing is escaped or normalized.

use std::fmt;

use crate::dimension::{Direction, Mode, Theme};

/// One concrete combination of mode, direction, and theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variant {
    pub mode: Mode,
    pub direction: Direction,
    pub theme: Theme,
}

impl Variant {
    #[must_use]
    pub const fn new(mode: Mode, direction: Direction, theme: Theme) -> Self {
        Self {
            mode,
            direction,
            theme,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.mode, self.direction, self.theme)
    }
}

/// Decorate a base test title with the variant it runs under.
///
/// ```
/// use variantry::{Direction, Mode, Theme, Variant, variant::title};
///
/// let v = Variant::new(Mode::Ios, Direction::Ltr, Theme::Light);
/// assert_eq!(title("Foo", v), "Foo - ios/ltr/light");
/// ```
#[must_use]
pub fn title(base: &str, variant: Variant) -> String {
    format!("{base} - {variant}")
}

/// Build the screenshot file name for a base name and variant.
///
/// ```
/// use variantry::{Direction, Mode, Theme, Variant, variant::screenshot_name};
///
/// let light = Variant::new(Mode::Md, Direction::Rtl, Theme::Light);
/// let dark = Variant::new(Mode::Md, Direction::Rtl, Theme::Dark);
/// assert_eq!(screenshot_name("button", light), "button-md-rtl.png");
/// assert_eq!(screenshot_name("button", dark), "button-md-rtl-dark.png");
/// ```
#[must_use]
pub fn screenshot_name(base: &str, variant: Variant) -> String {
    let Variant {
        mode, direction, ..
    } = variant;
    match variant.theme {
        Theme::Dark => format!("{base}-{mode}-{direction}-dark.png"),
        Theme::Light => format!("{base}-{mode}-{direction}.png"),
    }
}

// ============================================================================
// Descriptor
// ============================================================================

/// A variant together with its bound naming functions.
///
/// Descriptors are plain `Copy` values. [`title_fn`](Self::title_fn) and
/// [`screenshot_fn`](Self::screenshot_fn) hand out closures that own a copy of
/// this descriptor's variant, so they stay valid after the descriptor (or the
/// `Vec` it came from) is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantDescriptor {
    config: Variant,
}

impl VariantDescriptor {
    #[must_use]
    pub const fn new(config: Variant) -> Self {
        Self { config }
    }

    /// The resolved variant this descriptor names.
    #[must_use]
    pub const fn config(&self) -> Variant {
        self.config
    }

    /// Decorate `base` as a test title for this variant.
    #[must_use]
    pub fn title(&self, base: &str) -> String {
        title(base, self.config)
    }

    /// Name the screenshot artifact for `base` under this variant.
    #[must_use]
    pub fn screenshot(&self, base: &str) -> String {
        screenshot_name(base, self.config)
    }

    /// Title-naming function bound to this variant.
    #[must_use]
    pub fn title_fn(&self) -> impl Fn(&str) -> String + Copy + Send + Sync + 'static {
        let config = self.config;
        move |base| title(base, config)
    }

    /// Screenshot-naming function bound to this variant.
    #[must_use]
    pub fn screenshot_fn(&self) -> impl Fn(&str) -> String + Copy + Send + Sync + 'static {
        let config = self.config;
        move |base| screenshot_name(base, config)
    }
}

impl From<Variant> for VariantDescriptor {
    fn from(config: Variant) -> Self {
        Self::new(config)
    }
}
