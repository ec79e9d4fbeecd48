#![forbid(unsafe_code)]

//! Cartesian expansion of a selection into variant descriptors.
//!
//! # Ordering
//!
//! Modes are the outer loop, directions the middle, themes the inner. Adjacent
//! descriptors therefore differ first in theme, then direction, then mode. The
//! order follows the resolved lists exactly; nothing is sorted or deduplicated.
//!
//! # Invariants
//!
//! 1. `expand(sel).len() == |modes| * |directions| * |themes|` after defaulting.
//! 2. An explicitly empty dimension yields an empty result.
//! 3. The result is fully materialized; every call builds fresh values.

use crate::selection::VariantSelection;
use crate::variant::{Variant, VariantDescriptor};

/// Expand a selection (or the defaults, for `None`) into descriptors.
///
/// ```
/// use variantry::expand;
///
/// let titles: Vec<String> = expand(None).iter().map(|d| d.title("Foo")).collect();
/// assert_eq!(
///     titles,
///     [
///         "Foo - ios/ltr/light",
///         "Foo - ios/rtl/light",
///         "Foo - md/ltr/light",
///         "Foo - md/rtl/light",
///     ]
/// );
/// ```
#[must_use]
pub fn expand(selection: Option<&VariantSelection>) -> Vec<VariantDescriptor> {
    static DEFAULT_SELECTION: VariantSelection = VariantSelection::new();
    let selection = selection.unwrap_or(&DEFAULT_SELECTION);

    let modes = selection.resolved_modes();
    let directions = selection.resolved_directions();
    let themes = selection.resolved_themes();

    let mut out = Vec::with_capacity(modes.len() * directions.len() * themes.len());
    for &mode in modes {
        for &direction in directions {
            for &theme in themes {
                let variant = Variant::new(mode, direction, theme);
                tracing::trace!(%variant, index = out.len(), "variant expanded");
                out.push(VariantDescriptor::new(variant));
            }
        }
    }

    tracing::debug!(
        modes = modes.len(),
        directions = directions.len(),
        themes = themes.len(),
        variants = out.len(),
        "selection expanded"
    );
    out
}

impl VariantSelection {
    /// Expand this selection. Same as `expand(Some(self))`.
    #[must_use]
    pub fn expand(&self) -> Vec<VariantDescriptor> {
        expand(Some(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{Direction, Mode, Theme};

    fn configs(descs: &[VariantDescriptor]) -> Vec<Variant> {
        descs.iter().map(VariantDescriptor::config).collect()
    }

    #[test]
    fn default_expansion_order() {
        let got = configs(&expand(None));
        assert_eq!(
            got,
            vec![
                Variant::new(Mode::Ios, Direction::Ltr, Theme::Light),
                Variant::new(Mode::Ios, Direction::Rtl, Theme::Light),
                Variant::new(Mode::Md, Direction::Ltr, Theme::Light),
                Variant::new(Mode::Md, Direction::Rtl, Theme::Light),
            ]
        );
    }

    #[test]
    fn none_and_empty_selection_agree() {
        assert_eq!(expand(None), VariantSelection::new().expand());
        assert_eq!(expand(None), VariantSelection::defaults().expand());
    }

    #[test]
    fn theme_varies_fastest() {
        let got = configs(&VariantSelection::all().expand());
        assert_eq!(got.len(), 8);
        assert_eq!(got[0], Variant::new(Mode::Ios, Direction::Ltr, Theme::Light));
        assert_eq!(got[1], Variant::new(Mode::Ios, Direction::Ltr, Theme::Dark));
        assert_eq!(got[2], Variant::new(Mode::Ios, Direction::Rtl, Theme::Light));
        assert_eq!(got[4], Variant::new(Mode::Md, Direction::Ltr, Theme::Light));
        assert_eq!(got[7], Variant::new(Mode::Md, Direction::Rtl, Theme::Dark));
    }

    #[test]
    fn empty_dimension_yields_nothing() {
        assert!(VariantSelection::new().themes([]).expand().is_empty());
        assert!(VariantSelection::new().modes([]).expand().is_empty());
        assert!(VariantSelection::new().directions([]).expand().is_empty());
    }

    #[test]
    fn duplicates_and_order_are_preserved() {
        let sel = VariantSelection::new()
            .modes([Mode::Md, Mode::Md])
            .directions([Direction::Rtl])
            .themes([Theme::Dark, Theme::Light]);
        let got = configs(&sel.expand());
        assert_eq!(
            got,
            vec![
                Variant::new(Mode::Md, Direction::Rtl, Theme::Dark),
                Variant::new(Mode::Md, Direction::Rtl, Theme::Light),
                Variant::new(Mode::Md, Direction::Rtl, Theme::Dark),
                Variant::new(Mode::Md, Direction::Rtl, Theme::Light),
            ]
        );
    }

    #[test]
    fn dark_requires_explicit_theme() {
        assert!(
            expand(None)
                .iter()
                .all(|d| d.config().theme == Theme::Light)
        );
        let dark = VariantSelection::new()
            .modes([Mode::Md])
            .directions([Direction::Rtl])
            .themes([Theme::Dark])
            .expand();
        assert_eq!(dark.len(), 1);
        assert_eq!(dark[0].screenshot("button"), "button-md-rtl-dark.png");
    }

    #[test]
    fn expansion_does_not_touch_selection() {
        let sel = VariantSelection::new().themes([Theme::Dark]);
        let before = sel.clone();
        let descs = sel.expand();
        for d in &descs {
            let _ = d.title("t");
            let _ = d.screenshot("s");
        }
        assert_eq!(sel, before);
    }
}
