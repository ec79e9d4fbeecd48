#![forbid(unsafe_code)]

//! Caller-supplied subsets of each dimension.
//!
//! Every field is `Option<Vec<_>>`. `None` means the caller did not choose and
//! the dimension falls back to its defaults; `Some(vec![])` is an explicit
//! empty choice and expands to nothing. Lists are kept exactly as given:
//! order is preserved and duplicates are not removed.

use crate::dimension::{Direction, Mode, Theme};

/// Which modes, directions, and themes to expand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct VariantSelection {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub modes: Option<Vec<Mode>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub directions: Option<Vec<Direction>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub themes: Option<Vec<Theme>>,
}

impl VariantSelection {
    /// An empty selection: every dimension falls back to its defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            modes: None,
            directions: None,
            themes: None,
        }
    }

    /// The default lists written out explicitly.
    ///
    /// Expands identically to [`VariantSelection::new`].
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            modes: Some(Mode::DEFAULTS.to_vec()),
            directions: Some(Direction::DEFAULTS.to_vec()),
            themes: Some(Theme::DEFAULTS.to_vec()),
        }
    }

    /// Every value of every dimension, dark themes included.
    #[must_use]
    pub fn all() -> Self {
        Self {
            modes: Some(Mode::ALL.to_vec()),
            directions: Some(Direction::ALL.to_vec()),
            themes: Some(Theme::ALL.to_vec()),
        }
    }

    /// Set the modes to expand.
    #[must_use]
    pub fn modes(mut self, modes: impl IntoIterator<Item = Mode>) -> Self {
        self.modes = Some(modes.into_iter().collect());
        self
    }

    /// Set the directions to expand.
    #[must_use]
    pub fn directions(mut self, directions: impl IntoIterator<Item = Direction>) -> Self {
        self.directions = Some(directions.into_iter().collect());
        self
    }

    /// Set the themes to expand.
    #[must_use]
    pub fn themes(mut self, themes: impl IntoIterator<Item = Theme>) -> Self {
        self.themes = Some(themes.into_iter().collect());
        self
    }

    /// Modes after defaulting.
    #[must_use]
    pub fn resolved_modes(&self) -> &[Mode] {
        resolve("modes", self.modes.as_deref(), Mode::DEFAULTS)
    }

    /// Directions after defaulting.
    #[must_use]
    pub fn resolved_directions(&self) -> &[Direction] {
        resolve("directions", self.directions.as_deref(), Direction::DEFAULTS)
    }

    /// Themes after defaulting.
    #[must_use]
    pub fn resolved_themes(&self) -> &[Theme] {
        resolve("themes", self.themes.as_deref(), Theme::DEFAULTS)
    }

    /// Number of variants this selection expands to.
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.resolved_modes().len()
            * self.resolved_directions().len()
            * self.resolved_themes().len()
    }
}

fn resolve<'a, T>(
    field: &'static str,
    chosen: Option<&'a [T]>,
    defaults: &'static [T],
) -> &'a [T] {
    chosen.unwrap_or_else(|| {
        tracing::trace!(field, "dimension unset, using defaults");
        defaults
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_resolves_to_defaults() {
        let sel = VariantSelection::new();
        assert_eq!(sel.resolved_modes(), &[Mode::Ios, Mode::Md]);
        assert_eq!(sel.resolved_directions(), &[Direction::Ltr, Direction::Rtl]);
        assert_eq!(sel.resolved_themes(), &[Theme::Light]);
        assert_eq!(sel.variant_count(), 4);
    }

    #[test]
    fn default_trait_matches_new() {
        assert_eq!(VariantSelection::default(), VariantSelection::new());
    }

    #[test]
    fn explicit_empty_is_not_defaulted() {
        let sel = VariantSelection::new().themes([]);
        assert_eq!(sel.themes, Some(Vec::new()));
        assert!(sel.resolved_themes().is_empty());
        assert_eq!(sel.variant_count(), 0);
    }

    #[test]
    fn explicit_lists_are_kept_verbatim() {
        let sel = VariantSelection::new()
            .modes([Mode::Md, Mode::Ios, Mode::Md])
            .themes([Theme::Dark]);
        assert_eq!(sel.resolved_modes(), &[Mode::Md, Mode::Ios, Mode::Md]);
        assert_eq!(sel.resolved_directions(), Direction::DEFAULTS);
        assert_eq!(sel.resolved_themes(), &[Theme::Dark]);
        assert_eq!(sel.variant_count(), 3 * 2);
    }

    #[test]
    fn all_covers_every_value() {
        let sel = VariantSelection::all();
        assert_eq!(sel.variant_count(), 8);
        assert!(sel.resolved_themes().contains(&Theme::Dark));
    }

    #[test]
    fn defaults_expand_like_new() {
        let explicit = VariantSelection::defaults();
        let implicit = VariantSelection::new();
        assert_eq!(explicit.resolved_modes(), implicit.resolved_modes());
        assert_eq!(explicit.resolved_directions(), implicit.resolved_directions());
        assert_eq!(explicit.resolved_themes(), implicit.resolved_themes());
    }
}
