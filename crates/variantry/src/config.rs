#![forbid(unsafe_code)]

//! Loading a [`VariantSelection`] from the environment or from JSON.
//!
//! # Environment
//!
//! | Variable | Field | Example |
//! |----------|-------|---------|
//! | `VARIANTRY_MODES` | `modes` | `ios,md` |
//! | `VARIANTRY_DIRECTIONS` | `directions` | `rtl` |
//! | `VARIANTRY_THEMES` | `themes` | `light,dark` |
//!
//! An unset variable leaves the field unset, so it defaults at expansion time.
//! A variable set to an empty (or all-whitespace) string is an explicit empty
//! list. If any entry in a list fails to parse, the whole field is rejected,
//! left unset, and reported in [`SelectionConfigParse::errors`].

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::dimension::ParseDimensionError;
use crate::selection::VariantSelection;

const ENV_MODES: &str = "VARIANTRY_MODES";
const ENV_DIRECTIONS: &str = "VARIANTRY_DIRECTIONS";
const ENV_THEMES: &str = "VARIANTRY_THEMES";

/// Selection loading diagnostics.
#[derive(Debug, Clone)]
pub struct SelectionConfigParse {
    pub selection: VariantSelection,
    pub errors: Vec<SelectionConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl SelectionConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SelectionConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for SelectionConfigError {}

impl VariantSelection {
    /// Read the selection from `VARIANTRY_*` environment variables.
    ///
    /// Rejected fields are dropped; use
    /// [`from_env_with_diagnostics`](Self::from_env_with_diagnostics) to see why.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with_diagnostics().selection
    }

    /// Read the selection from the environment and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> SelectionConfigParse {
        from_env_with(|key| env::var(key).ok())
    }

    /// Parse a selection from a JSON object such as
    /// `{"modes":["md"],"themes":["light","dark"]}`.
    ///
    /// Missing keys stay unset; `[]` is kept as an explicit empty list.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, SelectionConfigError> {
        serde_json::from_str(json)
            .map_err(|e| SelectionConfigError::new("selection", json, e.to_string()))
    }
}

/// Build a selection from an arbitrary variable lookup.
///
/// `get` is called once per `VARIANTRY_*` key; returning `None` means unset.
pub fn from_env_with<F>(mut get: F) -> SelectionConfigParse
where
    F: FnMut(&str) -> Option<String>,
{
    let mut selection = VariantSelection::new();
    let mut errors = Vec::new();

    if let Some(value) = get(ENV_MODES) {
        selection.modes = parse_field(
            "modes",
            &value,
            "expected comma list of ios|md",
            &mut errors,
        );
    }

    if let Some(value) = get(ENV_DIRECTIONS) {
        selection.directions = parse_field(
            "directions",
            &value,
            "expected comma list of ltr|rtl",
            &mut errors,
        );
    }

    if let Some(value) = get(ENV_THEMES) {
        selection.themes = parse_field(
            "themes",
            &value,
            "expected comma list of light|dark",
            &mut errors,
        );
    }

    SelectionConfigParse { selection, errors }
}

fn parse_field<T>(
    field: &'static str,
    value: &str,
    expected: &str,
    errors: &mut Vec<SelectionConfigError>,
) -> Option<Vec<T>>
where
    T: FromStr<Err = ParseDimensionError> + fmt::Debug,
{
    match parse_list::<T>(value) {
        Ok(parsed) => {
            tracing::debug!(field, values = ?parsed, "selection override applied");
            Some(parsed)
        }
        Err(err) => {
            tracing::warn!(field, value, error = %err, "selection override rejected");
            errors.push(SelectionConfigError::new(
                field,
                value,
                format!("{err}; {expected}"),
            ));
            None
        }
    }
}

/// Parse a comma-separated list. Blank input is an empty list.
fn parse_list<T>(value: &str) -> Result<Vec<T>, ParseDimensionError>
where
    T: FromStr<Err = ParseDimensionError>,
{
    if value.trim().is_empty() {
        return Ok(Vec::new());
    }
    value.split(',').map(str::parse).collect()
}
