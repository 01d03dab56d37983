//! Naming conventions: how identifiers and modifier classes are spelled.
//!
//! ```toml
//! element_separator = "__"
//! modifier_prefix = "-"
//! ```
//!
//! Missing keys fall back to the defaults above. The modifier *prefix* is
//! configurable, but modifier *names* are always normalized on `-`.

use crate::error::AbemError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ELEMENT_SEPARATOR: &str = "__";
pub const DEFAULT_MODIFIER_PREFIX: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Conventions {
    /// Placed between block and element: `block__elem`.
    pub element_separator: String,

    /// Placed before every modifier class: `-active`.
    pub modifier_prefix: String,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            element_separator: DEFAULT_ELEMENT_SEPARATOR.to_string(),
            modifier_prefix: DEFAULT_MODIFIER_PREFIX.to_string(),
        }
    }
}

impl Conventions {
    pub fn from_toml_str(text: &str) -> Result<Self, AbemError> {
        Self::parse(text, "<inline>")
    }

    /// Load conventions from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AbemError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| AbemError::ReadConfig {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text, &path.display().to_string())
    }

    fn parse(text: &str, origin: &str) -> Result<Self, AbemError> {
        let conventions: Conventions =
            toml::from_str(text).map_err(|source| AbemError::ParseConfig {
                path: origin.to_string(),
                source,
            })?;
        conventions.validate()?;
        Ok(conventions)
    }

    /// Both separators must be non-empty and free of whitespace. The
    /// element separator is also how a bound name is recognised as carrying
    /// an element, so it must be at least two characters long and contain
    /// no letters or digits: `main-nav` is a block under `__` or `--`, but
    /// would read as `main` + `nav` under `-`.
    pub fn validate(&self) -> Result<(), AbemError> {
        for (field, value) in [
            ("element_separator", &self.element_separator),
            ("modifier_prefix", &self.modifier_prefix),
        ] {
            if value.is_empty() {
                return Err(AbemError::InvalidConventions(format!(
                    "{field} must not be empty"
                )));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(AbemError::InvalidConventions(format!(
                    "{field} must not contain whitespace"
                )));
            }
        }
        if self.element_separator.chars().count() < 2 {
            return Err(AbemError::InvalidConventions(format!(
                "element_separator `{}` must be at least two characters",
                self.element_separator
            )));
        }
        if self
            .element_separator
            .chars()
            .any(|c| c.is_ascii_alphanumeric())
        {
            return Err(AbemError::InvalidConventions(format!(
                "element_separator `{}` must not contain letters or digits",
                self.element_separator
            )));
        }
        Ok(())
    }
}
