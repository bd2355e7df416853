//! The plain state object consumed by the prompt composer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::enumeration::EnumerationRegistry;
use crate::error::{Error, Result};
use crate::toggles::ToggleState;

/// Which generation of the prompt templates to produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Every toggle independently controls its fragments.
    #[default]
    Full,
    /// Only `dataset` and `nature` are honoured. The `"type"` field and its
    /// six-value explanation are fixed text, and the user prompt is the
    /// static template with every placeholder line present.
    Classic,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Classic => "classic",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "classic" => Ok(Self::Classic),
            _ => Err(Error::UnknownVariant(s.to_string())),
        }
    }
}

/// Everything the composer needs: variant, toggles and enumeration lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfiguratorState {
    #[serde(default)]
    pub variant: Variant,
    #[serde(default)]
    pub toggles: ToggleState,
    #[serde(default)]
    pub lists: EnumerationRegistry,
}

impl ConfiguratorState {
    pub fn new(variant: Variant, toggles: ToggleState) -> Self {
        Self {
            variant,
            toggles,
            lists: EnumerationRegistry::with_defaults(),
        }
    }
}
