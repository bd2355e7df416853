//! Independent feature switches controlling which fragments are composed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Names one of the five feature toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Toggle {
    /// Dataset parameterization instructions and example in the system prompt.
    Dataset,
    /// `"nature"` schema field, its explanation block, and `Nature:` lines.
    Nature,
    /// `"type"` schema field and its explanation block.
    Type,
    /// `Category:` lines and the category definitions section.
    Category,
    /// `Reference:` lines in the user prompt.
    References,
}

impl Toggle {
    pub const ALL: [Toggle; 5] = [
        Toggle::Dataset,
        Toggle::Nature,
        Toggle::Type,
        Toggle::Category,
        Toggle::References,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dataset => "dataset",
            Self::Nature => "nature",
            Self::Type => "type",
            Self::Category => "category",
            Self::References => "references",
        }
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Toggle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Toggle::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownToggle(s.to_string()))
    }
}

/// Current value of every toggle. All default to on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleState {
    pub dataset: bool,
    pub nature: bool,
    pub r#type: bool,
    pub category: bool,
    pub references: bool,
}

impl Default for ToggleState {
    fn default() -> Self {
        Self::all_on()
    }
}

impl ToggleState {
    pub fn all_on() -> Self {
        Self {
            dataset: true,
            nature: true,
            r#type: true,
            category: true,
            references: true,
        }
    }

    pub fn all_off() -> Self {
        Self {
            dataset: false,
            nature: false,
            r#type: false,
            category: false,
            references: false,
        }
    }

    pub fn is_on(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Dataset => self.dataset,
            Toggle::Nature => self.nature,
            Toggle::Type => self.r#type,
            Toggle::Category => self.category,
            Toggle::References => self.references,
        }
    }

    pub fn set(&mut self, toggle: Toggle, enabled: bool) {
        let slot = match toggle {
            Toggle::Dataset => &mut self.dataset,
            Toggle::Nature => &mut self.nature,
            Toggle::Type => &mut self.r#type,
            Toggle::Category => &mut self.category,
            Toggle::References => &mut self.references,
        };
        *slot = enabled;
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, toggle: Toggle, enabled: bool) -> Self {
        self.set(toggle, enabled);
        self
    }

    /// Every one of the 2^5 toggle combinations.
    pub fn combinations() -> impl Iterator<Item = ToggleState> {
        (0u8..1 << Toggle::ALL.len()).map(|bits| {
            Toggle::ALL
                .into_iter()
                .enumerate()
                .fold(Self::all_off(), |state, (i, toggle)| {
                    state.with(toggle, bits & (1 << i) != 0)
                })
        })
    }
}
