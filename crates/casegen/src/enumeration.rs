//! The three configurable enumeration lists: nature, type and category.
//!
//! Each list is an ordered sequence of [`EnumerationEntry`] values seeded from
//! fixed defaults. Users may flip an entry's `enabled` flag or rewrite its
//! description; nothing ever adds, removes or reorders entries, so list order
//! is also output order.
//!
//! Only *active* entries (`enabled == true`) reach the generated prompts, as
//! `- "<key>": <description>` lines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

// ── Default seeds ─────────────────────────────────────────────────────

/// Default requirement natures, in display order.
pub const NATURE_DEFAULTS: &[(&str, &str)] = &[
    ("functional", "Testing of functionalities"),
    ("business", "Testing of business rules and processes"),
    ("user", "Testing from the user perspective"),
    (
        "non functional",
        "Testing of a system's usability and reliability",
    ),
    ("performance", "Testing response time and system capacity"),
    (
        "security",
        "Testing of protection against vulnerabilities and unauthorized access",
    ),
    ("ATDD", "Acceptance criteria driven testing"),
];

/// Default test case types, in display order.
pub const TYPE_DEFAULTS: &[(&str, &str)] = &[
    ("compliance", "Testing adherence to standards or regulations"),
    (
        "correction",
        "Testing after a bug fix (to be used when the source of the requirement is set to \u{201c}defect\u{201d})",
    ),
    ("evolution", "Testing of newly added functionalities"),
    ("regression", "Testing that no existing functionality is broken"),
    ("end-to-end", "Testing of the complete end-user flow"),
    ("partner", "Integration testing with an external system"),
];

/// Default requirement categories, in display order.
pub const CATEGORY_DEFAULTS: &[(&str, &str)] = &[
    (
        "functional",
        "Describes a behavior or feature the system must provide",
    ),
    (
        "technical",
        "Describes a constraint on architecture, platform or infrastructure",
    ),
    ("ergonomic", "Describes usability and accessibility expectations"),
    (
        "performance",
        "Describes response time, throughput or capacity expectations",
    ),
    (
        "security",
        "Describes data protection and access control expectations",
    ),
    (
        "regulatory",
        "Describes legal or normative obligations the system must satisfy",
    ),
];

// ── List names ────────────────────────────────────────────────────────

/// Identifies one of the three enumeration lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListName {
    Nature,
    Type,
    Category,
}

impl ListName {
    /// All lists, in the order they are presented to the user.
    pub const ALL: [ListName; 3] = [ListName::Nature, ListName::Type, ListName::Category];

    /// Wire name; also the JSON field the list constrains.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nature => "nature",
            Self::Type => "type",
            Self::Category => "category",
        }
    }

    /// The fixed seed this list starts from.
    pub fn defaults(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Nature => NATURE_DEFAULTS,
            Self::Type => TYPE_DEFAULTS,
            Self::Category => CATEGORY_DEFAULTS,
        }
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nature" => Ok(Self::Nature),
            "type" => Ok(Self::Type),
            "category" => Ok(Self::Category),
            _ => Err(Error::UnknownList(s.to_string())),
        }
    }
}

// ── Entries ───────────────────────────────────────────────────────────

/// One configurable enumeration value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationEntry {
    /// Stable identifier, emitted verbatim as the JSON value.
    pub key: String,
    /// Free-text explanation. May be edited to empty.
    pub description: String,
    /// Whether the entry is offered to the model.
    pub enabled: bool,
}

impl EnumerationEntry {
    /// Create an enabled entry.
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
            enabled: true,
        }
    }

    /// The `- "<key>": <description>` line, without trailing newline.
    pub fn explanation_line(&self) -> String {
        format!("- \"{}\": {}", self.key, self.description)
    }
}

/// An ordered list of enumeration entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnumerationList(Vec<EnumerationEntry>);

impl EnumerationList {
    /// Build an all-enabled list from `(key, description)` pairs.
    pub fn from_seed(seed: &[(&str, &str)]) -> Self {
        Self(
            seed.iter()
                .map(|(key, description)| EnumerationEntry::new(*key, *description))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[EnumerationEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Enabled entries, in list order.
    pub fn active(&self) -> impl Iterator<Item = &EnumerationEntry> {
        self.0.iter().filter(|e| e.enabled)
    }

    /// Position of the entry with the given key.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.0.iter().position(|e| e.key == key)
    }

    /// One newline-terminated `- "<key>": <description>` line per active entry.
    pub fn explanation_lines(&self) -> String {
        self.active()
            .map(|e| format!("{}\n", e.explanation_line()))
            .collect()
    }

    fn entry_mut(&mut self, index: usize) -> Option<&mut EnumerationEntry> {
        self.0.get_mut(index)
    }
}

impl FromIterator<EnumerationEntry> for EnumerationList {
    fn from_iter<I: IntoIterator<Item = EnumerationEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ── Registry ──────────────────────────────────────────────────────────

/// Source of truth for the three enumeration lists.
///
/// Mutations never push updates anywhere; whoever mutates is expected to
/// recompose the prompts afterwards (see
/// [`Configurator`](crate::configurator::Configurator), which does).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationRegistry {
    pub nature: EnumerationList,
    #[serde(rename = "type")]
    pub types: EnumerationList,
    pub category: EnumerationList,
}

impl Default for EnumerationRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl EnumerationRegistry {
    /// Registry seeded with the default nature, type and category lists.
    pub fn with_defaults() -> Self {
        Self {
            nature: EnumerationList::from_seed(NATURE_DEFAULTS),
            types: EnumerationList::from_seed(TYPE_DEFAULTS),
            category: EnumerationList::from_seed(CATEGORY_DEFAULTS),
        }
    }

    /// Current entries of a list, in stable order.
    pub fn get(&self, list: ListName) -> &EnumerationList {
        match list {
            ListName::Nature => &self.nature,
            ListName::Type => &self.types,
            ListName::Category => &self.category,
        }
    }

    fn get_mut(&mut self, list: ListName) -> &mut EnumerationList {
        match list {
            ListName::Nature => &mut self.nature,
            ListName::Type => &mut self.types,
            ListName::Category => &mut self.category,
        }
    }

    /// Enabled entries of a list, in list order.
    pub fn active_entries(&self, list: ListName) -> impl Iterator<Item = &EnumerationEntry> {
        self.get(list).active()
    }

    /// Index of the entry with the given key.
    pub fn find(&self, list: ListName, key: &str) -> Option<usize> {
        self.get(list).position(key)
    }

    /// Set the `enabled` flag of the entry at `index`.
    pub fn set_enabled(&mut self, list: ListName, index: usize, enabled: bool) -> Result<()> {
        let entry = self.entry_mut(list, index)?;
        entry.enabled = enabled;
        debug!(%list, index, key = %entry.key, enabled, "entry enabled flag changed");
        Ok(())
    }

    /// Overwrite the description of the entry at `index`. Any text is
    /// accepted, including the empty string.
    pub fn set_description(
        &mut self,
        list: ListName,
        index: usize,
        description: impl Into<String>,
    ) -> Result<()> {
        let entry = self.entry_mut(list, index)?;
        entry.description = description.into();
        debug!(%list, index, key = %entry.key, "entry description changed");
        Ok(())
    }

    /// Restore a list to its default seed.
    pub fn reset(&mut self, list: ListName) {
        *self.get_mut(list) = EnumerationList::from_seed(list.defaults());
        debug!(%list, "list reset to defaults");
    }

    fn entry_mut(&mut self, list: ListName, index: usize) -> Result<&mut EnumerationEntry> {
        let entries = self.get_mut(list);
        let len = entries.len();
        entries
            .entry_mut(index)
            .ok_or(Error::IndexOutOfRange { list, index, len })
    }
}
