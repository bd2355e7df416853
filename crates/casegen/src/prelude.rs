//! Convenience re-exports for common `casegen` types.
//!
//! ```ignore
//! use casegen::prelude::*;
//! ```

// ── State ───────────────────────────────────────────────────────────
pub use crate::enumeration::{EnumerationEntry, EnumerationList, EnumerationRegistry, ListName};
pub use crate::state::{ConfiguratorState, Variant};
pub use crate::toggles::{Toggle, ToggleState};

// ── Composition ─────────────────────────────────────────────────────
pub use crate::prompt::{ComposedPrompts, PromptBuilder, compose};

// ── Session and events ──────────────────────────────────────────────
pub use crate::configurator::Configurator;
pub use crate::events::{
    CompositeEventHandler, ConfigEvent, EventHandler, FnEventHandler, LoggingHandler, NoopHandler,
};

pub use crate::error::Error;
