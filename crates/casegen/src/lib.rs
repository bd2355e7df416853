//! Prompt composer for LLM-driven test case generation.
//!
//! `casegen` assembles two prompts for a model that writes manual test cases
//! for a requirement: a **system prompt** describing the JSON to produce, and
//! a **user prompt** template describing the requirement under test. Users
//! switch optional features on and off with [`Toggle`]s and curate the
//! allowed values of the `nature`, `type` and `category` fields through the
//! [`EnumerationRegistry`]. The [`prompt`] module turns that state into the
//! two strings, deterministically and without side effects.
//!
//! # Getting started
//!
//! ```
//! use casegen::prelude::*;
//!
//! let mut state = ConfiguratorState::default();
//! state.toggles.set(Toggle::Dataset, false);
//! state.lists.set_enabled(ListName::Nature, 6, false)?;
//!
//! let prompts = compose(&state);
//! assert!(prompts.system_prompt.contains("The \"nature\" field must have one of the following values:"));
//! assert!(prompts.user_prompt.contains("Nature: {{ nature }}"));
//! # Ok::<(), casegen::Error>(())
//! ```
//!
//! For an interactive front end, wrap the state in a [`Configurator`]: it
//! recomposes after every mutation and reports changes to an
//! [`EventHandler`](events::EventHandler).
//!
//! # Where to find things
//!
//! - **Enumeration lists and their default seeds:** [`enumeration`].
//! - **Toggles:** [`toggles`]; the composer's full input is
//!   [`ConfiguratorState`], including the template [`Variant`].
//! - **Fragment text and ordering:** [`prompt::templates`] holds the literal
//!   fragments; [`prompt::compose_system_prompt`] and
//!   [`prompt::compose_user_prompt`] fix their order.
//! - **Change notifications:** [`events`].
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`enumeration`] | Nature/type/category lists, default seeds, [`EnumerationRegistry`] |
//! | [`toggles`] | [`Toggle`] names and [`ToggleState`] |
//! | [`state`] | [`ConfiguratorState`] and [`Variant`] |
//! | [`prompt`] | [`PromptBuilder`](prompt::PromptBuilder), templates, [`compose`] |
//! | [`configurator`] | [`Configurator`] session with recompose-on-mutation |
//! | [`events`] | [`ConfigEvent`](events::ConfigEvent) and handlers |

pub mod configurator;
pub mod enumeration;
pub mod error;
pub mod events;
pub mod prelude;
pub mod prompt;
pub mod state;
pub mod toggles;

pub use configurator::Configurator;
pub use enumeration::{EnumerationEntry, EnumerationList, EnumerationRegistry, ListName};
pub use error::{Error, Result};
pub use prompt::{ComposedPrompts, compose};
pub use state::{ConfiguratorState, Variant};
pub use toggles::{Toggle, ToggleState};
