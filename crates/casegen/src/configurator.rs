//! Stateful configurator session.
//!
//! [`Configurator`] owns a [`ConfiguratorState`], the prompts last composed
//! from it, and an [`EventHandler`]. Each mutation is applied and reported
//! to the handler, then both prompts are recomputed synchronously and
//! reported as well.
//! A mutation that fails (index out of range) changes nothing and emits
//! nothing.

use tracing::warn;

use crate::enumeration::ListName;
use crate::error::Result;
use crate::events::{ConfigEvent, EventHandler, NoopHandler};
use crate::prompt::{ComposedPrompts, compose};
use crate::state::{ConfiguratorState, Variant};
use crate::toggles::Toggle;

/// A configurator session: state, latest prompts and a change observer.
///
/// # Example
///
/// ```
/// use casegen::{Configurator, ListName, Toggle};
///
/// let mut configurator = Configurator::default();
/// configurator.set_toggle(Toggle::Dataset, false);
/// configurator.set_enabled(ListName::Nature, 6, false).unwrap();
///
/// let prompts = configurator.prompts();
/// assert!(!prompts.system_prompt.contains("\"ATDD\""));
/// ```
pub struct Configurator {
    state: ConfiguratorState,
    prompts: ComposedPrompts,
    handler: Box<dyn EventHandler>,
}

impl std::fmt::Debug for Configurator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configurator")
            .field("state", &self.state)
            .field("prompts", &self.prompts)
            .finish()
    }
}

impl Default for Configurator {
    fn default() -> Self {
        Self::new(ConfiguratorState::default())
    }
}

impl Configurator {
    /// Start a session from `state`, composing the initial prompts.
    pub fn new(state: ConfiguratorState) -> Self {
        let prompts = compose(&state);
        Self {
            state,
            prompts,
            handler: Box::new(NoopHandler),
        }
    }

    /// Replace the event handler. No event is emitted for the initial state.
    pub fn with_event_handler(mut self, handler: impl EventHandler + 'static) -> Self {
        self.handler = Box::new(handler);
        self
    }

    pub fn state(&self) -> &ConfiguratorState {
        &self.state
    }

    /// Prompts composed from the current state.
    pub fn prompts(&self) -> &ComposedPrompts {
        &self.prompts
    }

    pub fn set_toggle(&mut self, toggle: Toggle, enabled: bool) -> &ComposedPrompts {
        self.state.toggles.set(toggle, enabled);
        self.handler
            .on_event(&ConfigEvent::ToggleChanged { toggle, enabled });
        self.recompose()
    }

    pub fn set_variant(&mut self, variant: Variant) -> &ComposedPrompts {
        self.state.variant = variant;
        self.handler
            .on_event(&ConfigEvent::VariantChanged { variant });
        self.recompose()
    }

    /// Enable or disable the entry at `index` of `list`.
    pub fn set_enabled(
        &mut self,
        list: ListName,
        index: usize,
        enabled: bool,
    ) -> Result<&ComposedPrompts> {
        if let Err(e) = self.state.lists.set_enabled(list, index, enabled) {
            warn!("rejected enable change: {e}");
            return Err(e);
        }
        self.entry_changed(list, index);
        Ok(self.recompose())
    }

    /// Overwrite the description of the entry at `index` of `list`.
    pub fn set_description(
        &mut self,
        list: ListName,
        index: usize,
        description: impl Into<String>,
    ) -> Result<&ComposedPrompts> {
        if let Err(e) = self.state.lists.set_description(list, index, description) {
            warn!("rejected description change: {e}");
            return Err(e);
        }
        self.entry_changed(list, index);
        Ok(self.recompose())
    }

    /// Restore `list` to its default seed.
    pub fn reset_list(&mut self, list: ListName) -> &ComposedPrompts {
        self.state.lists.reset(list);
        self.handler.on_event(&ConfigEvent::ListReset { list });
        self.recompose()
    }

    fn entry_changed(&self, list: ListName, index: usize) {
        if let Some(entry) = self.state.lists.get(list).entries().get(index) {
            self.handler
                .on_event(&ConfigEvent::EntryChanged { list, index, entry });
        }
    }

    fn recompose(&mut self) -> &ComposedPrompts {
        self.prompts = compose(&self.state);
        self.handler
            .on_event(&ConfigEvent::PromptsComposed(&self.prompts));
        &self.prompts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::events::FnEventHandler;
    use std::sync::{Arc, Mutex};

    fn recording() -> (Arc<Mutex<Vec<String>>>, impl EventHandler + 'static) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        let handler = FnEventHandler::new(move |event: &ConfigEvent<'_>| {
            let name = match event {
                ConfigEvent::ToggleChanged { toggle, .. } => format!("toggle:{toggle}"),
                ConfigEvent::EntryChanged { list, index, .. } => format!("entry:{list}:{index}"),
                ConfigEvent::ListReset { list } => format!("reset:{list}"),
                ConfigEvent::VariantChanged { variant } => format!("variant:{variant}"),
                ConfigEvent::PromptsComposed(_) => "composed".to_string(),
            };
            sink.lock().unwrap().push(name);
        });
        (log, handler)
    }

    #[test]
    fn initial_prompts_match_compose() {
        let configurator = Configurator::default();
        assert_eq!(
            configurator.prompts(),
            &compose(&ConfiguratorState::default())
        );
    }

    #[test]
    fn mutation_recomposes_and_notifies() {
        let (log, handler) = recording();
        let mut configurator = Configurator::default().with_event_handler(handler);

        let prompts = configurator.set_toggle(Toggle::Dataset, false).clone();
        assert!(!prompts.system_prompt.contains("parameterize"));
        assert_eq!(*log.lock().unwrap(), ["toggle:dataset", "composed"]);
    }

    #[test]
    fn entry_events_carry_list_and_index() {
        let (log, handler) = recording();
        let mut configurator = Configurator::default().with_event_handler(handler);

        configurator
            .set_description(ListName::Category, 2, "UX")
            .unwrap();
        configurator.reset_list(ListName::Category);
        configurator.set_variant(Variant::Classic);

        assert_eq!(
            *log.lock().unwrap(),
            [
                "entry:category:2",
                "composed",
                "reset:category",
                "composed",
                "variant:classic",
                "composed"
            ]
        );
    }

    #[test]
    fn rejected_mutation_emits_nothing() {
        let (log, handler) = recording();
        let mut configurator = Configurator::default().with_event_handler(handler);
        let before = configurator.prompts().clone();

        let err = configurator
            .set_enabled(ListName::Nature, 7, false)
            .unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { len: 7, .. }));
        assert!(
            configurator
                .set_description(ListName::Type, 99, "x")
                .is_err()
        );

        assert!(log.lock().unwrap().is_empty());
        assert_eq!(configurator.prompts(), &before);
        assert_eq!(configurator.state(), &ConfiguratorState::default());
    }

    #[test]
    fn state_not_history_decides_output() {
        let mut a = Configurator::default();
        a.set_toggle(Toggle::Nature, false);
        a.set_toggle(Toggle::References, false);

        let mut b = Configurator::default();
        b.set_toggle(Toggle::References, false);
        b.set_toggle(Toggle::Category, false);
        b.set_toggle(Toggle::Nature, false);
        b.set_toggle(Toggle::Category, true);

        assert_eq!(a.prompts(), b.prompts());
    }
}
