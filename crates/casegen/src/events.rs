//! Change notifications emitted by a [`Configurator`](crate::configurator::Configurator).
//!
//! Every accepted mutation emits one change event followed by
//! [`ConfigEvent::PromptsComposed`] carrying the recomputed prompts. A
//! rendering layer implements [`EventHandler`] to redraw from those events
//! instead of polling the configurator.
//!
//! # Choosing an event handler
//!
//! | Handler | Use case |
//! |---------|----------|
//! | [`NoopHandler`] | Tests, one-shot CLI runs |
//! | [`LoggingHandler`] | Structured logging via `tracing` |
//! | [`FnEventHandler`] | Quick closures for simple callbacks |
//! | [`CompositeEventHandler`] | Compose multiple handlers in order |
//! | Custom `impl EventHandler` | Full control (web broadcast, metrics) |

use std::sync::Arc;

use tracing::{debug, info, trace};

use crate::enumeration::{EnumerationEntry, ListName};
use crate::prompt::ComposedPrompts;
use crate::state::Variant;
use crate::toggles::Toggle;

// ── Events ─────────────────────────────────────────────────────────

/// Events emitted after the configurator state changes.
#[derive(Debug)]
pub enum ConfigEvent<'a> {
    /// A toggle was switched.
    ToggleChanged { toggle: Toggle, enabled: bool },
    /// An entry's enabled flag or description was changed.
    EntryChanged {
        list: ListName,
        index: usize,
        entry: &'a EnumerationEntry,
    },
    /// A list was restored to its default seed.
    ListReset { list: ListName },
    /// The template variant was switched.
    VariantChanged { variant: Variant },
    /// Both prompts were recomputed from the current state.
    PromptsComposed(&'a ComposedPrompts),
}

// ── Handler trait ──────────────────────────────────────────────────

/// Observer for configurator events.
///
/// # Example
///
/// ```
/// use casegen::events::{ConfigEvent, EventHandler};
///
/// struct PrintHandler;
///
/// impl EventHandler for PrintHandler {
///     fn on_event(&self, event: &ConfigEvent<'_>) {
///         if let ConfigEvent::PromptsComposed(prompts) = event {
///             println!("{}", prompts.system_prompt);
///         }
///     }
/// }
/// ```
pub trait EventHandler: Send + Sync {
    /// Called for each event. The default implementation ignores it.
    fn on_event(&self, event: &ConfigEvent<'_>) {
        let _ = event;
    }
}

impl<T: EventHandler + ?Sized> EventHandler for Arc<T> {
    fn on_event(&self, event: &ConfigEvent<'_>) {
        (**self).on_event(event);
    }
}

/// A handler that ignores every event.
pub struct NoopHandler;
impl EventHandler for NoopHandler {}

/// An event handler backed by a closure.
///
/// ```
/// use casegen::events::{ConfigEvent, FnEventHandler};
///
/// let handler = FnEventHandler::new(|event: &ConfigEvent<'_>| {
///     if let ConfigEvent::ToggleChanged { toggle, enabled } = event {
///         println!("{toggle} -> {enabled}");
///     }
/// });
/// # let _ = handler;
/// ```
pub struct FnEventHandler<F>(F)
where
    F: Fn(&ConfigEvent<'_>) + Send + Sync;

impl<F> FnEventHandler<F>
where
    F: Fn(&ConfigEvent<'_>) + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> EventHandler for FnEventHandler<F>
where
    F: Fn(&ConfigEvent<'_>) + Send + Sync,
{
    fn on_event(&self, event: &ConfigEvent<'_>) {
        (self.0)(event)
    }
}

/// An event handler that delegates to multiple inner handlers, in
/// registration order.
///
/// ```ignore
/// let handler = CompositeEventHandler::new()
///     .with(LoggingHandler)
///     .with(WebBroadcastHandler::new(tx));
/// ```
pub struct CompositeEventHandler {
    handlers: Vec<Box<dyn EventHandler>>,
}

impl CompositeEventHandler {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Add a handler to the chain.
    pub fn with(mut self, handler: impl EventHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for CompositeEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for CompositeEventHandler {
    fn on_event(&self, event: &ConfigEvent<'_>) {
        for handler in &self.handlers {
            handler.on_event(event);
        }
    }
}

/// Logs every event through `tracing`.
pub struct LoggingHandler;

impl EventHandler for LoggingHandler {
    fn on_event(&self, event: &ConfigEvent<'_>) {
        match event {
            ConfigEvent::ToggleChanged { toggle, enabled } => {
                info!("toggle {toggle} -> {}", if *enabled { "on" } else { "off" });
            }
            ConfigEvent::EntryChanged { list, index, entry } => {
                let preview: String = entry.description.chars().take(80).collect();
                info!(
                    "{list}[{index}] \"{}\" enabled={} description={preview:?}",
                    entry.key, entry.enabled
                );
            }
            ConfigEvent::ListReset { list } => {
                info!("{list} list reset to defaults");
            }
            ConfigEvent::VariantChanged { variant } => {
                info!("variant -> {variant}");
            }
            ConfigEvent::PromptsComposed(prompts) => {
                debug!(
                    "prompts recomposed: system={}B user={}B",
                    prompts.system_prompt.len(),
                    prompts.user_prompt.len()
                );
                trace!("system prompt:\n{}", prompts.system_prompt);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn composite_dispatches_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let first = seen.clone();
        let second = seen.clone();

        let handler = CompositeEventHandler::new()
            .with(FnEventHandler::new(move |_: &ConfigEvent<'_>| {
                first.lock().unwrap().push("first")
            }))
            .with(FnEventHandler::new(move |_: &ConfigEvent<'_>| {
                second.lock().unwrap().push("second")
            }));

        handler.on_event(&ConfigEvent::ListReset {
            list: ListName::Type,
        });
        assert_eq!(*seen.lock().unwrap(), ["first", "second"]);
    }

    #[test]
    fn composite_counts_registered_handlers() {
        assert!(CompositeEventHandler::default().is_empty());
        let handler = CompositeEventHandler::new()
            .with(NoopHandler)
            .with(LoggingHandler);
        assert_eq!(handler.len(), 2);
    }

    #[test]
    fn arc_handler_delegates() {
        let count = Arc::new(Mutex::new(0));
        let inner = count.clone();
        let handler: Arc<dyn EventHandler> = Arc::new(FnEventHandler::new(
            move |_: &ConfigEvent<'_>| *inner.lock().unwrap() += 1,
        ));

        let prompts = ComposedPrompts::default();
        handler.on_event(&ConfigEvent::PromptsComposed(&prompts));
        handler.clone().on_event(&ConfigEvent::VariantChanged {
            variant: Variant::Classic,
        });
        assert_eq!(*count.lock().unwrap(), 2);
    }

    #[test]
    fn logging_handler_accepts_every_event() {
        let entry = EnumerationEntry::new("ATDD", "Acceptance criteria driven testing");
        let prompts = ComposedPrompts::default();
        let events = [
            ConfigEvent::ToggleChanged {
                toggle: Toggle::Dataset,
                enabled: false,
            },
            ConfigEvent::EntryChanged {
                list: ListName::Nature,
                index: 6,
                entry: &entry,
            },
            ConfigEvent::ListReset {
                list: ListName::Category,
            },
            ConfigEvent::VariantChanged {
                variant: Variant::Full,
            },
            ConfigEvent::PromptsComposed(&prompts),
        ];
        for event in &events {
            LoggingHandler.on_event(event);
        }
    }
}
