//! The per-object bus.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use super::registry::TopicRegistry;
use super::subscription::{Args, Handler, Token};
use crate::config::BusConfig;
use crate::error::{BusError, HandlerResult};
use crate::event::Event;
use crate::identity::{BusId, GuidProvider, IdentityProvider};

/// Local publish/subscribe bus.
///
/// Dispatch is synchronous: `publish` runs every matching handler before it
/// returns. Handlers may publish again (onto this bus or another one), and
/// may subscribe or unsubscribe; such changes apply from the next publish.
///
/// ## Example
///
/// ```
/// use local_event_bus::{Event, LocalEventBus};
///
/// let bus = LocalEventBus::new();
/// let token = bus
///     .subscribe("saved", |event, _args| {
///         println!("saved: {:?}", event.payload_str());
///         Ok(())
///     })
///     .unwrap();
///
/// assert!(bus.publish_event(&Event::with_string_payload("saved", "doc-1")).unwrap());
/// assert_eq!(bus.unsubscribe(token), Some(token));
/// ```
pub struct LocalEventBus {
    id: BusId,
    config: BusConfig,
    registry: RefCell<TopicRegistry>,
    global: RefCell<Vec<Handler>>,
}

impl Default for LocalEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LocalEventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalEventBus")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("topics", &self.registry.borrow().topics())
            .field("global_listeners", &self.global.borrow().len())
            .finish()
    }
}

impl LocalEventBus {
    pub fn new() -> Self {
        Self::with_config(BusConfig::default())
    }

    /// Topic dispatch only: no re-entrancy guard, no global listeners.
    pub fn simple() -> Self {
        Self::with_config(BusConfig::simple())
    }

    pub fn with_config(config: BusConfig) -> Self {
        Self::with_identity(config, &GuidProvider)
    }

    pub fn with_identity(config: BusConfig, ids: &dyn IdentityProvider) -> Self {
        let id = ids.next_id();
        debug!(bus = %id, guard = config.reentrancy_guard, "created local event bus");
        LocalEventBus {
            id,
            registry: RefCell::new(TopicRegistry::new(config.first_token)),
            global: RefCell::new(Vec::new()),
            config,
        }
    }

    pub fn id(&self) -> &BusId {
        &self.id
    }

    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    /// Subscribe `handler` to `topic`. Keep the returned token to unsubscribe.
    pub fn subscribe<F>(&self, topic: &str, handler: F) -> Result<Token, BusError>
    where
        F: Fn(&Event, &Args) -> HandlerResult + 'static,
    {
        if topic.is_empty() {
            return Err(BusError::InvalidArgument("topic must not be empty".into()));
        }

        let token = self
            .registry
            .borrow_mut()
            .insert(topic, Rc::new(handler))
            .ok_or(BusError::TokensExhausted)?;
        trace!(bus = %self.id, topic, %token, "subscribed");
        Ok(token)
    }

    /// Register a listener that sees every event published on this bus,
    /// ahead of the topic subscribers. Global listeners cannot be removed.
    pub fn subscribe_to_all<F>(&self, handler: F) -> Result<(), BusError>
    where
        F: Fn(&Event, &Args) -> HandlerResult + 'static,
    {
        if !self.config.global_listeners {
            return Err(BusError::Unsupported("global listeners"));
        }

        self.global.borrow_mut().push(Rc::new(handler));
        trace!(bus = %self.id, "subscribed to all topics");
        Ok(())
    }

    /// Publish `event`, passing `args` to every handler after the event.
    ///
    /// Returns `Ok(false)` when this bus already processed the event object,
    /// or when nobody ever subscribed to its topic (global listeners still
    /// run in that case). Returns `Ok(true)` once topic subscribers ran.
    /// The first handler error stops the dispatch and is returned.
    pub fn publish(&self, event: &Event, args: &Args) -> Result<bool, BusError> {
        if self.config.reentrancy_guard && !event.stamp(&self.id) {
            trace!(bus = %self.id, topic = event.topic(), "event already passed through this bus");
            return Ok(false);
        }

        let listeners = self.global.borrow().clone();
        for listener in &listeners {
            self.invoke(listener, event, args)?;
        }

        let handlers = self.registry.borrow().dispatch_order(event.topic());
        let Some(handlers) = handlers else {
            trace!(bus = %self.id, topic = event.topic(), "no subscribers");
            return Ok(false);
        };

        trace!(bus = %self.id, topic = event.topic(), handlers = handlers.len(), "publishing");
        for handler in &handlers {
            self.invoke(handler, event, args)?;
        }
        Ok(true)
    }

    /// Publish `event` with no extra arguments.
    pub fn publish_event(&self, event: &Event) -> Result<bool, BusError> {
        self.publish(event, &[])
    }

    /// Publish by topic name. Handlers receive a fresh event carrying just
    /// the topic.
    pub fn publish_topic(&self, topic: &str, args: &Args) -> Result<bool, BusError> {
        self.publish(&Event::new(topic), args)
    }

    /// Remove the subscription holding `token`. `None` if no subscription
    /// on this bus has it.
    pub fn unsubscribe(&self, token: Token) -> Option<Token> {
        let removed = self.registry.borrow_mut().remove(token);
        trace!(bus = %self.id, %token, found = removed.is_some(), "unsubscribe");
        removed
    }

    /// Whether `topic` has ever been subscribed to on this bus.
    pub fn has_topic(&self, topic: &str) -> bool {
        self.registry.borrow().contains_topic(topic)
    }

    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.registry.borrow().len(topic)
    }

    pub fn global_listener_count(&self) -> usize {
        self.global.borrow().len()
    }

    /// Every topic with a subscriber list, sorted.
    pub fn topics(&self) -> Vec<String> {
        self.registry.borrow().topics()
    }

    /// The token the next `subscribe` will return, `None` once tokens have
    /// run out.
    pub fn next_token(&self) -> Option<Token> {
        self.registry.borrow().peek_token()
    }

    fn invoke(&self, handler: &Handler, event: &Event, args: &Args) -> Result<(), BusError> {
        handler(event, args).map_err(|source| {
            debug!(bus = %self.id, topic = event.topic(), error = %source, "handler failed");
            BusError::Handler {
                topic: event.topic().to_owned(),
                source,
            }
        })
    }
}
