//! Event Dispatch
//!
//! Handlers are registered explicitly against named events at init time.
//! The transport (socket client) calls [`EventDispatcher::dispatch`] once per
//! received message; events are handled one at a time, to completion.

use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::error::SyncError;

use super::message::{InboundEvent, ReloadOutcome};

/// Bound event handler.
pub type Handler = Box<dyn Fn(&Value) -> Result<ReloadOutcome, SyncError>>;

/// Anything that can accept handler registrations, e.g. a socket client.
pub trait EventSource {
    fn on(&mut self, event: &'static str, handler: Handler);
}

/// Named-channel handler registry.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: FxHashMap<&'static str, Vec<Handler>>,
    /// Registration order of event names
    order: Vec<&'static str>,
    /// Reject events with no handler instead of ignoring them
    strict: bool,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatcher that errors on unknown events.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Registered event names, in first-registration order.
    pub fn events(&self) -> &[&'static str] {
        &self.order
    }

    /// Invoke every handler registered for `event`, in registration order.
    pub fn dispatch(&self, event: &str, payload: &Value) -> Result<Vec<ReloadOutcome>, SyncError> {
        let Some(handlers) = self.handlers.get(event) else {
            if self.strict {
                return Err(SyncError::UnknownEvent(event.to_string()));
            }
            crate::debug!("sync"; "ignoring `{}`", event);
            return Ok(Vec::new());
        };

        crate::debug!("sync"; "dispatching `{}`", event);
        handlers.iter().map(|handler| handler(payload)).collect()
    }

    /// Parse an [`InboundEvent`] envelope and dispatch it.
    pub fn dispatch_json(&self, json: &str) -> Result<Vec<ReloadOutcome>, SyncError> {
        let inbound = InboundEvent::from_json(json)?;
        self.dispatch(&inbound.event, &inbound.data)
    }
}

impl EventSource for EventDispatcher {
    fn on(&mut self, event: &'static str, handler: Handler) {
        if !self.handlers.contains_key(event) {
            self.order.push(event);
        }
        self.handlers.entry(event).or_default().push(handler);
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("events", &self.order)
            .field("strict", &self.strict)
            .finish()
    }
}
