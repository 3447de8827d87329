//! Minimal publish/subscribe capability.
//!
//! The manager only needs "subscribe to a named event" and "emit a named
//! event with a payload"; [`EventBus`] captures that so hosts can plug in
//! their own dispatcher. [`EventEmitter`] is the in-process default.

use std::collections::HashMap;

use serde_json::Value;

/// Boxed event listener.
pub type Listener = Box<dyn FnMut(&Value)>;

/// Identifies a subscription for [`EventBus::off`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub trait EventBus {
    /// Subscribe `listener` to `event`.
    fn on(&mut self, event: &str, listener: Listener) -> ListenerId;

    /// Remove a subscription. Returns `false` if it was not registered.
    fn off(&mut self, event: &str, id: ListenerId) -> bool;

    /// Invoke every listener of `event` in subscription order; returns how many ran.
    fn emit(&mut self, event: &str, payload: &Value) -> usize;
}

/// Synchronous, single-threaded event emitter.
#[derive(Default)]
pub struct EventEmitter {
    next_id: u64,
    listeners: HashMap<String, Vec<(ListenerId, Listener)>>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.get(event).map(Vec::len).unwrap_or(0)
    }
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<&str, usize> = self
            .listeners
            .iter()
            .map(|(k, v)| (k.as_str(), v.len()))
            .collect();
        f.debug_struct("EventEmitter").field("listeners", &counts).finish()
    }
}

impl EventBus for EventEmitter {
    fn on(&mut self, event: &str, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(event.to_string())
            .or_default()
            .push((id, listener));
        id
    }

    fn off(&mut self, event: &str, id: ListenerId) -> bool {
        let Some(list) = self.listeners.get_mut(event) else {
            return false;
        };
        let before = list.len();
        list.retain(|(lid, _)| *lid != id);
        let removed = list.len() != before;
        if list.is_empty() {
            self.listeners.remove(event);
        }
        removed
    }

    fn emit(&mut self, event: &str, payload: &Value) -> usize {
        let Some(list) = self.listeners.get_mut(event) else {
            return 0;
        };
        for (_, listener) in list.iter_mut() {
            listener(payload);
        }
        list.len()
    }
}
