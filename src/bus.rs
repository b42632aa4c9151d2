//! Listener fan-out for classified events.
//!
//! Hosts that want to forward decorated events to several consumers (UIs,
//! loggers, recorders) can push them through an [`EventBus`] instead of
//! wiring each consumer by hand.

use crate::codes::MapNames;
use crate::event::TypedEvent;
use std::collections::HashMap;

/// Trait for reacting to classified events.
pub trait EventListener: Send {
    fn on_event(&mut self, event: &TypedEvent);
}

/// Determines which kinds of events a listener wants to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventFilter {
    All,
    KeysOnly,
    /// Relative and absolute axis events.
    MotionOnly,
    Custom(fn(&TypedEvent) -> bool),
}

impl EventFilter {
    fn passes(&self, event: &TypedEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::KeysOnly => matches!(event, TypedEvent::Key(_)),
            EventFilter::MotionOnly => {
                matches!(event, TypedEvent::Rel(_) | TypedEvent::Abs(_))
            }
            EventFilter::Custom(f) => f(event),
        }
    }
}

/// Listener with its filter and control flags.
struct ListenerEntry {
    listener: Box<dyn EventListener>,
    enabled: bool,
    filter: EventFilter,
}

/// Fans classified events out to registered listeners.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    listeners: HashMap<u64, ListenerEntry>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener; the returned id controls it later.
    pub fn add_listener(
        &mut self,
        listener: impl EventListener + 'static,
        filter: EventFilter,
    ) -> u64 {
        let id = self.next_id;
        self.listeners.insert(
            id,
            ListenerEntry {
                listener: Box::new(listener),
                enabled: true,
                filter,
            },
        );
        self.next_id += 1;
        id
    }

    /// Enables a previously registered listener.
    pub fn enable(&mut self, id: u64) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = true;
        }
    }

    /// Disables (mutes) a listener without removing it.
    pub fn disable(&mut self, id: u64) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = false;
        }
    }

    /// Unregisters a listener entirely.
    pub fn remove_listener(&mut self, id: u64) {
        self.listeners.remove(&id);
    }

    /// Emits one event to all active and matching listeners.
    pub fn emit(&mut self, event: &TypedEvent) {
        for entry in self.listeners.values_mut() {
            if entry.enabled && entry.filter.passes(event) {
                entry.listener.on_event(event);
            }
        }
    }

    /// Emits a batch of events to matching listeners.
    pub fn emit_all(&mut self, events: &[TypedEvent]) {
        for event in events {
            self.emit(event);
        }
    }
}

/// A listener that prints each event's rendered string to stdout.
pub struct Logger {
    names: MapNames,
}

impl Logger {
    pub fn new(names: MapNames) -> Self {
        Self { names }
    }
}

impl EventListener for Logger {
    fn on_event(&mut self, event: &TypedEvent) {
        println!("{}", event.render(&self.names));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Classifier;
    use crate::codes::{NumericNames, EV_KEY, EV_REL, EV_SYN};
    use crate::event::InputEvent;
    use std::sync::mpsc::{channel, Sender};

    struct Recorder {
        tx: Sender<String>,
    }

    impl EventListener for Recorder {
        fn on_event(&mut self, event: &TypedEvent) {
            self.tx.send(event.to_string()).unwrap();
        }
    }

    fn classified(type_: u16, code: u16, value: i32) -> TypedEvent {
        Classifier::default()
            .classify(InputEvent::new(0, 0, type_, code, value), &NumericNames)
            .unwrap()
    }

    #[test]
    fn filters_select_matching_events() {
        let (tx, rx) = channel();
        let mut bus = EventBus::new();
        bus.add_listener(Recorder { tx }, EventFilter::KeysOnly);

        bus.emit_all(&[
            classified(EV_KEY, 28, 1),
            classified(EV_REL, 0, -2),
            classified(EV_SYN, 0, 0),
        ]);

        let seen: Vec<String> = rx.try_iter().collect();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].starts_with("key event at "));
    }

    #[test]
    fn disabled_listeners_stay_registered() {
        let (tx, rx) = channel();
        let mut bus = EventBus::new();
        let id = bus.add_listener(Recorder { tx }, EventFilter::All);

        bus.disable(id);
        bus.emit(&classified(EV_KEY, 28, 0));
        assert_eq!(rx.try_iter().count(), 0);

        bus.enable(id);
        bus.emit(&classified(EV_KEY, 28, 0));
        assert_eq!(rx.try_iter().count(), 1);

        bus.remove_listener(id);
        bus.emit(&classified(EV_KEY, 28, 0));
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn custom_filter_sees_the_event() {
        let (tx, rx) = channel();
        let mut bus = EventBus::new();
        bus.add_listener(
            Recorder { tx },
            EventFilter::Custom(|ev| ev.event().code == 28),
        );

        bus.emit(&classified(EV_KEY, 28, 1));
        bus.emit(&classified(EV_KEY, 30, 1));
        assert_eq!(rx.try_iter().count(), 1);
    }
}
