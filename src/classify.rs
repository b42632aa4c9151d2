//! Classification of raw events into typed wrappers.
//!
//! A [`Classifier`] maps an event's `type_` tag to the wrapper constructor
//! that should decorate it. The default table covers the four standard
//! categories; hosts may [`register`](Classifier::register) additional or
//! replacement constructors for vendor-specific categories before use.
//!
//! The process-wide table behind [`classify`] is installed once (or lazily
//! defaulted on first use) and read-only afterwards, so concurrent
//! classification needs no locking.

use crate::codes::{NameTable, EV_ABS, EV_KEY, EV_REL, EV_SYN};
use crate::error::Error;
use crate::event::{AbsEvent, InputEvent, KeyEvent, RelEvent, SynEvent, TypedEvent};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Constructor for a typed wrapper over a raw event.
pub type EventCtor = fn(InputEvent, &dyn NameTable) -> TypedEvent;

/// Maps event type tags to wrapper constructors.
#[derive(Clone, Debug)]
pub struct Classifier {
    ctors: HashMap<u16, EventCtor>,
}

impl Default for Classifier {
    fn default() -> Self {
        let mut classifier = Self {
            ctors: HashMap::new(),
        };
        classifier.register(EV_KEY, |ev, names| TypedEvent::Key(KeyEvent::new(ev, names)));
        classifier.register(EV_REL, |ev, _| TypedEvent::Rel(RelEvent::new(ev)));
        classifier.register(EV_ABS, |ev, _| TypedEvent::Abs(AbsEvent::new(ev)));
        classifier.register(EV_SYN, |ev, _| TypedEvent::Syn(SynEvent::new(ev)));
        classifier
    }
}

impl Classifier {
    /// An empty table with no registered categories.
    pub fn empty() -> Self {
        Self {
            ctors: HashMap::new(),
        }
    }

    /// Registers (or replaces) the constructor for `type_`.
    pub fn register(&mut self, type_: u16, ctor: EventCtor) {
        self.ctors.insert(type_, ctor);
    }

    /// Whether a constructor is registered for `type_`.
    pub fn handles(&self, type_: u16) -> bool {
        self.ctors.contains_key(&type_)
    }

    /// Decorates `event` with its category wrapper.
    ///
    /// An unregistered type tag yields [`Error::Unclassified`]; the caller
    /// decides whether to keep the event generic or drop it. No fallback
    /// wrapper is ever invented here.
    pub fn classify(
        &self,
        event: InputEvent,
        names: &dyn NameTable,
    ) -> Result<TypedEvent, Error> {
        match self.ctors.get(&event.type_) {
            Some(ctor) => Ok(ctor(event, names)),
            None => Err(Error::Unclassified(event.type_)),
        }
    }
}

static CLASSIFIER: OnceLock<Classifier> = OnceLock::new();

/// Installs `classifier` as the process-wide table.
///
/// Must happen before the first [`classify`] call; afterwards the table is
/// frozen and the unused `classifier` is handed back as the error value.
pub fn init_classifier(classifier: Classifier) -> Result<(), Classifier> {
    CLASSIFIER.set(classifier)
}

/// Classifies `event` against the process-wide table.
///
/// If no table was installed with [`init_classifier`], the default table is
/// frozen in on first use.
pub fn classify(event: InputEvent, names: &dyn NameTable) -> Result<TypedEvent, Error> {
    CLASSIFIER
        .get_or_init(Classifier::default)
        .classify(event, names)
}
