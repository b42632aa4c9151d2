//! Raw input events and their typed wrappers.
//!
//! [`InputEvent`] mirrors the kernel's `struct input_event`: a timestamp
//! split into seconds and microseconds plus a `(type, code, value)` triple.
//! The typed wrappers ([`KeyEvent`], [`RelEvent`], [`AbsEvent`],
//! [`SynEvent`]) each own exactly one `InputEvent` and add per-category
//! interpretation; the raw event knows nothing about its wrappers.
//!
//! ## Rendering conventions
//! The `Display` output of every type here is parsed by downstream tooling
//! and is therefore stable char-for-char, including trailing spaces and the
//! two-digit zero padding:
//!
//! ```text
//! event at 1337197425.477827, code 04, type 04, val 458792
//! key event at 1337197425.477835, 28 (KEY_ENTER), up
//! relative axis event at 1337197425.477835, REL_X
//! ```
//!
//! `Display` on the axis/marker wrappers falls back to the bare numeric
//! code; use [`TypedEvent::render`] with a [`NameTable`] to resolve symbolic
//! names.

use crate::codes::{NameTable, EV_ABS, EV_REL, EV_SYN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A generic input event, one per kernel-reported occurrence.
///
/// Immutable after construction. `type_` selects the category, `code` the
/// channel within it, and the meaning of `value` depends on both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    /// Seconds since epoch at which the event occurred.
    pub sec: u64,
    /// Microsecond portion of the timestamp, `0..=999_999`.
    pub usec: u32,
    /// Event category tag, one of the `EV_*` constants.
    pub type_: u16,
    /// Event code within the category.
    pub code: u16,
    /// Event value; signed, interpretation depends on `type_`/`code`.
    pub value: i32,
}

impl InputEvent {
    pub fn new(sec: u64, usec: u32, type_: u16, code: u16, value: i32) -> Self {
        debug_assert!(usec < 1_000_000);
        Self {
            sec,
            usec,
            type_,
            code,
            value,
        }
    }

    /// Event timestamp as a float, `sec + usec / 1_000_000`.
    ///
    /// Display and ordering heuristics only; protocol decisions never hinge
    /// on this derived value.
    pub fn timestamp(&self) -> f64 {
        self.sec as f64 + self.usec as f64 / 1_000_000.0
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "event at {:.6}, code {:02}, type {:02}, val {:02}",
            self.timestamp(),
            self.code,
            self.type_,
            self.value
        )
    }
}

/// State of a key or button, derived from an event's `value`.
///
/// Some drivers emit values outside the three standard states; those are
/// preserved in [`KeyState::Unknown`] rather than aborting the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyState {
    Up,
    Down,
    Hold,
    Unknown(i32),
}

impl KeyState {
    pub fn from_value(value: i32) -> Self {
        match value {
            0 => KeyState::Up,
            1 => KeyState::Down,
            2 => KeyState::Hold,
            other => KeyState::Unknown(other),
        }
    }
}

impl fmt::Display for KeyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            KeyState::Up => "up",
            KeyState::Down => "down",
            KeyState::Hold => "hold",
            KeyState::Unknown(_) => "unknown",
        };
        f.write_str(word)
    }
}

/// A key or button state change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Raw scan code (the event's `code`).
    pub scancode: u16,
    /// Symbolic key name, or the bare numeric code if the table missed.
    pub keycode: String,
    /// Derived press state.
    pub keystate: KeyState,
    /// The wrapped raw event.
    pub event: InputEvent,
}

impl KeyEvent {
    pub fn new(event: InputEvent, names: &dyn NameTable) -> Self {
        Self {
            scancode: event.code,
            keycode: names.resolve(event.type_, event.code).into_owned(),
            keystate: KeyState::from_value(event.value),
            event,
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "key event at {:.6}, {} ({}), {}",
            self.event.timestamp(),
            self.scancode,
            self.keycode,
            self.keystate
        )
    }
}

/// A relative axis change, e.g. moving the mouse 5 units left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelEvent {
    pub event: InputEvent,
}

impl RelEvent {
    pub fn new(event: InputEvent) -> Self {
        Self { event }
    }

    /// Renders with the axis name resolved through `names`.
    pub fn render(&self, names: &dyn NameTable) -> String {
        format!(
            "relative axis event at {:.6}, {} ",
            self.event.timestamp(),
            names.resolve(EV_REL, self.event.code)
        )
    }
}

/// An absolute axis change, e.g. touch coordinates on a touchscreen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsEvent {
    pub event: InputEvent,
}

impl AbsEvent {
    pub fn new(event: InputEvent) -> Self {
        Self { event }
    }

    pub fn render(&self, names: &dyn NameTable) -> String {
        format!(
            "absolute axis event at {:.6}, {} ",
            self.event.timestamp(),
            names.resolve(EV_ABS, self.event.code)
        )
    }
}

/// A marker separating groups of events, in time or in space (e.g.
/// multitouch slot separators).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynEvent {
    pub event: InputEvent,
}

impl SynEvent {
    pub fn new(event: InputEvent) -> Self {
        Self { event }
    }

    pub fn render(&self, names: &dyn NameTable) -> String {
        format!(
            "synchronization event at {:.6}, {} ",
            self.event.timestamp(),
            names.resolve(EV_SYN, self.event.code)
        )
    }
}

/// A classified event: one of the typed wrappers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TypedEvent {
    Key(KeyEvent),
    Rel(RelEvent),
    Abs(AbsEvent),
    Syn(SynEvent),
}

impl TypedEvent {
    /// The wrapped raw event.
    pub fn event(&self) -> &InputEvent {
        match self {
            TypedEvent::Key(e) => &e.event,
            TypedEvent::Rel(e) => &e.event,
            TypedEvent::Abs(e) => &e.event,
            TypedEvent::Syn(e) => &e.event,
        }
    }

    /// Renders with symbolic names resolved through `names`.
    ///
    /// Key events resolve their name at construction, so only the axis and
    /// marker wrappers consult the table here.
    pub fn render(&self, names: &dyn NameTable) -> String {
        match self {
            TypedEvent::Key(e) => e.to_string(),
            TypedEvent::Rel(e) => e.render(names),
            TypedEvent::Abs(e) => e.render(names),
            TypedEvent::Syn(e) => e.render(names),
        }
    }
}

impl fmt::Display for TypedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&crate::codes::NumericNames))
    }
}
