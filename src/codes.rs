//! Kernel event-category tags and the code→name lookup seam.
//!
//! The crate does not own the symbolic name tables (`KEY_ENTER`, `REL_X`, …);
//! hosts supply one through [`NameTable`]. A lookup miss is never an error —
//! vendor-specific scan codes are common, so rendering always falls back to
//! the bare numeric code.

use std::borrow::Cow;
use std::collections::HashMap;

/// Synchronization markers (`SYN_REPORT` and friends).
pub const EV_SYN: u16 = 0x00;
/// Key and button state changes.
pub const EV_KEY: u16 = 0x01;
/// Relative axis changes (mouse motion, wheels).
pub const EV_REL: u16 = 0x02;
/// Absolute axis changes (touchscreens, joysticks).
pub const EV_ABS: u16 = 0x03;
/// Force-feedback status reports.
pub const EV_FF: u16 = 0x15;

/// Constant force effect kind.
pub const FF_CONSTANT: u16 = 0x52;
/// Rumble (dual-motor) effect kind.
pub const FF_RUMBLE: u16 = 0x50;
/// Periodic waveform effect kind.
pub const FF_PERIODIC: u16 = 0x51;
/// Ramp effect kind.
pub const FF_RAMP: u16 = 0x53;
/// Spring condition effect kind.
pub const FF_SPRING: u16 = 0x54;
/// Friction condition effect kind.
pub const FF_FRICTION: u16 = 0x55;
/// Damper condition effect kind.
pub const FF_DAMPER: u16 = 0x56;

/// Externally supplied mapping from `(event type, code)` to a symbolic name.
pub trait NameTable {
    /// Look up the symbolic name for `code` within category `type_`.
    fn lookup(&self, type_: u16, code: u16) -> Option<Cow<'_, str>>;

    /// Resolve a name, falling back to the bare numeric code on a miss.
    fn resolve(&self, type_: u16, code: u16) -> Cow<'_, str> {
        self.lookup(type_, code)
            .unwrap_or_else(|| Cow::Owned(code.to_string()))
    }
}

/// A [`NameTable`] with no entries: every resolve yields the numeric code.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumericNames;

impl NameTable for NumericNames {
    fn lookup(&self, _type: u16, _code: u16) -> Option<Cow<'_, str>> {
        None
    }
}

/// A map-backed [`NameTable`] for hosts that load a real code→name dump.
#[derive(Clone, Debug, Default)]
pub struct MapNames {
    names: HashMap<(u16, u16), String>,
}

impl MapNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the name for `(type_, code)`.
    pub fn insert(&mut self, type_: u16, code: u16, name: impl Into<String>) {
        self.names.insert((type_, code), name.into());
    }
}

impl NameTable for MapNames {
    fn lookup(&self, type_: u16, code: u16) -> Option<Cow<'_, str>> {
        self.names.get(&(type_, code)).map(|s| Cow::Borrowed(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_names_hit_and_miss() {
        let mut names = MapNames::new();
        names.insert(EV_KEY, 28, "KEY_ENTER");

        assert_eq!(names.resolve(EV_KEY, 28), "KEY_ENTER");
        // Miss falls back to the numeric code, never errors.
        assert_eq!(names.resolve(EV_KEY, 999), "999");
        assert_eq!(names.resolve(EV_REL, 28), "28");
    }

    #[test]
    fn numeric_names_always_fall_back() {
        assert_eq!(NumericNames.lookup(EV_ABS, 0), None);
        assert_eq!(NumericNames.resolve(EV_ABS, 0), "0");
    }
}
