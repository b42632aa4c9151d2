//! Force-feedback effect descriptors.
//!
//! These types mirror the kernel's `struct ff_effect` and its nested
//! substructures (`ff_trigger`, `ff_replay`, `ff_envelope`,
//! `ff_constant_effect`). The crate only models and validates the
//! descriptor; serializing it to the fixed binary layout and submitting it
//! over ioctl is the transport's job (see [`crate::transport`]).
//!
//! Field constraints come straight from `linux/input.h`: durations and
//! envelope levels are unsigned 16-bit and must not exceed `0x7FFF`, the
//! constant-effect level is signed 16-bit, and the effect direction is a
//! quarter-turn circular encoding (0x0000 = down, 0x4000 = left,
//! 0x8000 = up, 0xC000 = right), not degrees.
//!
//! Validation happens at construction, never at upload time, and values
//! above a cap are rejected rather than clamped.

use crate::codes::FF_CONSTANT;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum envelope duration and level, per `linux/input.h`.
pub const FF_ENVELOPE_MAX: u16 = 0x7FFF;

/// Scheduling parameters for an effect (`ff_replay`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FFReplay {
    /// Duration of the effect in ms.
    pub length: u16,
    /// Delay before the effect starts playing, in ms.
    pub delay: u16,
}

impl Default for FFReplay {
    fn default() -> Self {
        Self {
            length: 500,
            delay: 1,
        }
    }
}

impl FFReplay {
    pub fn new(length: u16, delay: u16) -> Self {
        Self { length, delay }
    }
}

impl fmt::Display for FFReplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ff_replay length {}ms replay after {}ms ",
            self.length, self.delay
        )
    }
}

/// Input condition that starts an effect (`ff_trigger`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FFTrigger {
    /// Number of the button triggering the effect; 0 means no trigger.
    pub button: u16,
    /// How soon the effect can be re-triggered, in ms.
    pub interval: u16,
}

impl FFTrigger {
    pub fn new(button: u16, interval: u16) -> Self {
        Self { button, interval }
    }
}

impl fmt::Display for FFTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ff_trigger button {} interval {}ms ",
            self.button, self.interval
        )
    }
}

/// Attack/fade shaping curve for an effect (`ff_envelope`).
///
/// Levels are absolute values; the kernel applies the polarity of the
/// effect's base level. All four fields are capped at [`FF_ENVELOPE_MAX`];
/// the fields stay private so the cap holds for the value's whole life, and
/// deserialization re-validates through the same constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEnvelope")]
pub struct FFEnvelope {
    attack_length: u16,
    attack_level: u16,
    fade_length: u16,
    fade_level: u16,
}

#[derive(Deserialize)]
struct RawEnvelope {
    attack_length: u16,
    attack_level: u16,
    fade_length: u16,
    fade_level: u16,
}

impl TryFrom<RawEnvelope> for FFEnvelope {
    type Error = Error;

    fn try_from(raw: RawEnvelope) -> Result<Self, Error> {
        FFEnvelope::new(
            raw.attack_length,
            raw.attack_level,
            raw.fade_length,
            raw.fade_level,
        )
    }
}

impl Default for FFEnvelope {
    fn default() -> Self {
        Self {
            attack_length: 150,
            attack_level: 0x3FFF,
            fade_length: 1000,
            fade_level: 0,
        }
    }
}

impl FFEnvelope {
    pub fn new(
        attack_length: u16,
        attack_level: u16,
        fade_length: u16,
        fade_level: u16,
    ) -> Result<Self, Error> {
        check_envelope_field("attack_length", attack_length)?;
        check_envelope_field("attack_level", attack_level)?;
        check_envelope_field("fade_length", fade_length)?;
        check_envelope_field("fade_level", fade_level)?;
        Ok(Self {
            attack_length,
            attack_level,
            fade_length,
            fade_level,
        })
    }

    /// Duration of the attack in ms.
    pub fn attack_length(&self) -> u16 {
        self.attack_length
    }

    /// Level at the beginning of the attack.
    pub fn attack_level(&self) -> u16 {
        self.attack_level
    }

    /// Duration of the fade in ms.
    pub fn fade_length(&self) -> u16 {
        self.fade_length
    }

    /// Level at the end of the fade.
    pub fn fade_level(&self) -> u16 {
        self.fade_level
    }
}

fn check_envelope_field(field: &'static str, value: u16) -> Result<(), Error> {
    if value > FF_ENVELOPE_MAX {
        return Err(Error::OutOfRange {
            field,
            value: value as u32,
            max: FF_ENVELOPE_MAX as u32,
        });
    }
    Ok(())
}

impl fmt::Display for FFEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ff_envelope attack level 0x{:x} {}ms fade to  0x{:x} over {} ms",
            self.attack_level, self.attack_length, self.fade_level, self.fade_length
        )
    }
}

/// Parameters for a constant force effect (`ff_constant_effect`).
///
/// The envelope parameter is statically typed, so handing a non-envelope
/// value here is unrepresentable rather than a runtime check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FFConstantEffect {
    /// Starting strength of the effect; may be negative.
    pub level: i16,
    pub envelope: FFEnvelope,
}

impl Default for FFConstantEffect {
    fn default() -> Self {
        Self {
            level: 0x3FF,
            envelope: FFEnvelope::default(),
        }
    }
}

impl FFConstantEffect {
    pub fn new(level: i16, envelope: FFEnvelope) -> Self {
        Self { level, envelope }
    }
}

impl fmt::Display for FFConstantEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Negative levels render as the 16-bit two's-complement bit pattern,
        // matching the unsigned view the kernel sees on the wire.
        write!(
            f,
            "ff_constant effect start level 0x{:x} envelope {}",
            self.level, self.envelope
        )
    }
}

/// Effect-kind-specific payload (the `u` union in `ff_effect`).
///
/// A closed tagged union: each supported kernel effect kind gets a variant.
/// The kernel also defines ramp, periodic, rumble, spring and friction
/// effects; they slot in here as new variants without touching the existing
/// ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    Constant(FFConstantEffect),
}

impl EffectKind {
    /// Kernel effect kind tag (`FF_CONSTANT`, …).
    pub fn code(&self) -> u16 {
        match self {
            EffectKind::Constant(_) => FF_CONSTANT,
        }
    }

    /// Symbolic name of the kind tag.
    pub fn label(&self) -> &'static str {
        match self {
            EffectKind::Constant(_) => "FF_CONSTANT",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectKind::Constant(effect) => effect.fmt(f),
        }
    }
}

/// Effect direction: 0 degrees, pulling down.
pub const FX_DOWN: u16 = 0x0000;
/// Effect direction: 90 degrees, pulling left.
pub const FX_LEFT: u16 = 0x4000;
/// Effect direction: 180 degrees, pulling up.
pub const FX_UP: u16 = 0x8000;
/// Effect direction: 270 degrees, pulling right.
pub const FX_RIGHT: u16 = 0xC000;

/// A full force-feedback effect descriptor (`ff_effect`).
///
/// The effect kind tag is derived from the payload, so descriptor and
/// payload cannot disagree. `id` starts at -1 ("register a new effect");
/// after the transport uploads the descriptor the device-assigned id is
/// written back here and used for playback, update and removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FFEffect {
    /// Device-assigned effect id; -1 requests a new slot.
    pub id: i16,
    /// Quarter-turn encoded direction; any 16-bit value is valid, only the
    /// four `FX_*` constants have names.
    pub direction: u16,
    pub trigger: FFTrigger,
    pub replay: FFReplay,
    pub effect: EffectKind,
}

impl FFEffect {
    pub fn new(
        id: i16,
        direction: u16,
        trigger: FFTrigger,
        replay: FFReplay,
        effect: EffectKind,
    ) -> Self {
        Self {
            id,
            direction,
            trigger,
            replay,
            effect,
        }
    }

    /// Kernel effect kind tag, derived from the payload.
    pub fn effect_type(&self) -> u16 {
        self.effect.code()
    }

    /// Name for one of the four defined directions, if this is one.
    pub fn direction_label(&self) -> Option<&'static str> {
        match self.direction {
            FX_DOWN => Some("DOWN"),
            FX_LEFT => Some("LEFT"),
            FX_UP => Some("UP"),
            FX_RIGHT => Some("RIGHT"),
            _ => None,
        }
    }
}

impl fmt::Display for FFEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Unnamed directions render their raw numeric value; arbitrary
        // directions are valid on the wire, so this is a best-effort label,
        // not a failure.
        write!(
            f,
            "ff_effect id {} type {} direction ",
            self.id,
            self.effect.label()
        )?;
        match self.direction_label() {
            Some(label) => f.write_str(label)?,
            None => write!(f, "{}", self.direction)?,
        }
        write!(f, " effect: {}", self.effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_rejects_values_above_cap() {
        let err = FFEnvelope::new(150, 0x8000, 1000, 0).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfRange {
                field: "attack_level",
                value: 0x8000,
                max: 0x7FFF,
            }
        );

        // Exact max is fine.
        let env = FFEnvelope::new(150, 0x7FFF, 1000, 0).unwrap();
        assert_eq!(env.attack_level(), 0x7FFF);

        assert!(FFEnvelope::new(0x9000, 0, 0, 0).is_err());
        assert!(FFEnvelope::new(0, 0, 0xFFFF, 0).is_err());
        assert!(FFEnvelope::new(0, 0, 0, 0x8001).is_err());
    }

    #[test]
    fn envelope_defaults() {
        let env = FFEnvelope::default();
        assert_eq!(env.attack_length(), 150);
        assert_eq!(env.attack_level(), 0x3FFF);
        assert_eq!(env.fade_length(), 1000);
        assert_eq!(env.fade_level(), 0);
        assert_eq!(
            env.to_string(),
            "ff_envelope attack level 0x3fff 150ms fade to  0x0 over 1000 ms"
        );
    }

    #[test]
    fn envelope_deserialization_revalidates() {
        let json = r#"{"attack_length":150,"attack_level":32768,"fade_length":0,"fade_level":0}"#;
        assert!(serde_json::from_str::<FFEnvelope>(json).is_err());

        let json = r#"{"attack_length":150,"attack_level":32767,"fade_length":0,"fade_level":0}"#;
        let env: FFEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(env.attack_level(), 0x7FFF);
    }

    #[test]
    fn replay_and_trigger_defaults() {
        let replay = FFReplay::default();
        assert_eq!((replay.length, replay.delay), (500, 1));

        let trigger = FFTrigger::default();
        assert_eq!((trigger.button, trigger.interval), (0, 0));

        assert_eq!(
            FFReplay::new(200, 10).to_string(),
            "ff_replay length 200ms replay after 10ms "
        );
        assert_eq!(
            FFTrigger::new(5, 50).to_string(),
            "ff_trigger button 5 interval 50ms "
        );
    }

    #[test]
    fn direction_labels() {
        let constant = EffectKind::Constant(FFConstantEffect::default());
        let named = FFEffect::new(0, FX_LEFT, FFTrigger::default(), FFReplay::default(), constant);
        assert_eq!(named.direction_label(), Some("LEFT"));
        assert!(named.to_string().contains("direction LEFT"));

        let unmapped = FFEffect::new(0, 0x1234, FFTrigger::default(), FFReplay::default(), constant);
        assert_eq!(unmapped.direction_label(), None);
        assert!(unmapped.to_string().contains("direction 4660"));
    }

    #[test]
    fn constant_effect_level_renders_in_hex() {
        let effect = FFConstantEffect::new(-500, FFEnvelope::default());
        let rendered = effect.to_string();
        // -500 as a 16-bit bit pattern.
        assert!(rendered.starts_with("ff_constant effect start level 0xfe0c envelope "));
        assert!(rendered.contains("ff_envelope attack level 0x3fff"));
    }

    #[test]
    fn full_descriptor_round_trip() {
        let replay = FFReplay::new(200, 10);
        let trigger = FFTrigger::new(5, 50);
        let envelope = FFEnvelope::default();
        let constant = FFConstantEffect::new(-500, envelope);
        let mut effect = FFEffect::new(
            -1,
            FX_UP,
            trigger,
            replay,
            EffectKind::Constant(constant),
        );

        assert_eq!(effect.effect_type(), crate::codes::FF_CONSTANT);

        let rendered = effect.to_string();
        assert!(rendered.contains("id -1"));
        assert!(rendered.contains("type FF_CONSTANT"));
        assert!(rendered.contains("direction UP"));
        assert!(rendered.contains("envelope"));
        assert!(rendered.contains("0xfe0c"));

        // The transport writes the assigned id back before playback.
        effect.id = 3;
        assert!(effect.to_string().contains("id 3"));

        let json = serde_json::to_string(&effect).unwrap();
        let back: FFEffect = serde_json::from_str(&json).unwrap();
        assert_eq!(back, effect);
    }
}
