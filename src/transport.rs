//! Seams to the external transports.
//!
//! The model itself performs no I/O. Raw events arrive through an
//! [`EventSource`] (typically an evdev device node reader) and validated
//! effect descriptors leave through an [`EffectUploader`] (typically an
//! ioctl wrapper). Both live entirely outside this crate; only the traits
//! are defined here.

use crate::event::InputEvent;
use crate::ff::FFEffect;
use thiserror::Error;

/// Produces raw input events.
pub trait EventSource {
    /// Drains the events observed since the last poll.
    fn poll(&mut self) -> Vec<InputEvent>;
    fn name(&self) -> &str;
    fn id(&self) -> &str;
}

/// Failure reported by an effect transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("device rejected effect: {0}")]
    Rejected(String),
    #[error("device has no free effect slots")]
    NoSlots,
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Carries a validated effect descriptor to a device.
pub trait EffectUploader {
    /// Uploads `effect`, returning the device-assigned non-negative id.
    ///
    /// An effect with `id == -1` registers a new slot; any other id updates
    /// the existing effect in place.
    fn upload(&mut self, effect: &FFEffect) -> Result<i16, UploadError>;
}

/// Uploads `effect` and writes the assigned id back into it.
pub fn register(
    uploader: &mut dyn EffectUploader,
    effect: &mut FFEffect,
) -> Result<i16, UploadError> {
    let id = uploader.upload(effect)?;
    effect.id = id;
    Ok(id)
}
