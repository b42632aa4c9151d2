//! evcore — typed in-memory model of Linux evdev input events and
//! force-feedback effect descriptors.
//!
//! Provides the raw [`InputEvent`] record, typed per-category wrappers, a
//! late-bindable [`Classifier`], and the validated [`FFEffect`] descriptor
//! tree. Device discovery, ioctl transport and the symbolic name tables all
//! live outside this crate; see [`transport`] and [`codes::NameTable`] for
//! the seams.

pub mod bus;
pub mod classify;
pub mod codes;
pub mod error;
pub mod event;
pub mod ff;
pub mod transport;

pub use classify::*;
pub use codes::*;
pub use error::Error;
pub use event::*;
pub use ff::*;
