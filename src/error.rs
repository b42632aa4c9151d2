use thiserror::Error;

/// Errors raised while building or classifying model values.
///
/// Construction failures are fatal to that single construction attempt only;
/// the surrounding event stream or effect-building workflow continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A numeric field violated its documented range. Never silently clamped.
    #[error("{field} out of range: {value} (max {max})")]
    OutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },

    /// The event's type tag has no registered wrapper constructor.
    ///
    /// Recoverable: the caller may keep working with the generic event.
    #[error("no classifier registered for event type {0:#06x}")]
    Unclassified(u16),
}
