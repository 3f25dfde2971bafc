//! Range errors
//!
//! These indicate a broken caller contract rather than bad user input.

/// A query outside the domain of a ramp.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RangeError {
    /// No ramp segment contains the requested lightness.
    #[error("no stop covers lightness {0}")]
    Uncovered(f64),

    /// A ramp function was requested for an empty key-color list.
    #[error("ramp has no key colors")]
    NoKeyColors,

    /// A key-color index past the end of the list.
    #[error("key color index {0} out of range")]
    KeyIndex(usize),

    /// A ramp index past the end of a project's ramps.
    #[error("ramp index {0} out of range")]
    RampIndex(usize),
}
