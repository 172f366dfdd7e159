use std::fmt;

/// Reasons a spin request or a spin completion was refused.
///
/// None of these leave the session in a different state than before the
/// call; front-ends treat them as no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinError {
    /// The item list is empty, so there is nothing to land on.
    NoItems,
    /// A spin is already in flight.
    AlreadySpinning,
    /// A completion signal arrived while idle (e.g. a duplicate `transitionend`).
    NotSpinning,
}

impl fmt::Display for SpinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinError::NoItems => write!(f, "Cannot spin an empty wheel"),
            SpinError::AlreadySpinning => write!(f, "A spin is already in progress"),
            SpinError::NotSpinning => write!(f, "No spin is in progress"),
        }
    }
}

impl std::error::Error for SpinError {}
