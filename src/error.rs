//! Error types for fleetkit.
//!
//! All errors are strongly typed using thiserror. This enables pattern
//! matching on specific error conditions and provides clear messages.

use thiserror::Error;

/// Errors produced while interpreting command text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The text does not name any known action.
    #[error("Unknown action: {input:?}")]
    UnknownAction {
        /// The rejected command text.
        input: String,
    },
}

/// Top-level error type for fleetkit.
///
/// This enum encompasses all possible errors that can occur when driving
/// the fleet components.
#[derive(Debug, Error)]
pub enum FleetError {
    /// Writing to the output sink failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// Command text could not be interpreted.
    #[error("Action error: {0}")]
    Action(#[from] ActionError),
}

impl FleetError {
    /// Returns true if this is an output error.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Returns true if this is an action error.
    #[must_use]
    pub const fn is_action(&self) -> bool {
        matches!(self, Self::Action(_))
    }
}

/// Result type alias for fleetkit operations.
pub type FleetResult<T> = Result<T, FleetError>;
