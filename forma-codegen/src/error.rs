use thiserror::Error;

use crate::Phase;

/// Result type for generation operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while building classes.
///
/// None of these are retried: they are programming or schema-authoring
/// mistakes and surface to the caller of [`Source::generate`](crate::Source::generate).
#[derive(Debug, Error)]
pub enum Error {
    /// A class or property name is not a valid identifier.
    #[error("invalid {kind} name '{name}': {reason}")]
    InvalidName {
        kind: &'static str,
        name: String,
        reason: &'static str,
    },

    /// A listener received a node whose shape does not match the phase.
    #[error("listener '{listener}' rejected the {phase} event: {message}")]
    InvariantViolation {
        listener: &'static str,
        phase: Phase,
        message: String,
    },

    /// The project already handed out a slot for this class.
    #[error("a file slot for class '{0}' was already claimed")]
    SlotClaimed(String),

    /// The schema could not be loaded.
    #[error("invalid schema")]
    Schema(#[from] Box<forma_manifest::Error>),
}

impl Error {
    /// Create an invariant violation for `listener` during `phase`.
    pub fn invariant(listener: &'static str, phase: Phase, message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            listener,
            phase,
            message: message.into(),
        }
    }

    /// Returns true for listener invariant violations.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }
}
