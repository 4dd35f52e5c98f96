//! Domain errors.

use thiserror::Error;

/// Validation errors raised by domain value objects.
///
/// Validation happens before any state is mutated; an invalid request
/// never reaches the lobby.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Peer id was missing or empty
    #[error("peerId required")]
    MissingPeerId,
}
