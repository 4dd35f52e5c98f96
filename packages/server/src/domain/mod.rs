//! Domain layer for the matchmaking server.
//!
//! Value objects, the `Lobby` aggregate (Waiting Room + Match Ledger),
//! policies, and the repository interface the use case layer depends on.

mod config;
mod error;
mod lobby;
mod peer;
mod repository;

pub use config::{ConfirmPolicy, DisconnectPolicy, MatchmakingConfig};
pub use error::DomainError;
pub use lobby::{
    DisconnectReport, JoinOutcome, LeaveReport, Lobby, Pairing, PollOutcome, SweepReport, Waiter,
};
pub use peer::{DisplayName, PeerId, Timestamp};
pub use repository::LobbyRepository;

#[cfg(test)]
pub use repository::MockLobbyRepository;
