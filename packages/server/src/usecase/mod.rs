//! UseCase layer: one struct per matchmaking operation.
//!
//! Each use case depends on the `LobbyRepository` trait and, where the
//! operation needs the current time, on the injected `Clock`, never on
//! the wall clock directly, so tests drive everything deterministically.

mod confirm_match;
mod get_lobby_state;
mod join_queue;
mod leave_queue;
mod peer_lifecycle;
mod poll_match;
mod reclaim_stale;

pub use confirm_match::ConfirmMatchUseCase;
pub use get_lobby_state::{GetLobbyStateUseCase, LobbyStats};
pub use join_queue::JoinQueueUseCase;
pub use leave_queue::LeaveQueueUseCase;
pub use peer_lifecycle::PeerLifecycleUseCase;
pub use poll_match::PollMatchUseCase;
pub use reclaim_stale::ReclaimStaleUseCase;
