//! Matchmaking queue server library.
//!
//! Pairs anonymous peers into one-to-one sessions for a peer-to-peer
//! connection. Clients join over HTTP, poll for a match, confirm, and
//! leave; an external relay collaborator carries the actual signaling
//! and reports transport lifecycle events through hook endpoints. A
//! background sweep reclaims abandoned queue entries and unconfirmed
//! pairings.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
