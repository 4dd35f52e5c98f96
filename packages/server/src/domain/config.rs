//! Matchmaking configuration and cleanup policies.

use std::time::Duration;

/// What happens to a peer's ledger entry when the transport layer
/// reports a disconnect.
///
/// `PreserveLedger` keeps the pairing so a briefly dropped client can
/// reconnect and recover its match via poll. `PurgeLedger` deletes the
/// pairing together with the queue entry. The two are mutually
/// exclusive; the server picks one at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisconnectPolicy {
    #[default]
    PreserveLedger,
    PurgeLedger,
}

/// How a confirm call cleans up the Match Ledger.
///
/// `CallerOnly` deletes only the caller's entry; the partner's mirrored
/// entry stays until the partner confirms or the sweep reclaims it.
/// `BothSides` deletes both mirrored entries in one atomic step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmPolicy {
    #[default]
    CallerOnly,
    BothSides,
}

/// Matchmaking timeouts and policies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchmakingConfig {
    /// Waiting Room entries older than this are reclaimed
    pub queue_timeout_millis: i64,
    /// Match Ledger entries older than this are reclaimed
    pub match_timeout_millis: i64,
    /// Interval between reclaim sweeps
    pub sweep_interval: Duration,
    pub disconnect_policy: DisconnectPolicy,
    pub confirm_policy: ConfirmPolicy,
}

impl Default for MatchmakingConfig {
    fn default() -> Self {
        Self {
            queue_timeout_millis: 120_000,
            match_timeout_millis: 300_000,
            sweep_interval: Duration::from_secs(30),
            disconnect_policy: DisconnectPolicy::default(),
            confirm_policy: ConfirmPolicy::default(),
        }
    }
}
