//! The `Lobby` aggregate: Waiting Room + Match Ledger.
//!
//! All matchmaking state lives here. Methods are pure with respect to
//! time (the caller supplies `now`), so the whole pairing logic is
//! testable without a running clock or server. Concurrency is the
//! repository's concern: one lock guards the whole aggregate, so every
//! method below executes atomically from a caller's perspective.

use std::collections::{HashMap, VecDeque};

use serde::Serialize;

use super::config::{ConfirmPolicy, DisconnectPolicy};
use super::peer::{DisplayName, PeerId, Timestamp};

/// A participant waiting in the Waiting Room for a partner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Waiter {
    pub id: PeerId,
    pub display_name: DisplayName,
    pub enqueued_at: Timestamp,
}

/// One side of a confirmed match.
///
/// A single match is stored as two mirrored entries, one per peer.
/// Invariant: while neither side has confirmed, left, or been
/// reclaimed, an entry for A pointing at B implies an entry for B
/// pointing at A.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub partner_id: PeerId,
    pub partner_name: DisplayName,
    pub created_at: Timestamp,
}

/// Result of a join request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// The peer already has a pairing (reconnect); queue untouched
    AlreadyPaired(Pairing),
    /// Matched with the oldest waiter
    Matched {
        partner_id: PeerId,
        partner_name: DisplayName,
    },
    /// No partner available; appended to the Waiting Room
    Enqueued { position: usize },
}

/// Result of polling for a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    Matched(Pairing),
    /// Still in the Waiting Room
    Waiting,
    /// Neither waiting nor paired
    Absent,
}

/// What an explicit leave removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveReport {
    pub removed_waiter: bool,
    pub removed_pairing: bool,
}

/// What a transport disconnect removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisconnectReport {
    pub removed_waiter: bool,
    pub removed_pairing: bool,
}

/// Peers evicted by one reclaim sweep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub removed_waiters: Vec<PeerId>,
    pub removed_pairings: Vec<PeerId>,
}

impl SweepReport {
    pub fn is_empty(&self) -> bool {
        self.removed_waiters.is_empty() && self.removed_pairings.is_empty()
    }
}

/// Matchmaking state: the FIFO Waiting Room and the Match Ledger.
///
/// Initialized empty at startup, owned by the process for its whole
/// lifetime, no persistence.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Lobby {
    waiting: VecDeque<Waiter>,
    pairings: HashMap<PeerId, Pairing>,
}

impl Lobby {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join the Waiting Room, or match with the oldest waiter.
    ///
    /// Reconnect short-circuit first: a peer that already has a pairing
    /// gets it back unchanged and never touches the queue, so a rejoin
    /// can neither create a duplicate match nor consume another waiter.
    pub fn join(&mut self, id: PeerId, name: DisplayName, now: Timestamp) -> JoinOutcome {
        if let Some(existing) = self.pairings.get(&id) {
            return JoinOutcome::AlreadyPaired(existing.clone());
        }

        // Duplicate joins from the same client replace the old entry
        self.waiting.retain(|w| w.id != id);

        if let Some(partner) = self.waiting.pop_front() {
            // Both mirrored ledger entries are written in this same
            // call, under the same lock: symmetry is never observable
            // as violated from outside.
            self.pairings.insert(
                id.clone(),
                Pairing {
                    partner_id: partner.id.clone(),
                    partner_name: partner.display_name.clone(),
                    created_at: now,
                },
            );
            self.pairings.insert(
                partner.id.clone(),
                Pairing {
                    partner_id: id,
                    partner_name: name,
                    created_at: now,
                },
            );
            return JoinOutcome::Matched {
                partner_id: partner.id,
                partner_name: partner.display_name,
            };
        }

        self.waiting.push_back(Waiter {
            id,
            display_name: name,
            enqueued_at: now,
        });
        JoinOutcome::Enqueued {
            position: self.waiting.len(),
        }
    }

    /// Look up the current state of a peer without mutating anything
    pub fn poll(&self, id: &PeerId) -> PollOutcome {
        if let Some(pairing) = self.pairings.get(id) {
            return PollOutcome::Matched(pairing.clone());
        }
        if self.waiting.iter().any(|w| &w.id == id) {
            return PollOutcome::Waiting;
        }
        PollOutcome::Absent
    }

    /// Confirm a match, deleting ledger entries per `policy`.
    ///
    /// Returns whether the caller had an entry. With `BothSides` the
    /// partner's mirrored entry is removed in the same step, but only
    /// if it still points back at the caller.
    pub fn confirm(&mut self, id: &PeerId, policy: ConfirmPolicy) -> bool {
        let Some(pairing) = self.pairings.remove(id) else {
            return false;
        };
        if policy == ConfirmPolicy::BothSides
            && self
                .pairings
                .get(&pairing.partner_id)
                .is_some_and(|mirror| &mirror.partner_id == id)
        {
            self.pairings.remove(&pairing.partner_id);
        }
        true
    }

    /// Leave explicitly: remove from the Waiting Room and drop any
    /// pending pairing. Idempotent.
    pub fn leave(&mut self, id: &PeerId) -> LeaveReport {
        let before = self.waiting.len();
        self.waiting.retain(|w| &w.id != id);
        LeaveReport {
            removed_waiter: self.waiting.len() < before,
            removed_pairing: self.pairings.remove(id).is_some(),
        }
    }

    /// Transport-disconnect cleanup.
    ///
    /// Always removes the queue entry. The ledger entry is only removed
    /// under `PurgeLedger`; the default keeps it so a reconnecting
    /// client can still recover its match via poll.
    pub fn handle_disconnect(&mut self, id: &PeerId, policy: DisconnectPolicy) -> DisconnectReport {
        let before = self.waiting.len();
        self.waiting.retain(|w| &w.id != id);
        let removed_pairing = match policy {
            DisconnectPolicy::PreserveLedger => false,
            DisconnectPolicy::PurgeLedger => self.pairings.remove(id).is_some(),
        };
        DisconnectReport {
            removed_waiter: self.waiting.len() < before,
            removed_pairing,
        }
    }

    /// Evict stale entries from both structures.
    ///
    /// Eviction is pure deletion; the evicted peer simply observes
    /// "not matched" on its next poll and has to rejoin.
    pub fn reclaim(
        &mut self,
        now: Timestamp,
        queue_timeout_millis: i64,
        match_timeout_millis: i64,
    ) -> SweepReport {
        let mut report = SweepReport::default();

        self.waiting.retain(|w| {
            if w.enqueued_at.age_millis(now) > queue_timeout_millis {
                report.removed_waiters.push(w.id.clone());
                false
            } else {
                true
            }
        });

        self.pairings.retain(|id, pairing| {
            if pairing.created_at.age_millis(now) > match_timeout_millis {
                report.removed_pairings.push(id.clone());
                false
            } else {
                true
            }
        });

        report
    }

    /// Current Waiting Room length
    pub fn queue_size(&self) -> usize {
        self.waiting.len()
    }

    /// Number of ledger entries (two per unconfirmed match)
    pub fn pending_pairings(&self) -> usize {
        self.pairings.len()
    }

    pub fn waiters(&self) -> impl Iterator<Item = &Waiter> {
        self.waiting.iter()
    }

    pub fn pairings(&self) -> impl Iterator<Item = (&PeerId, &Pairing)> {
        self.pairings.iter()
    }
}
