//! Domain Model → DTO conversions.

use tsugai_shared::time::millis_to_rfc3339;

use crate::domain::{JoinOutcome, Lobby, PollOutcome, Timestamp};

use super::http::{
    DebugPairingDto, DebugStateDto, DebugWaiterDto, JoinResponseDto, PollResponseDto,
};

impl From<JoinOutcome> for JoinResponseDto {
    fn from(outcome: JoinOutcome) -> Self {
        match outcome {
            JoinOutcome::AlreadyPaired(pairing) => JoinResponseDto::Matched {
                matched: true,
                partner_id: pairing.partner_id.as_str().to_string(),
                partner_name: pairing.partner_name.as_str().to_string(),
            },
            JoinOutcome::Matched {
                partner_id,
                partner_name,
            } => JoinResponseDto::Matched {
                matched: true,
                partner_id: partner_id.as_str().to_string(),
                partner_name: partner_name.as_str().to_string(),
            },
            JoinOutcome::Enqueued { position } => JoinResponseDto::Queued {
                matched: false,
                position,
            },
        }
    }
}

impl From<PollOutcome> for PollResponseDto {
    fn from(outcome: PollOutcome) -> Self {
        match outcome {
            PollOutcome::Matched(pairing) => PollResponseDto::Matched {
                matched: true,
                partner_id: pairing.partner_id.as_str().to_string(),
                partner_name: pairing.partner_name.as_str().to_string(),
            },
            PollOutcome::Waiting => PollResponseDto::NotMatched {
                matched: false,
                in_queue: true,
            },
            PollOutcome::Absent => PollResponseDto::NotMatched {
                matched: false,
                in_queue: false,
            },
        }
    }
}

/// Build the debug dump from a lobby snapshot, with ages relative to `now`
pub fn debug_state_dto(snapshot: &Lobby, now: Timestamp) -> DebugStateDto {
    DebugStateDto {
        queue: snapshot
            .waiters()
            .map(|w| DebugWaiterDto {
                peer_id: w.id.as_str().to_string(),
                peer_name: w.display_name.as_str().to_string(),
                waiting_millis: w.enqueued_at.age_millis(now),
            })
            .collect(),
        pairings: snapshot
            .pairings()
            .map(|(id, p)| DebugPairingDto {
                peer_id: id.as_str().to_string(),
                partner_id: p.partner_id.as_str().to_string(),
                partner_name: p.partner_name.as_str().to_string(),
                created_at: millis_to_rfc3339(p.created_at.value()),
                age_millis: p.created_at.age_millis(now),
            })
            .collect(),
    }
}
