//! HTTP API request/response DTOs.
//!
//! The wire format is camelCase JSON, matching what polling clients
//! expect: `{matched, partnerId, partnerName}` on a match, `{matched,
//! position}` while queued, `{matched, inQueue}` from a poll miss.

use serde::{Deserialize, Serialize};

/// Body of `POST /queue/join`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequestDto {
    pub peer_id: Option<String>,
    pub peer_name: Option<String>,
}

/// Body of confirm/leave/hook requests (peer id only)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerRequestDto {
    pub peer_id: Option<String>,
}

/// Response to `POST /queue/join`
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum JoinResponseDto {
    #[serde(rename_all = "camelCase")]
    Matched {
        matched: bool,
        partner_id: String,
        partner_name: String,
    },
    #[serde(rename_all = "camelCase")]
    Queued { matched: bool, position: usize },
}

/// Response to `GET /queue/match/{peerId}`
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PollResponseDto {
    #[serde(rename_all = "camelCase")]
    Matched {
        matched: bool,
        partner_id: String,
        partner_name: String,
    },
    #[serde(rename_all = "camelCase")]
    NotMatched { matched: bool, in_queue: bool },
}

/// Acknowledgement for confirm/leave/hook requests
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AckResponseDto {
    pub success: bool,
}

/// Response to `GET /health`
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponseDto {
    pub status: String,
    pub queue_size: usize,
    pub pending_pairings: usize,
}

/// Validation failure body
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorResponseDto {
    pub error: String,
}

/// One Waiting Room entry in the debug dump
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DebugWaiterDto {
    pub peer_id: String,
    pub peer_name: String,
    pub waiting_millis: i64,
}

/// One Match Ledger entry in the debug dump
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DebugPairingDto {
    pub peer_id: String,
    pub partner_id: String,
    pub partner_name: String,
    pub created_at: String,
    pub age_millis: i64,
}

/// Response to `GET /debug/queue` (diagnostic only, no invariant)
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DebugStateDto {
    pub queue: Vec<DebugWaiterDto>,
    pub pairings: Vec<DebugPairingDto>,
}
