//! HTTP API endpoint handlers.
//!
//! Validation happens here, before any use case runs: a missing or
//! blank peer id is rejected with 400 and no state is mutated.
//! Absent peers are a normal result, never an error status.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::{DisplayName, DomainError, PeerId, Timestamp},
    infrastructure::dto::{
        conversion::debug_state_dto,
        http::{
            AckResponseDto, DebugStateDto, ErrorResponseDto, HealthResponseDto, JoinRequestDto,
            JoinResponseDto, PeerRequestDto, PollResponseDto,
        },
    },
    ui::state::AppState,
};

type ValidationFailure = (StatusCode, Json<ErrorResponseDto>);

fn validation_failure(e: DomainError) -> ValidationFailure {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponseDto {
            error: e.to_string(),
        }),
    )
}

/// `POST /queue/join`: enter the Waiting Room or match with the oldest waiter
pub async fn join_queue(
    State(state): State<Arc<AppState>>,
    Json(body): Json<JoinRequestDto>,
) -> Result<Json<JoinResponseDto>, ValidationFailure> {
    let peer_id = PeerId::from_optional(body.peer_id).map_err(validation_failure)?;
    let peer_name = DisplayName::new(body.peer_name);

    let outcome = state.join_queue_usecase.execute(peer_id, peer_name).await;
    Ok(Json(outcome.into()))
}

/// `GET /queue/match/{peerId}`: poll for a match
pub async fn poll_match(
    State(state): State<Arc<AppState>>,
    Path(peer_id): Path<String>,
) -> Result<Json<PollResponseDto>, ValidationFailure> {
    let peer_id = PeerId::new(peer_id).map_err(validation_failure)?;

    let outcome = state.poll_match_usecase.execute(&peer_id).await;
    Ok(Json(outcome.into()))
}

/// `POST /queue/confirm`: acknowledge a match (cleanup per confirm policy)
pub async fn confirm_match(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PeerRequestDto>,
) -> Result<Json<AckResponseDto>, ValidationFailure> {
    let peer_id = PeerId::from_optional(body.peer_id).map_err(validation_failure)?;

    state.confirm_match_usecase.execute(&peer_id).await;
    Ok(Json(AckResponseDto { success: true }))
}

/// `POST /queue/leave`: explicit leave (idempotent)
pub async fn leave_queue(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PeerRequestDto>,
) -> Result<Json<AckResponseDto>, ValidationFailure> {
    let peer_id = PeerId::from_optional(body.peer_id).map_err(validation_failure)?;

    state.leave_queue_usecase.execute(&peer_id).await;
    Ok(Json(AckResponseDto { success: true }))
}

/// `POST /hooks/connect`: relay reports a transport connect (informational)
pub async fn relay_connected(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PeerRequestDto>,
) -> Result<Json<AckResponseDto>, ValidationFailure> {
    let peer_id = PeerId::from_optional(body.peer_id).map_err(validation_failure)?;

    state.peer_lifecycle_usecase.on_connect(&peer_id).await;
    Ok(Json(AckResponseDto { success: true }))
}

/// `POST /hooks/disconnect`: relay reports a transport disconnect
pub async fn relay_disconnected(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PeerRequestDto>,
) -> Result<Json<AckResponseDto>, ValidationFailure> {
    let peer_id = PeerId::from_optional(body.peer_id).map_err(validation_failure)?;

    state.peer_lifecycle_usecase.on_disconnect(&peer_id).await;
    Ok(Json(AckResponseDto { success: true }))
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponseDto> {
    let stats = state.get_lobby_state_usecase.stats().await;
    Json(HealthResponseDto {
        status: "ok".to_string(),
        queue_size: stats.queue_size,
        pending_pairings: stats.pending_pairings,
    })
}

/// Debug endpoint to get current lobby state (for testing purposes)
pub async fn debug_queue_state(State(state): State<Arc<AppState>>) -> Json<DebugStateDto> {
    let snapshot = state.get_lobby_state_usecase.snapshot().await;
    let now = Timestamp::new(state.clock.now_millis());
    Json(debug_state_dto(&snapshot, now))
}
