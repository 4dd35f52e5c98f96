//! Shared application state passed to every handler.

use std::sync::Arc;

use tsugai_shared::time::Clock;

use crate::usecase::{
    ConfirmMatchUseCase, GetLobbyStateUseCase, JoinQueueUseCase, LeaveQueueUseCase,
    PeerLifecycleUseCase, PollMatchUseCase,
};

/// Shared application state
pub struct AppState {
    /// JoinQueueUseCase（参加リクエストのユースケース）
    pub join_queue_usecase: Arc<JoinQueueUseCase>,
    /// PollMatchUseCase（マッチ状態ポーリングのユースケース）
    pub poll_match_usecase: Arc<PollMatchUseCase>,
    /// ConfirmMatchUseCase（マッチ confirm のユースケース）
    pub confirm_match_usecase: Arc<ConfirmMatchUseCase>,
    /// LeaveQueueUseCase（退出のユースケース）
    pub leave_queue_usecase: Arc<LeaveQueueUseCase>,
    /// PeerLifecycleUseCase（トランスポートフックのユースケース）
    pub peer_lifecycle_usecase: Arc<PeerLifecycleUseCase>,
    /// GetLobbyStateUseCase（ヘルス・デバッグ取得のユースケース）
    pub get_lobby_state_usecase: Arc<GetLobbyStateUseCase>,
    /// Clock（デバッグダンプの経過時間計算に使用）
    pub clock: Arc<dyn Clock>,
}
