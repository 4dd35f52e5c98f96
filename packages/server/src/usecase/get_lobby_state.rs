//! UseCase: ロビー状態の取得（ヘルスチェック・デバッグ用）
//!
//! 診断専用であり、不変条件は持たない。

use std::sync::Arc;

use crate::domain::{Lobby, LobbyRepository};

/// ヘルスチェック用の統計値
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LobbyStats {
    pub queue_size: usize,
    pub pending_pairings: usize,
}

/// ロビー状態取得のユースケース
pub struct GetLobbyStateUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LobbyRepository>,
}

impl GetLobbyStateUseCase {
    /// 新しい GetLobbyStateUseCase を作成
    pub fn new(repository: Arc<dyn LobbyRepository>) -> Self {
        Self { repository }
    }

    /// キュー長と保留ペアリング数を取得
    pub async fn stats(&self) -> LobbyStats {
        LobbyStats {
            queue_size: self.repository.queue_size().await,
            pending_pairings: self.repository.pending_pairings().await,
        }
    }

    /// ロビー全体のスナップショットを取得（デバッグ用）
    pub async fn snapshot(&self) -> Lobby {
        self.repository.snapshot().await
    }
}
