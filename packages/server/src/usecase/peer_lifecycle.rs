//! UseCase: トランスポート層のライフサイクルフック
//!
//! リレー（外部コラボレータ）がセッションの接続・切断を通知するための
//! 注入ポイント。接続は情報ログのみ。切断はキューのみを掃除し、台帳は
//! 設定された DisconnectPolicy に従う（デフォルトでは温存し、再接続した
//! クライアントが poll でマッチを回収できるようにする）。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PeerLifecycleUseCase::on_disconnect() の両ポリシー
//!
//! ### なぜこのテストが必要か
//! - 台帳温存/削除の 2 つの挙動は排他的な設計選択であり、
//!   選んだ方が設定どおり適用されることを保証する必要がある

use std::sync::Arc;

use crate::domain::{DisconnectPolicy, DisconnectReport, LobbyRepository, PeerId};

/// トランスポートライフサイクルのユースケース
pub struct PeerLifecycleUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LobbyRepository>,
    /// 切断時の台帳クリーンアップポリシー
    policy: DisconnectPolicy,
}

impl PeerLifecycleUseCase {
    /// 新しい PeerLifecycleUseCase を作成
    pub fn new(repository: Arc<dyn LobbyRepository>, policy: DisconnectPolicy) -> Self {
        Self { repository, policy }
    }

    /// 接続通知（情報ログのみ、状態変更なし）
    pub async fn on_connect(&self, id: &PeerId) {
        tracing::info!("peer connected: '{}'", id);
    }

    /// 切断通知
    pub async fn on_disconnect(&self, id: &PeerId) -> DisconnectReport {
        let report = self.repository.handle_disconnect(id, self.policy).await;
        if report.removed_waiter {
            tracing::info!(
                "removed disconnected peer '{}' from queue, queue size: {}",
                id,
                self.repository.queue_size().await
            );
        }
        if report.removed_pairing {
            tracing::info!("removed pairing of disconnected peer '{}'", id);
        }
        report
    }
}
