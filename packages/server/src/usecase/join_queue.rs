//! UseCase: 参加リクエスト処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinQueueUseCase::execute() メソッド
//! - 参加処理（再接続ショートサーキット、FIFO マッチ、キュー追加）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：exactly-once ペアリングを保証
//! - 再 join が重複マッチを作らないことを保証
//! - マッチ時刻が注入された Clock から取られることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：キューが空の場合の追加、待機者がいる場合のマッチ
//! - 再接続：ペアリング済みの id での再 join
//! - エッジケース：同じ id の重複 join

use std::sync::Arc;

use tsugai_shared::time::Clock;

use crate::domain::{DisplayName, JoinOutcome, LobbyRepository, PeerId, Timestamp};

/// 参加リクエストのユースケース
pub struct JoinQueueUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LobbyRepository>,
    /// Clock（現在時刻の抽象化、テストで差し替え可能）
    clock: Arc<dyn Clock>,
}

impl JoinQueueUseCase {
    /// 新しい JoinQueueUseCase を作成
    pub fn new(repository: Arc<dyn LobbyRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// 参加リクエストを実行
    ///
    /// # Arguments
    ///
    /// * `id` - 参加する peer の ID（検証済みの Domain Model）
    /// * `name` - 相手に表示される名前
    ///
    /// # Returns
    ///
    /// マッチ結果（既存マッチ / 新規マッチ / キュー追加）。
    /// ブロックせず、現在状態のスナップショットを即座に返す。
    pub async fn execute(&self, id: PeerId, name: DisplayName) -> JoinOutcome {
        let now = Timestamp::new(self.clock.now_millis());
        let outcome = self.repository.join(id.clone(), name.clone(), now).await;

        match &outcome {
            JoinOutcome::AlreadyPaired(pairing) => {
                tracing::info!(
                    "'{}' already matched with '{}', returning existing match",
                    name,
                    pairing.partner_id
                );
            }
            JoinOutcome::Matched { partner_name, .. } => {
                tracing::info!("match made: '{}' <-> '{}'", name, partner_name);
            }
            JoinOutcome::Enqueued { position } => {
                tracing::info!("'{}' joined queue, queue size: {}", id, position);
            }
        }

        outcome
    }
}
