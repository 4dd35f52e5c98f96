//! UseCase: 期限切れエントリの回収スイープ
//!
//! サーバーランナーが所有するバックグラウンドタスクから一定間隔で
//! 呼ばれる、唯一の自律的（タイマー駆動）な操作。リクエスト駆動の操作と
//! 同じロックを取るため、競合状態は発生しない。Clock を注入するため、
//! テストは実時間のスリープなしで決定的にスイープを駆動できる。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ReclaimStaleUseCase::execute() メソッド
//! - queue-timeout / match-timeout の 2 つの独立した閾値
//!
//! ### なぜこのテストが必要か
//! - 放置された状態の回収は leave を呼ばないクライアントに対する
//!   唯一の防衛線であり、期限切れエントリの回収はこのサーバーの中核
//!   的な性質のひとつである
//!
//! ### どのような状況を想定しているか
//! - 正常系：期限切れエントリのみ消え、新しいエントリは残る
//! - エッジケース：消すものが何もないスイープ

use std::sync::Arc;

use tsugai_shared::time::Clock;

use crate::domain::{LobbyRepository, MatchmakingConfig, SweepReport, Timestamp};

/// 回収スイープのユースケース
pub struct ReclaimStaleUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LobbyRepository>,
    /// Clock（現在時刻の抽象化、テストで差し替え可能）
    clock: Arc<dyn Clock>,
    /// タイムアウト設定
    config: MatchmakingConfig,
}

impl ReclaimStaleUseCase {
    /// 新しい ReclaimStaleUseCase を作成
    pub fn new(
        repository: Arc<dyn LobbyRepository>,
        clock: Arc<dyn Clock>,
        config: MatchmakingConfig,
    ) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    /// スイープを 1 回実行
    ///
    /// 回収は純粋な削除であり、回収された参加者への通知は行わない。
    /// エラーを外部に報告することもなく、削除のみをログに記録する。
    pub async fn execute(&self) -> SweepReport {
        let now = Timestamp::new(self.clock.now_millis());
        let report = self
            .repository
            .reclaim(
                now,
                self.config.queue_timeout_millis,
                self.config.match_timeout_millis,
            )
            .await;

        for id in &report.removed_waiters {
            tracing::info!("sweep removed stale queue entry: '{}'", id);
        }
        for id in &report.removed_pairings {
            tracing::info!("sweep removed stale pairing: '{}'", id);
        }
        if !report.is_empty() {
            tracing::info!(
                "sweep removed {} queue entries, {} pairings",
                report.removed_waiters.len(),
                report.removed_pairings.len()
            );
        }

        report
    }
}
