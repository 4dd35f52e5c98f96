//! UseCase: 明示的な退出処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - LeaveQueueUseCase::execute() メソッド
//! - キューエントリと保留中ペアリングの削除
//!
//! ### なぜこのテストが必要か
//! - leave は唯一のキャンセルプリミティブであり、繰り返し呼ばれても
//!   安全であること（冪等性）を保証する必要がある
//!
//! ### どのような状況を想定しているか
//! - 正常系：待機中の退出、ペアリング済みの退出
//! - 冪等性：同じ id で 2 回 leave

use std::sync::Arc;

use crate::domain::{LeaveReport, LobbyRepository, PeerId};

/// 退出のユースケース
pub struct LeaveQueueUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LobbyRepository>,
}

impl LeaveQueueUseCase {
    /// 新しい LeaveQueueUseCase を作成
    pub fn new(repository: Arc<dyn LobbyRepository>) -> Self {
        Self { repository }
    }

    /// 退出を実行（冪等）
    pub async fn execute(&self, id: &PeerId) -> LeaveReport {
        let report = self.repository.leave(id).await;
        if report.removed_waiter {
            tracing::info!(
                "'{}' left queue, queue size: {}",
                id,
                self.repository.queue_size().await
            );
        }
        if report.removed_pairing {
            tracing::info!("'{}' left, pending pairing removed", id);
        }
        report
    }
}
