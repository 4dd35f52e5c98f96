//! UseCase: マッチの confirm 処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConfirmMatchUseCase::execute() メソッド
//! - 設定された ConfirmPolicy に従った台帳エントリの削除
//!
//! ### なぜこのテストが必要か
//! - CallerOnly（観測されたソース挙動）と BothSides（再設計版）の
//!   両ポリシーを明示的にテストし、選んだ設定がそのまま適用されることを保証する
//! - 未知の id の confirm がエラーにならないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：ペアリング済みの id の confirm
//! - エッジケース：不在の id の confirm（no-op）

use std::sync::Arc;

use crate::domain::{ConfirmPolicy, LobbyRepository, PeerId};

/// マッチ confirm のユースケース
pub struct ConfirmMatchUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LobbyRepository>,
    /// confirm 時の台帳クリーンアップポリシー
    policy: ConfirmPolicy,
}

impl ConfirmMatchUseCase {
    /// 新しい ConfirmMatchUseCase を作成
    pub fn new(repository: Arc<dyn LobbyRepository>, policy: ConfirmPolicy) -> Self {
        Self { repository, policy }
    }

    /// confirm を実行
    ///
    /// # Returns
    ///
    /// 呼び出し側の台帳エントリが存在したかどうか。不在はエラーでは
    /// なく false として返る。
    pub async fn execute(&self, id: &PeerId) -> bool {
        let removed = self.repository.confirm(id, self.policy).await;
        if removed {
            tracing::info!("'{}' confirmed match (policy: {:?})", id, self.policy);
        } else {
            tracing::debug!("confirm for unknown peer '{}', nothing to remove", id);
        }
        removed
    }
}
