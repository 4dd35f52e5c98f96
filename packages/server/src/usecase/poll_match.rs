//! UseCase: マッチ状態のポーリング
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PollMatchUseCase::execute() メソッド
//! - 参加者の現在状態の取得（マッチ済み / 待機中 / 不在）
//!
//! ### なぜこのテストが必要か
//! - クライアントはマッチ完了をポーリングで検知する設計のため、
//!   poll が状態を変更しないこと（読み取り専用）を保証する必要がある
//! - 不在はエラーではなく正常な結果として返ることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：マッチ済み、待機中
//! - エッジケース：どちらにも存在しない id

use std::sync::Arc;

use crate::domain::{LobbyRepository, PeerId, PollOutcome};

/// マッチ状態ポーリングのユースケース
pub struct PollMatchUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LobbyRepository>,
}

impl PollMatchUseCase {
    /// 新しい PollMatchUseCase を作成
    pub fn new(repository: Arc<dyn LobbyRepository>) -> Self {
        Self { repository }
    }

    /// 参加者の現在状態を取得（状態は変更しない）
    pub async fn execute(&self, id: &PeerId) -> PollOutcome {
        self.repository.poll(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DisplayName, Timestamp};
    use crate::infrastructure::repository::InMemoryLobbyRepository;

    fn peer(id: &str) -> PeerId {
        PeerId::new(id).unwrap()
    }

    fn name(n: &str) -> DisplayName {
        DisplayName::new(Some(n.to_string()))
    }

    #[tokio::test]
    async fn test_poll_reports_waiting_then_matched() {
        // テスト項目: 待機中は Waiting、マッチ後は Matched が返る
        // given (前提条件):
        let repository = Arc::new(InMemoryLobbyRepository::new());
        let usecase = PollMatchUseCase::new(repository.clone());
        repository
            .join(peer("a1"), name("Alice"), Timestamp::new(1000))
            .await;

        // when (操作):
        let while_waiting = usecase.execute(&peer("a1")).await;
        repository
            .join(peer("b1"), name("Bob"), Timestamp::new(2000))
            .await;
        let after_match = usecase.execute(&peer("a1")).await;

        // then (期待する結果):
        assert_eq!(while_waiting, PollOutcome::Waiting);
        let PollOutcome::Matched(pairing) = after_match else {
            panic!("a1 should be matched");
        };
        assert_eq!(pairing.partner_id, peer("b1"));
    }

    #[tokio::test]
    async fn test_poll_unknown_peer_is_absent_not_error() {
        // テスト項目: 未知の id の poll は不在という正常な結果を返す
        // given (前提条件):
        let repository = Arc::new(InMemoryLobbyRepository::new());
        let usecase = PollMatchUseCase::new(repository);

        // when (操作):
        let outcome = usecase.execute(&peer("ghost")).await;

        // then (期待する結果):
        assert_eq!(outcome, PollOutcome::Absent);
    }
}
