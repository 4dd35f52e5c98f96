//! InMemory Lobby Repository 実装
//!
//! ドメイン層が定義する LobbyRepository trait の具体的な実装。
//! Lobby 集約全体を単一の `tokio::sync::Mutex` で保護します。
//!
//! 待機キューと台帳の両方に触れる操作（join のマッチパスなど）が
//! 1 回のロック取得の中で完結するため、マッチメイキングに必要な原子性は
//! この構造から自然に得られます。クリティカルセクション内に
//! サスペンションポイントはありません。

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ConfirmPolicy, DisconnectPolicy, DisconnectReport, DisplayName, JoinOutcome, LeaveReport,
    Lobby, LobbyRepository, PeerId, PollOutcome, SweepReport, Timestamp,
};

/// インメモリ Lobby Repository 実装
///
/// プロセス全体で唯一の所有者としてロビー状態を保持する。永続化なし、
/// プロセス終了とともに破棄される。
pub struct InMemoryLobbyRepository {
    /// Lobby ドメインモデル（単一ロックで全体を保護）
    lobby: Mutex<Lobby>,
}

impl InMemoryLobbyRepository {
    /// 空のロビーで新しい InMemoryLobbyRepository を作成
    pub fn new() -> Self {
        Self {
            lobby: Mutex::new(Lobby::new()),
        }
    }
}

impl Default for InMemoryLobbyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LobbyRepository for InMemoryLobbyRepository {
    async fn join(&self, id: PeerId, name: DisplayName, now: Timestamp) -> JoinOutcome {
        let mut lobby = self.lobby.lock().await;
        lobby.join(id, name, now)
    }

    async fn poll(&self, id: &PeerId) -> PollOutcome {
        let lobby = self.lobby.lock().await;
        lobby.poll(id)
    }

    async fn confirm(&self, id: &PeerId, policy: ConfirmPolicy) -> bool {
        let mut lobby = self.lobby.lock().await;
        lobby.confirm(id, policy)
    }

    async fn leave(&self, id: &PeerId) -> LeaveReport {
        let mut lobby = self.lobby.lock().await;
        lobby.leave(id)
    }

    async fn handle_disconnect(&self, id: &PeerId, policy: DisconnectPolicy) -> DisconnectReport {
        let mut lobby = self.lobby.lock().await;
        lobby.handle_disconnect(id, policy)
    }

    async fn reclaim(
        &self,
        now: Timestamp,
        queue_timeout_millis: i64,
        match_timeout_millis: i64,
    ) -> SweepReport {
        let mut lobby = self.lobby.lock().await;
        lobby.reclaim(now, queue_timeout_millis, match_timeout_millis)
    }

    async fn queue_size(&self) -> usize {
        let lobby = self.lobby.lock().await;
        lobby.queue_size()
    }

    async fn pending_pairings(&self) -> usize {
        let lobby = self.lobby.lock().await;
        lobby.pending_pairings()
    }

    async fn snapshot(&self) -> Lobby {
        let lobby = self.lobby.lock().await;
        lobby.clone()
    }
}
