//! Repository trait 定義
//!
//! ドメイン層が必要とするロビーへのアクセスインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::config::{ConfirmPolicy, DisconnectPolicy};
use super::lobby::{DisconnectReport, JoinOutcome, LeaveReport, Lobby, PollOutcome, SweepReport};
use super::peer::{DisplayName, PeerId, Timestamp};

/// Lobby Repository trait
///
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には
/// 依存しない。各メソッドは Lobby 全体に対して原子的に実行されること：
/// 同時 join が同じ待機者を二重に消費したり、非対称なペアリングを観測
/// させたりしてはならない。
///
/// すべての操作は現在状態に対する全域関数であり、致命的エラーは存在
/// しない（不在は正常な結果として返る）。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LobbyRepository: Send + Sync {
    /// 参加リクエストを処理（再接続ショートサーキット → 重複除去 →
    /// FIFO マッチまたはキュー追加）
    async fn join(&self, id: PeerId, name: DisplayName, now: Timestamp) -> JoinOutcome;

    /// 参加者の現在状態を取得（状態は変更しない）
    async fn poll(&self, id: &PeerId) -> PollOutcome;

    /// マッチを confirm し、ポリシーに従って台帳エントリを削除
    async fn confirm(&self, id: &PeerId, policy: ConfirmPolicy) -> bool;

    /// 明示的な退出（キューとペアリングの両方を削除、冪等）
    async fn leave(&self, id: &PeerId) -> LeaveReport;

    /// トランスポート切断時のクリーンアップ
    async fn handle_disconnect(&self, id: &PeerId, policy: DisconnectPolicy) -> DisconnectReport;

    /// 期限切れエントリの回収スイープ
    async fn reclaim(
        &self,
        now: Timestamp,
        queue_timeout_millis: i64,
        match_timeout_millis: i64,
    ) -> SweepReport;

    /// 現在の待機キューの長さ
    async fn queue_size(&self) -> usize;

    /// 未 confirm の台帳エントリ数
    async fn pending_pairings(&self) -> usize;

    /// デバッグ用のロビー全体のスナップショット
    async fn snapshot(&self) -> Lobby;
}
