//! Integration tests for the matchmaking HTTP API.
//!
//! Each test serves the real router in-process on an ephemeral port and
//! drives it with an HTTP client, so the full stack (routing, DTO
//! serialization, validation, use cases, repository) is exercised
//! without spawning external processes.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};

use tsugai_server::domain::MatchmakingConfig;
use tsugai_server::infrastructure::repository::InMemoryLobbyRepository;
use tsugai_server::ui::{Server, state::AppState};
use tsugai_server::usecase::{
    ConfirmMatchUseCase, GetLobbyStateUseCase, JoinQueueUseCase, LeaveQueueUseCase,
    PeerLifecycleUseCase, PollMatchUseCase, ReclaimStaleUseCase,
};
use tsugai_shared::time::SystemClock;

/// Serve the matchmaking router on an ephemeral port
async fn spawn_test_server(config: MatchmakingConfig) -> SocketAddr {
    let repository = Arc::new(InMemoryLobbyRepository::new());
    let clock = Arc::new(SystemClock);

    let app_state = Arc::new(AppState {
        join_queue_usecase: Arc::new(JoinQueueUseCase::new(repository.clone(), clock.clone())),
        poll_match_usecase: Arc::new(PollMatchUseCase::new(repository.clone())),
        confirm_match_usecase: Arc::new(ConfirmMatchUseCase::new(
            repository.clone(),
            config.confirm_policy,
        )),
        leave_queue_usecase: Arc::new(LeaveQueueUseCase::new(repository.clone())),
        peer_lifecycle_usecase: Arc::new(PeerLifecycleUseCase::new(
            repository.clone(),
            config.disconnect_policy,
        )),
        get_lobby_state_usecase: Arc::new(GetLobbyStateUseCase::new(repository.clone())),
        clock: clock.clone(),
    });
    let reclaim_stale_usecase = Arc::new(ReclaimStaleUseCase::new(repository, clock, config));
    let server = Server::new(app_state, reclaim_stale_usecase, config.sweep_interval);
    let app = server.router();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });
    addr
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build HTTP client")
}

async fn join(client: &reqwest::Client, addr: SocketAddr, id: &str, name: &str) -> Value {
    client
        .post(format!("http://{addr}/queue/join"))
        .json(&json!({"peerId": id, "peerName": name}))
        .send()
        .await
        .expect("join request failed")
        .json()
        .await
        .expect("join response was not JSON")
}

async fn poll(client: &reqwest::Client, addr: SocketAddr, id: &str) -> Value {
    client
        .get(format!("http://{addr}/queue/match/{id}"))
        .send()
        .await
        .expect("poll request failed")
        .json()
        .await
        .expect("poll response was not JSON")
}

#[tokio::test]
async fn test_join_poll_confirm_scenario() {
    // テスト項目: join → poll → confirm のライフサイクルが HTTP API 越しに成立する
    // given (前提条件):
    let addr = spawn_test_server(MatchmakingConfig::default()).await;
    let client = client();

    // when / then (操作と期待する結果を順に検証):
    // Join("a1", "Alice") → 未マッチ、位置 1
    let first = join(&client, addr, "a1", "Alice").await;
    assert_eq!(first, json!({"matched": false, "position": 1}));

    // Join("b1", "Bob") → a1 とマッチ
    let second = join(&client, addr, "b1", "Bob").await;
    assert_eq!(
        second,
        json!({"matched": true, "partnerId": "a1", "partnerName": "Alice"})
    );

    // Poll("a1") → b1 とのマッチが見える
    let polled = poll(&client, addr, "a1").await;
    assert_eq!(
        polled,
        json!({"matched": true, "partnerId": "b1", "partnerName": "Bob"})
    );

    // Confirm("a1")
    let confirm: Value = client
        .post(format!("http://{addr}/queue/confirm"))
        .json(&json!({"peerId": "a1"}))
        .send()
        .await
        .expect("confirm request failed")
        .json()
        .await
        .expect("confirm response was not JSON");
    assert_eq!(confirm, json!({"success": true}));

    // Poll("a1") → もうマッチしておらず、キューにもいない
    assert_eq!(
        poll(&client, addr, "a1").await,
        json!({"matched": false, "inQueue": false})
    );
    // Poll("b1") → b1 側は古いマッチが見え続ける（片側 confirm）
    assert_eq!(
        poll(&client, addr, "b1").await,
        json!({"matched": true, "partnerId": "a1", "partnerName": "Alice"})
    );
}

#[tokio::test]
async fn test_join_without_peer_id_is_rejected_without_mutation() {
    // テスト項目: peerId なしの join は 400 で拒否され、状態は変わらない
    // given (前提条件):
    let addr = spawn_test_server(MatchmakingConfig::default()).await;
    let client = client();

    // when (操作):
    let response = client
        .post(format!("http://{addr}/queue/join"))
        .json(&json!({"peerName": "Nameless"}))
        .send()
        .await
        .expect("join request failed");

    // then (期待する結果):
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("error body was not JSON");
    assert!(body["error"].is_string());

    // ヘルスチェックで状態が無傷であることを確認
    let health: Value = client
        .get(format!("http://{addr}/health"))
        .send()
        .await
        .expect("health request failed")
        .json()
        .await
        .expect("health response was not JSON");
    assert_eq!(health["status"], "ok");
    assert_eq!(health["queueSize"], 0);
    assert_eq!(health["pendingPairings"], 0);
}

#[tokio::test]
async fn test_display_name_defaults_to_anonymous() {
    // テスト項目: peerName 省略時は相手に "Anonymous" が表示される
    // given (前提条件):
    let addr = spawn_test_server(MatchmakingConfig::default()).await;
    let client = client();

    // when (操作): 名前なしで a1 が join し、b1 とマッチする
    client
        .post(format!("http://{addr}/queue/join"))
        .json(&json!({"peerId": "a1"}))
        .send()
        .await
        .expect("join request failed");
    let matched = join(&client, addr, "b1", "Bob").await;

    // then (期待する結果):
    assert_eq!(
        matched,
        json!({"matched": true, "partnerId": "a1", "partnerName": "Anonymous"})
    );
}

#[tokio::test]
async fn test_leave_is_idempotent_over_http() {
    // テスト項目: 同じ id で leave を 2 回呼んでも同じ応答と状態になる
    // given (前提条件):
    let addr = spawn_test_server(MatchmakingConfig::default()).await;
    let client = client();
    join(&client, addr, "a1", "Alice").await;

    // when (操作):
    for _ in 0..2 {
        let ack: Value = client
            .post(format!("http://{addr}/queue/leave"))
            .json(&json!({"peerId": "a1"}))
            .send()
            .await
            .expect("leave request failed")
            .json()
            .await
            .expect("leave response was not JSON");
        // then (期待する結果): どちらの呼び出しも成功応答
        assert_eq!(ack, json!({"success": true}));
    }

    let health: Value = client
        .get(format!("http://{addr}/health"))
        .send()
        .await
        .expect("health request failed")
        .json()
        .await
        .expect("health response was not JSON");
    assert_eq!(health["queueSize"], 0);
}

#[tokio::test]
async fn test_disconnect_hook_preserves_pairing_for_reconnect() {
    // テスト項目: 切断フックはキューのみ掃除し、マッチは poll で回収できる
    // given (前提条件):
    let addr = spawn_test_server(MatchmakingConfig::default()).await;
    let client = client();
    join(&client, addr, "a1", "Alice").await;
    join(&client, addr, "b1", "Bob").await;
    join(&client, addr, "c1", "Carol").await;

    // when (操作): ペアリング済みの a1 と待機中の c1 の切断が通知される
    for id in ["a1", "c1"] {
        let ack: Value = client
            .post(format!("http://{addr}/hooks/disconnect"))
            .json(&json!({"peerId": id}))
            .send()
            .await
            .expect("disconnect hook request failed")
            .json()
            .await
            .expect("disconnect hook response was not JSON");
        assert_eq!(ack, json!({"success": true}));
    }

    // then (期待する結果): a1 は再接続後もマッチを取得できる
    assert_eq!(
        poll(&client, addr, "a1").await,
        json!({"matched": true, "partnerId": "b1", "partnerName": "Bob"})
    );
    // c1 はキューから消えている
    assert_eq!(
        poll(&client, addr, "c1").await,
        json!({"matched": false, "inQueue": false})
    );
}

#[tokio::test]
async fn test_debug_dump_exposes_queue_and_pairings() {
    // テスト項目: デバッグダンプにキューと台帳の内容が含まれる
    // given (前提条件):
    let addr = spawn_test_server(MatchmakingConfig::default()).await;
    let client = client();
    join(&client, addr, "a1", "Alice").await;
    join(&client, addr, "b1", "Bob").await;
    join(&client, addr, "c1", "Carol").await;

    // when (操作):
    let dump: Value = client
        .get(format!("http://{addr}/debug/queue"))
        .send()
        .await
        .expect("debug request failed")
        .json()
        .await
        .expect("debug response was not JSON");

    // then (期待する結果): 待機 1 人、鏡像 2 エントリ
    assert_eq!(dump["queue"].as_array().unwrap().len(), 1);
    assert_eq!(dump["queue"][0]["peerId"], "c1");
    assert_eq!(dump["pairings"].as_array().unwrap().len(), 2);
}
