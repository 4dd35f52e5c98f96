//! Matchmaking server binary.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use tsugai_server::domain::{ConfirmPolicy, DisconnectPolicy, MatchmakingConfig};
use tsugai_server::infrastructure::repository::InMemoryLobbyRepository;
use tsugai_server::ui::{Server, state::AppState};
use tsugai_server::usecase::{
    ConfirmMatchUseCase, GetLobbyStateUseCase, JoinQueueUseCase, LeaveQueueUseCase,
    PeerLifecycleUseCase, PollMatchUseCase, ReclaimStaleUseCase,
};
use tsugai_shared::{logger::setup_logger, time::SystemClock};

/// Matchmaking queue server for one-to-one peer sessions
#[derive(Debug, Parser)]
#[command(name = "tsugai-server", version, about)]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 9000)]
    port: u16,

    /// Seconds a Waiting Room entry may idle before the sweep evicts it
    #[arg(long, default_value_t = 120)]
    queue_timeout_secs: u64,

    /// Seconds an unconfirmed pairing may idle before the sweep evicts it
    #[arg(long, default_value_t = 300)]
    match_timeout_secs: u64,

    /// Seconds between reclaim sweeps
    #[arg(long, default_value_t = 30)]
    sweep_interval_secs: u64,

    /// Also delete a peer's pairing when the relay reports a transport
    /// disconnect (default: keep it so reconnecting clients recover
    /// their match)
    #[arg(long, default_value_t = false)]
    disconnect_purges_pairing: bool,

    /// Delete both mirrored ledger entries on a single confirm call
    /// (default: only the caller's entry)
    #[arg(long, default_value_t = false)]
    confirm_removes_partner: bool,
}

impl Args {
    fn matchmaking_config(&self) -> MatchmakingConfig {
        MatchmakingConfig {
            queue_timeout_millis: (self.queue_timeout_secs * 1000) as i64,
            match_timeout_millis: (self.match_timeout_secs * 1000) as i64,
            sweep_interval: Duration::from_secs(self.sweep_interval_secs),
            disconnect_policy: if self.disconnect_purges_pairing {
                DisconnectPolicy::PurgeLedger
            } else {
                DisconnectPolicy::PreserveLedger
            },
            confirm_policy: if self.confirm_removes_partner {
                ConfirmPolicy::BothSides
            } else {
                ConfirmPolicy::CallerOnly
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    setup_logger("tsugai-server", "info");

    let config = args.matchmaking_config();
    tracing::info!("Starting matchmaking server with {:?}", config);

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
    server.run(args.host, args.port).await
}
