//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::usecase::ReclaimStaleUseCase;

use super::{
    handler::http::{
        confirm_match, debug_queue_state, health_check, join_queue, leave_queue, poll_match,
        relay_connected, relay_disconnected,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Matchmaking queue server.
///
/// Owns the request surface and the background reclaim sweep. The sweep
/// task is spawned when the server starts and aborted when it shuts
/// down, so state reclamation never outlives the server.
pub struct Server {
    /// Shared handler state (Arc'd use cases + clock)
    app_state: Arc<AppState>,
    /// ReclaimStaleUseCase（回収スイープのユースケース）
    reclaim_stale_usecase: Arc<ReclaimStaleUseCase>,
    /// Interval between sweeps
    sweep_interval: std::time::Duration,
}

impl Server {
    /// Create a new Server instance
    pub fn new(
        app_state: Arc<AppState>,
        reclaim_stale_usecase: Arc<ReclaimStaleUseCase>,
        sweep_interval: std::time::Duration,
    ) -> Self {
        Self {
            app_state,
            reclaim_stale_usecase,
            sweep_interval,
        }
    }

    /// Build the axum router for the matchmaking API.
    ///
    /// Exposed separately from `run` so tests can serve the router on an
    /// ephemeral port without the sweep task or signal handling.
    pub fn router(&self) -> Router {
        Router::new()
            // マッチメイキング エンドポイント
            .route("/queue/join", post(join_queue))
            .route("/queue/match/{peer_id}", get(poll_match))
            .route("/queue/confirm", post(confirm_match))
            .route("/queue/leave", post(leave_queue))
            // リレー（外部コラボレータ）からの注入ポイント
            .route("/hooks/connect", post(relay_connected))
            .route("/hooks/disconnect", post(relay_disconnected))
            // 診断エンドポイント
            .route("/health", get(health_check))
            .route("/debug/queue", get(debug_queue_state))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(self.app_state.clone())
    }

    /// Run the matchmaking server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 9000)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified
    /// address or if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        // Spawn the reclaim sweep with its own cancellation handle
        let sweeper = tokio::spawn({
            let usecase = self.reclaim_stale_usecase.clone();
            let sweep_interval = self.sweep_interval;
            async move {
                let mut ticker = tokio::time::interval(sweep_interval);
                // The first tick fires immediately; skip it so the
                // sweep cadence starts one interval after boot.
                ticker.tick().await;
                loop {
                    ticker.tick().await;
                    usecase.execute().await;
                }
            }
        });

        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!(
            "Matchmaking server listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Join: POST http://{}/queue/join", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        // Explicit shutdown of the sweep timer
        sweeper.abort();
        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
