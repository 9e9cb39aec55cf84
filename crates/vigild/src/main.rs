//! Vigil Daemon - report desk HTTP API.
//!
//! Serves the in-memory ticket store over `/api/reports`.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vigild::server::{self, AppState};
use vigild::store::TicketStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vigild=info,tower_http=info")),
        )
        .init();

    info!("vigild v{} starting", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(TicketStore::new());
    server::run(state).await
}
