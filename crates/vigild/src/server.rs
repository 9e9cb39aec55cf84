//! HTTP server for vigild

use crate::routes;
use crate::store::TicketStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub store: Arc<RwLock<TicketStore>>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: TicketStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            start_time: Instant::now(),
        }
    }
}

/// Build the full router. Separate from [`run`] so tests can drive it
/// without binding a socket.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::report_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // The report API serves a browser frontend in the original deployment
        .layer(CorsLayer::permissive())
}

/// Run the HTTP server
pub async fn run(state: AppState) -> Result<()> {
    let state = Arc::new(state);
    let app = app(state);

    let addr = vigil_common::config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
