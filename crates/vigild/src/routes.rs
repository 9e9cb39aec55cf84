//! API routes for vigild

use crate::server::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};
use vigil_common::api::{
    CreateReportResponse, ErrorBody, HealthResponse, Pagination, ReportListResponse,
};
use vigil_common::ticket::NewTicket;

type AppStateArc = Arc<AppState>;

const DEFAULT_PAGE: usize = 1;
const DEFAULT_LIMIT: usize = 10;

// ============================================================================
// Report Routes
// ============================================================================

pub fn report_routes() -> Router<AppStateArc> {
    Router::new().route("/api/reports", get(list_reports).post(create_report))
}

/// Raw query parameters. Kept as strings so a missing or non-numeric
/// value falls back to its default instead of rejecting the request.
#[derive(Debug, Deserialize)]
struct ListParams {
    page: Option<String>,
    limit: Option<String>,
}

fn parse_positive(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|s| s.parse::<usize>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(default)
}

async fn list_reports(
    State(state): State<AppStateArc>,
    Query(params): Query<ListParams>,
) -> Json<ReportListResponse> {
    let page = parse_positive(params.page.as_deref(), DEFAULT_PAGE);
    let limit = parse_positive(params.limit.as_deref(), DEFAULT_LIMIT);

    let store = state.store.read().await;
    let total_results = store.count();
    let total_pages = total_results.div_ceil(limit);
    let data = store.page(page, limit);

    Json(ReportListResponse {
        data,
        pagination: Pagination {
            total_results,
            total_pages,
            current_page: page,
        },
    })
}

async fn create_report(
    State(state): State<AppStateArc>,
    Json(req): Json<NewTicket>,
) -> Result<(StatusCode, Json<CreateReportResponse>), (StatusCode, Json<ErrorBody>)> {
    let mut store = state.store.write().await;

    let ticket = store.create(&req).map_err(|e| {
        error!("  Report rejected: {}", e);
        (
            StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::BAD_REQUEST),
            Json(ErrorBody {
                message: e.to_string(),
            }),
        )
    })?;

    info!("  Report filed: {} ({})", ticket.ticket_id, ticket.issue_type);

    Ok((
        StatusCode::CREATED,
        Json(CreateReportResponse {
            message: "Report submitted successfully".to_string(),
            report: ticket,
        }),
    ))
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/api/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    let store = state.store.read().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        tickets_stored: store.count(),
    })
}
