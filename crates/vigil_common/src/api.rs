//! Wire types for the vigild HTTP API, shared by server and CLI.

use crate::ticket::Ticket;
use serde::{Deserialize, Serialize};

/// Response to `POST /api/reports`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReportResponse {
    pub message: String,
    pub report: Ticket,
}

/// Pagination metadata for the listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub total_results: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

/// Response to `GET /api/reports`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportListResponse {
    pub data: Vec<Ticket>,
    pub pagination: Pagination,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Response to `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub tickets_stored: usize,
}
