//! HTTP client for the vigild report API.

use anyhow::{anyhow, Result};
use std::time::Duration;
use vigil_common::api::{CreateReportResponse, ErrorBody, HealthResponse, ReportListResponse};
use vigil_common::config::ReportApiConfig;
use vigil_common::ticket::NewTicket;

pub struct ReportClient {
    base_url: String,
    client: reqwest::Client,
}

impl ReportClient {
    pub fn new(config: ReportApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Fetch one page of reports
    pub async fn list(&self, page: usize, limit: usize) -> Result<ReportListResponse> {
        let url = format!("{}/api/reports", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;

        if !response.status().is_success() {
            return Err(anyhow!("report API returned {}", response.status()));
        }

        Ok(response.json().await?)
    }

    /// Submit a new report. Surfaces the server's validation message on
    /// a 400.
    pub async fn submit(&self, report: &NewTicket) -> Result<CreateReportResponse> {
        let url = format!("{}/api/reports", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(report)
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;

        if response.status() == reqwest::StatusCode::BAD_REQUEST {
            let body: ErrorBody = response.json().await.unwrap_or_else(|_| ErrorBody {
                message: "invalid report".to_string(),
            });
            return Err(anyhow!("{}", body.message));
        }
        if !response.status().is_success() {
            return Err(anyhow!("report API returned {}", response.status()));
        }

        Ok(response.json().await?)
    }

    /// Fetch daemon health
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}/api/health", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;

        if !response.status().is_success() {
            return Err(anyhow!("report API returned {}", response.status()));
        }

        Ok(response.json().await?)
    }

    fn unreachable(&self, e: reqwest::Error) -> anyhow::Error {
        anyhow!(
            "Cannot reach vigild at {}: {}\n\
             Is the daemon running? Start it with `vigild` or point\n\
             VIGIL_REPORT_URL at a running instance.",
            self.base_url,
            e
        )
    }
}
