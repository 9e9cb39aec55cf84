//! HTTP transport to the conversational backend.

use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use vigil_common::config::ChatConfig;
use vigil_common::VigilError;

pub struct ChatClient {
    config: ChatConfig,
    client: reqwest::Client,
}

impl ChatClient {
    pub fn new(config: ChatConfig) -> Result<Self, VigilError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| VigilError::Upstream(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Send one request payload and return the raw JSON envelope.
    ///
    /// Nothing here assumes a particular response shape; the caller
    /// resolves display text from whatever comes back. Each send is a
    /// single best-effort attempt.
    pub async fn send(&self, payload: &Value) -> Result<Value, VigilError> {
        let mut request = self.client.post(&self.config.endpoint).json(payload);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| VigilError::Upstream(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(VigilError::Upstream(format!(
                "chat endpoint returned {}",
                response.status()
            )));
        }

        let envelope = response
            .json::<Value>()
            .await
            .map_err(|e| VigilError::MalformedPayload(format!("response body is not JSON: {}", e)))?;

        debug!("chat envelope: {}", envelope);
        Ok(envelope)
    }
}
