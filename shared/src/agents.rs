//! Client for submitting messages to the Azure AI Foundry agent endpoint.
//!
//! No network call is made yet: every submission waits the configured delay
//! and resolves with [`AgentResponse::placeholder`]. Faults raised while the
//! call is being set up are folded into an error response instead of being
//! returned to the caller.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::config::{ClientConfig, EndpointConfig};
use crate::models::{AgentRequest, AgentResponse};
use crate::timer::{Timer, TokioTimer};
use crate::{Error, Result};

/// Client for the agent endpoint.
#[derive(Clone)]
pub struct AgentClient {
    endpoint: EndpointConfig,
    response_delay: Duration,
    timer: Arc<dyn Timer>,
}

impl std::fmt::Debug for AgentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentClient")
            .field("endpoint", &self.endpoint)
            .field("response_delay", &self.response_delay)
            .finish_non_exhaustive()
    }
}

impl AgentClient {
    /// Create a new agent client using the tokio clock.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_timer(config, Arc::new(TokioTimer))
    }

    /// Create with a specific timer.
    pub fn with_timer(config: ClientConfig, timer: Arc<dyn Timer>) -> Self {
        Self {
            endpoint: config.endpoint,
            response_delay: config.response_delay,
            timer,
        }
    }

    /// Submit a message and resolve with exactly one response.
    ///
    /// The message is not re-validated here; callers gate empty input.
    pub async fn submit(&self, request: AgentRequest) -> AgentResponse {
        match self.try_submit(request).await {
            Ok(response) => response,
            Err(e) => {
                error!("Agent submission failed: {}", e);
                AgentResponse::error(e.to_string())
            }
        }
    }

    /// Submit a raw JSON request body.
    ///
    /// A body that does not parse as an [`AgentRequest`] resolves immediately
    /// with an error response.
    pub async fn submit_raw(&self, body: &[u8]) -> AgentResponse {
        match serde_json::from_slice::<AgentRequest>(body) {
            Ok(request) => self.submit(request).await,
            Err(e) => {
                let err = Error::Submission(format!("Invalid request body: {}", e));
                error!("Agent submission failed: {}", err);
                AgentResponse::error(err.to_string())
            }
        }
    }

    /// Submit a message, surfacing setup faults as errors.
    pub async fn try_submit(&self, request: AgentRequest) -> Result<AgentResponse> {
        let payload = serde_json::to_vec(&request)
            .map_err(|e| Error::Submission(format!("Failed to encode request: {}", e)))?;

        match self.endpoint.as_deref() {
            Some(endpoint) => info!(
                endpoint,
                payload_bytes = payload.len(),
                "Submitting message to agent"
            ),
            None => warn!(
                payload_bytes = payload.len(),
                "Foundry endpoint not configured, returning placeholder response"
            ),
        }

        self.timer.sleep(self.response_delay).await;

        Ok(AgentResponse::placeholder())
    }
}
