//! Shared data models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Message returned by the scaffold agent response.
pub const PLACEHOLDER_MESSAGE: &str =
    "This is a placeholder response. Integrate with Azure AI Foundry Agent.";

/// Note returned by the scaffold agent response.
pub const PLACEHOLDER_NOTE: &str = "Configure REACT_APP_FOUNDRY_ENDPOINT in environment variables";

/// Name reported by the gateway health probe.
pub const SERVICE_NAME: &str = "mcp-gateway";

/// Request to the agent endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AgentRequest {
    /// User's message
    #[validate(length(min = 1, message = "Message cannot be empty"))]
    pub message: String,
}

impl AgentRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Outcome of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Structured result of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentResponse {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl AgentResponse {
    /// The scaffold response returned until a real agent call is wired in.
    pub fn placeholder() -> Self {
        Self {
            status: ResponseStatus::Success,
            message: PLACEHOLDER_MESSAGE.to_string(),
            note: Some(PLACEHOLDER_NOTE.to_string()),
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: description.into(),
            note: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}

/// Gateway health probe payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}

/// Payload returned by the MCP endpoint until the server logic lands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpPlaceholderResponse {
    pub status: String,
    pub message: String,
    pub method: String,
    pub path: String,
    pub note: String,
}

impl McpPlaceholderResponse {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            status: "placeholder".to_string(),
            message: "MCP Server endpoint - awaiting implementation".to_string(),
            method: method.into(),
            path: path.into(),
            note: "This is a placeholder. Implement Slack MCP logic here.".to_string(),
        }
    }
}
