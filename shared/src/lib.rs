//! Shared library for the MCP gateway and the Foundry agent client.
//!
//! This crate provides the agent request client, the form controller that
//! drives it, and the configuration, error and HTTP types used by the binaries.

pub mod agents;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod models;
pub mod timer;

pub use agents::AgentClient;
pub use config::{ClientConfig, EndpointConfig, GatewayConfig};
pub use controller::{FormController, RequestState, SubmissionTicket};
pub use error::{Error, Result};
pub use models::{AgentRequest, AgentResponse, HealthResponse, McpPlaceholderResponse, ResponseStatus};
pub use timer::{ManualTimer, Timer, TokioTimer};
