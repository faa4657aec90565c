//! Form controller owning the message and request state.
//!
//! The controller gates empty input, clears the previous response when a
//! submission starts, and reconciles resolutions with tickets. A newer
//! submission always supersedes an older one still in flight: the older
//! resolution is discarded when it arrives.

use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::agents::AgentClient;
use crate::config::EndpointConfig;
use crate::models::{AgentRequest, AgentResponse};
use crate::Error;

/// Warning surfaced when no agent endpoint is configured.
pub const ENDPOINT_WARNING: &str =
    "Foundry endpoint not configured. Set REACT_APP_FOUNDRY_ENDPOINT environment variable.";

/// Submit affordance label while idle.
pub const SUBMIT_LABEL: &str = "Send to Agent";

/// Submit affordance label while a submission is pending.
pub const PENDING_LABEL: &str = "Sending...";

/// State of the current submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Resolved(AgentResponse),
}

/// Handle for one submission started by [`FormController::begin_submission`].
#[derive(Debug, Clone)]
pub struct SubmissionTicket {
    id: Uuid,
    request: AgentRequest,
}

impl SubmissionTicket {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn request(&self) -> &AgentRequest {
        &self.request
    }
}

/// Headless controller behind the message form.
#[derive(Debug, Default)]
pub struct FormController {
    message: String,
    endpoint: EndpointConfig,
    state: RequestState,
    in_flight: Option<Uuid>,
}

impl FormController {
    pub fn new(endpoint: EndpointConfig) -> Self {
        Self {
            endpoint,
            ..Self::default()
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// External reset. Submitting never clears the message.
    pub fn clear_message(&mut self) {
        self.message.clear();
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, RequestState::Pending)
    }

    /// The resolved response, if the last submission has completed.
    pub fn response(&self) -> Option<&AgentResponse> {
        match &self.state {
            RequestState::Resolved(response) => Some(response),
            _ => None,
        }
    }

    /// Whether the submit affordance should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.message.is_empty() && !self.is_pending()
    }

    pub fn endpoint_warning(&self) -> Option<&'static str> {
        (!self.endpoint.is_configured()).then_some(ENDPOINT_WARNING)
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_pending() {
            PENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Start a submission for the current message.
    ///
    /// Returns `None` without touching state when the message is empty.
    /// Otherwise the previous response is dropped and the state is `Pending`
    /// until the returned ticket is completed.
    pub fn begin_submission(&mut self) -> Option<SubmissionTicket> {
        let request = AgentRequest::new(self.message.clone());
        if let Err(e) = request.validate().map_err(Error::from) {
            debug!("Submission ignored: {}", e);
            return None;
        }

        let id = Uuid::new_v4();
        if let Some(previous) = self.in_flight.replace(id) {
            info!(%previous, submission = %id, "Superseding in-flight submission");
        }
        self.state = RequestState::Pending;

        Some(SubmissionTicket { id, request })
    }

    /// Apply the resolution of a submission.
    ///
    /// Returns `false` and leaves state untouched if the ticket has been
    /// superseded by a newer submission.
    pub fn complete(&mut self, ticket: &SubmissionTicket, response: AgentResponse) -> bool {
        if self.in_flight != Some(ticket.id) {
            debug!(submission = %ticket.id, "Discarding stale resolution");
            return false;
        }

        self.in_flight = None;
        self.state = RequestState::Resolved(response);
        true
    }

    /// Submit the current message through `client` and wait for the result.
    pub async fn submit(&mut self, client: &AgentClient) -> Option<&AgentResponse> {
        let ticket = self.begin_submission()?;
        let response = client.submit(ticket.request().clone()).await;
        self.complete(&ticket, response);
        self.response()
    }

    /// The resolved response as pretty-printed JSON.
    pub fn render(&self) -> Option<String> {
        self.response()
            .and_then(|response| serde_json::to_string_pretty(response).ok())
    }
}
