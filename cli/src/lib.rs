//! API-specific plumbing for the workflow binaries.
//!
//! Each module owns the JSON schema of one third-party API, decodes
//! `Response` bodies into it, and maps the records to launcher items.
//! The request client knows nothing about these shapes; status-code
//! interpretation happens here.

use std::fmt;

use workflow_core::ClientError;

pub mod betaseries;
pub mod twitch;

/// Failures a workflow run can report to the launcher.
#[derive(Debug)]
pub enum WorkflowError {
    /// The request client failed before or during the exchange.
    Client(ClientError),

    /// The API answered with a semantic error (non-2xx status or an
    /// error payload embedded in the response).
    Api { status: u16, message: String },

    /// The response body did not match the expected schema.
    Decode(String),
}

impl fmt::Display for WorkflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowError::Client(err) => write!(f, "{err}"),
            WorkflowError::Api { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            WorkflowError::Decode(msg) => write!(f, "unexpected response: {msg}"),
        }
    }
}

impl std::error::Error for WorkflowError {}

impl From<ClientError> for WorkflowError {
    fn from(err: ClientError) -> Self {
        WorkflowError::Client(err)
    }
}
