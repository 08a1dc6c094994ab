pub mod collaborator;
pub mod config;
pub mod deadline;
pub mod session;

/// Failure taxonomy for the booking client.
///
/// `Validation` and `State` are produced before any network call is made;
/// `Collaborator` and `Network` wrap remote failures and pass the message
/// through to the caller largely verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("Invalid state: {0}")]
    State(String),
    #[error("Collaborator rejected request: {0}")]
    Collaborator(String),
    #[error("Network failure: {0}")]
    Network(String),
}

impl ClientError {
    pub fn validation(reason: impl Into<String>) -> Self {
        ClientError::Validation(vec![reason.into()])
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
