use super::errors::UNKNOWN_ERROR;

/// State of the connect attempt owned by the controller.
///
/// A single enum so that "loading" and "errored" can never be true at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Idle,
    /// Waiting for the user to approve the request in the wallet.
    Pending,
    /// Last attempt failed. The message is never empty.
    Failed(String),
}

impl ConnectionStatus {
    /// Build a `Failed` status, substituting a generic message for blank input.
    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            ConnectionStatus::Failed(UNKNOWN_ERROR.to_string())
        } else {
            ConnectionStatus::Failed(message)
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ConnectionStatus::Pending)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ConnectionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}
