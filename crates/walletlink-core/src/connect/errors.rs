use std::any::Any;
use std::error::Error;
use std::time::Duration;

use crate::errors::WalletlinkError;

/// Shown when a failure carries no usable text.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Every way a connect attempt can fail.
///
/// All variants are handled the same way: the attempt ends, the message is
/// shown, and the user may retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionFailure {
    /// The wallet refused or errored (user rejection, wrong network, missing
    /// extension). The message is the wallet's own text.
    #[error("{message}")]
    Rejected { message: String },

    #[error("Wallet provider crashed: {message}")]
    Panicked { message: String },

    #[error("Wallet did not respond within {}", format_wait(.after))]
    TimedOut { after: Duration },

    #[error("Wallet returned a certificate without a signer address")]
    MalformedCertificate,

    #[error("Failed to store the wallet session: {message}")]
    CommitFailed { message: String },
}

impl WalletlinkError for ConnectionFailure {
    fn error_code(&self) -> &'static str {
        match self {
            ConnectionFailure::Rejected { .. } => "WALLET_REJECTED",
            ConnectionFailure::Panicked { .. } => "WALLET_PROVIDER_PANICKED",
            ConnectionFailure::TimedOut { .. } => "WALLET_TIMED_OUT",
            ConnectionFailure::MalformedCertificate => "WALLET_MALFORMED_CERTIFICATE",
            ConnectionFailure::CommitFailed { .. } => "SESSION_COMMIT_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConnectionFailure::Rejected { .. } | ConnectionFailure::TimedOut { .. }
        )
    }
}

/// Whole seconds read as seconds; anything finer falls back to milliseconds.
fn format_wait(after: &Duration) -> String {
    match after.as_millis() {
        1000 => "1 second".to_string(),
        ms if ms % 1000 == 0 => format!("{} seconds", ms / 1000),
        ms => format!("{ms} ms"),
    }
}

/// Turn any error into a display message.
///
/// Uses the first non-blank message found walking the `source()` chain, so a
/// wrapper with an empty `Display` still yields the underlying cause. Never
/// returns an empty string.
pub fn format_error(error: &(dyn Error + 'static)) -> String {
    let mut current = Some(error);
    while let Some(err) = current {
        let message = err.to_string();
        let message = message.trim();
        if !message.is_empty() {
            return message.to_string();
        }
        current = err.source();
    }
    UNKNOWN_ERROR.to_string()
}

/// Turn a panic payload into a display message.
pub fn format_panic(payload: &(dyn Any + Send)) -> String {
    let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
        s.trim()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.trim()
    } else {
        ""
    };

    if message.is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message.to_string()
    }
}
