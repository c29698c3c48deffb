use crate::errors::WalletlinkError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("Invalid account: {reason}")]
    InvalidAccount { reason: String },

    #[error("No wallet is connected")]
    NoActiveSession,
}

impl WalletlinkError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::InvalidAccount { .. } => "INVALID_ACCOUNT",
            DispatchError::NoActiveSession => "NO_ACTIVE_SESSION",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, DispatchError::NoActiveSession)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_error_codes() {
        let invalid = DispatchError::InvalidAccount {
            reason: "address is empty".to_string(),
        };
        assert_eq!(invalid.error_code(), "INVALID_ACCOUNT");
        assert_eq!(invalid.to_string(), "Invalid account: address is empty");
        assert!(!invalid.is_user_error());

        assert_eq!(DispatchError::NoActiveSession.error_code(), "NO_ACTIVE_SESSION");
        assert!(DispatchError::NoActiveSession.is_user_error());
    }
}
