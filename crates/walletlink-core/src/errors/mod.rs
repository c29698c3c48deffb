use std::error::Error;

/// Base trait for all application errors
pub trait WalletlinkError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type WalletlinkResult<T> = Result<T, Box<dyn WalletlinkError>>;

impl WalletlinkError for walletlink_config::ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            walletlink_config::ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            walletlink_config::ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            walletlink_config::ConfigError::PathUnavailable { .. } => "CONFIG_PATH_UNAVAILABLE",
            walletlink_config::ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            walletlink_config::ConfigError::ConfigParseError { .. }
                | walletlink_config::ConfigError::InvalidConfiguration { .. }
        )
    }
}
