//! Configuration validation logic.

use walletlink_protocol::{Network, WalletSource};

use crate::errors::ConfigError;
use crate::types::WalletlinkConfig;

/// Validate a WalletlinkConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - `connect.default_network`, if set, must name a known network
/// - `connect.default_source`, if set, must name a known wallet source
/// - `connect.timeout_secs`, if set, must be greater than zero
pub fn validate_config(config: &WalletlinkConfig) -> Result<(), ConfigError> {
    if let Some(ref network) = config.connect.default_network
        && let Err(e) = network.parse::<Network>()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: e.to_string(),
        });
    }

    if let Some(ref source) = config.connect.default_source
        && let Err(e) = source.parse::<WalletSource>()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: e.to_string(),
        });
    }

    if config.connect.timeout_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "connect.timeout_secs must be greater than 0 (omit it to disable the timeout)"
                .to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ConnectConfig;

    fn with_connect(connect: ConnectConfig) -> WalletlinkConfig {
        WalletlinkConfig {
            connect,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&WalletlinkConfig::default()).is_ok());
    }

    #[test]
    fn test_unknown_source_rejected() {
        let config = with_connect(ConnectConfig {
            default_source: Some("metamask".to_string()),
            ..Default::default()
        });
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("Unknown wallet source 'metamask'"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = with_connect(ConnectConfig {
            timeout_secs: Some(0),
            ..Default::default()
        });
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_known_values_accepted() {
        let config = with_connect(ConnectConfig {
            default_network: Some("solo".to_string()),
            default_source: Some("wallet-connect".to_string()),
            timeout_secs: Some(120),
        });
        assert!(validate_config(&config).is_ok());
    }
}
