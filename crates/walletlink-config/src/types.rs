//! Configuration types.
//!
//! Every field is optional so that user and project files can be merged
//! field by field. Accessors resolve the effective value with its default.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use walletlink_protocol::{Network, WalletSource};

/// Root configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletlinkConfig {
    #[serde(default)]
    pub connect: ConnectConfig,
    #[serde(default)]
    pub dialog: DialogConfig,
}

/// `[connect]` section: selection defaults and handshake limits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectConfig {
    /// Network preselected when the dialog opens (`main`, `test`, `solo`).
    pub default_network: Option<String>,
    /// Wallet source preselected when the dialog opens.
    pub default_source: Option<String>,
    /// Give up on the wallet after this many seconds. No limit when unset.
    pub timeout_secs: Option<u64>,
}

impl ConnectConfig {
    /// Effective default network.
    ///
    /// Falls back to [`Network::default`] if the configured name is invalid.
    /// `validate_config` rejects such values at load time.
    pub fn default_network(&self) -> Network {
        match self.default_network.as_deref() {
            None => Network::default(),
            Some(name) => name.parse().unwrap_or_else(|e| {
                tracing::warn!(
                    event = "config.connect.default_network_invalid",
                    error = %e,
                    "Using built-in default network"
                );
                Network::default()
            }),
        }
    }

    /// Effective default wallet source.
    pub fn default_source(&self) -> WalletSource {
        match self.default_source.as_deref() {
            None => WalletSource::default(),
            Some(name) => name.parse().unwrap_or_else(|e| {
                tracing::warn!(
                    event = "config.connect.default_source_invalid",
                    error = %e,
                    "Using built-in default wallet source"
                );
                WalletSource::default()
            }),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            default_network: override_config
                .default_network
                .clone()
                .or_else(|| base.default_network.clone()),
            default_source: override_config
                .default_source
                .clone()
                .or_else(|| base.default_source.clone()),
            timeout_secs: override_config.timeout_secs.or(base.timeout_secs),
        }
    }
}

/// `[dialog]` section: behavior of the connect dialog across open/close.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogConfig {
    /// Keep the last network/source choice when the dialog reopens.
    pub remember_selection: Option<bool>,
    /// Commit a handshake that completes after the dialog was dismissed.
    pub commit_late_results: Option<bool>,
}

impl DialogConfig {
    pub fn remember_selection(&self) -> bool {
        self.remember_selection.unwrap_or(false)
    }

    pub fn commit_late_results(&self) -> bool {
        self.commit_late_results.unwrap_or(false)
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            remember_selection: override_config
                .remember_selection
                .or(base.remember_selection),
            commit_late_results: override_config
                .commit_late_results
                .or(base.commit_late_results),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WalletlinkConfig::default();
        assert_eq!(config.connect.default_network(), Network::Main);
        assert_eq!(config.connect.default_source(), WalletSource::Sync2);
        assert_eq!(config.connect.timeout(), None);
        assert!(!config.dialog.remember_selection());
        assert!(!config.dialog.commit_late_results());
    }

    #[test]
    fn test_parse_full_config() {
        let config: WalletlinkConfig = toml::from_str(
            r#"
[connect]
default_network = "test"
default_source = "veworld"
timeout_secs = 90

[dialog]
remember_selection = true
"#,
        )
        .unwrap();
        assert_eq!(config.connect.default_network(), Network::Test);
        assert_eq!(config.connect.default_source(), WalletSource::VeWorld);
        assert_eq!(config.connect.timeout(), Some(Duration::from_secs(90)));
        assert!(config.dialog.remember_selection());
        assert!(!config.dialog.commit_late_results());
    }

    #[test]
    fn test_empty_sections_deserialize() {
        let config: WalletlinkConfig = toml::from_str("").unwrap();
        assert_eq!(config, WalletlinkConfig::default());
    }

    #[test]
    fn test_invalid_network_name_falls_back() {
        let connect = ConnectConfig {
            default_network: Some("ropsten".to_string()),
            ..Default::default()
        };
        assert_eq!(connect.default_network(), Network::Main);
    }

    #[test]
    fn test_dialog_merge_override_wins_when_set() {
        let base = DialogConfig {
            remember_selection: Some(true),
            commit_late_results: Some(true),
        };
        let override_config = DialogConfig {
            remember_selection: Some(false),
            commit_late_results: None,
        };
        let merged = DialogConfig::merge(&base, &override_config);
        assert!(!merged.remember_selection());
        assert!(merged.commit_late_results());
    }
}
