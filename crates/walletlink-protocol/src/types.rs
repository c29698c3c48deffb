use serde::{Deserialize, Serialize};

/// Error returned when a network or wallet source name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} '{value}'. Valid options: {valid}")]
pub struct ParseChoiceError {
    pub kind: &'static str,
    pub value: String,
    pub valid: String,
}

/// Blockchain network the wallet operates against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Main,
    Test,
    Solo,
}

impl Network {
    /// All networks in display order.
    pub const ALL: [Network; 3] = [Network::Main, Network::Test, Network::Solo];

    /// Stable identifier used in config files and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Solo => "solo",
        }
    }

    /// Human-readable name shown in the network dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            Network::Main => "Mainnet",
            Network::Test => "Testnet",
            Network::Solo => "Solo",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Network {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|n| n.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseChoiceError {
                kind: "network",
                value: s.to_string(),
                valid: Network::ALL.map(|n| n.as_str()).join(", "),
            })
    }
}

/// Wallet provider used to perform signing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WalletSource {
    #[default]
    #[serde(rename = "sync2")]
    Sync2,
    #[serde(rename = "sync")]
    Sync,
    #[serde(rename = "veworld")]
    VeWorld,
    #[serde(rename = "wallet-connect")]
    WalletConnect,
}

impl WalletSource {
    /// All wallet sources in display order.
    pub const ALL: [WalletSource; 4] = [
        WalletSource::Sync2,
        WalletSource::Sync,
        WalletSource::VeWorld,
        WalletSource::WalletConnect,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WalletSource::Sync2 => "sync2",
            WalletSource::Sync => "sync",
            WalletSource::VeWorld => "veworld",
            WalletSource::WalletConnect => "wallet-connect",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WalletSource::Sync2 => "Sync2",
            WalletSource::Sync => "Sync",
            WalletSource::VeWorld => "VeWorld",
            WalletSource::WalletConnect => "WalletConnect",
        }
    }
}

impl std::fmt::Display for WalletSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WalletSource {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WalletSource::ALL
            .into_iter()
            .find(|w| w.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseChoiceError {
                kind: "wallet source",
                value: s.to_string(),
                valid: WalletSource::ALL.map(|w| w.as_str()).join(", "),
            })
    }
}

/// Result of a successful wallet handshake.
///
/// Only `signer` is required. The remaining fields are whatever the wallet
/// chose to return alongside the signed identification request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCertificate {
    pub signer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl SessionCertificate {
    /// Certificate carrying only a signer address.
    pub fn for_signer(signer: impl Into<String>) -> Self {
        Self {
            signer: signer.into(),
            domain: None,
            timestamp: None,
            signature: None,
        }
    }
}

/// Connected account: signer address plus the wallet source that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub address: String,
    pub source: WalletSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_default_is_main() {
        assert_eq!(Network::default(), Network::Main);
    }

    #[test]
    fn test_source_default_is_sync2() {
        assert_eq!(WalletSource::default(), WalletSource::Sync2);
    }

    #[test]
    fn test_network_parse_is_case_insensitive() {
        assert_eq!("TEST".parse::<Network>().unwrap(), Network::Test);
        assert_eq!(" solo ".parse::<Network>().unwrap(), Network::Solo);
    }

    #[test]
    fn test_network_parse_unknown_lists_valid_options() {
        let err = "ropsten".parse::<Network>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown network 'ropsten'. Valid options: main, test, solo"
        );
    }

    #[test]
    fn test_source_parse_unknown() {
        let err = "metamask".parse::<WalletSource>().unwrap_err();
        assert_eq!(err.kind, "wallet source");
        assert!(err.valid.contains("wallet-connect"));
    }

    #[test]
    fn test_serde_names_match_display() {
        for network in Network::ALL {
            let json = serde_json::to_string(&network).unwrap();
            assert_eq!(json, format!("\"{}\"", network));
        }
        for source in WalletSource::ALL {
            let json = serde_json::to_string(&source).unwrap();
            assert_eq!(json, format!("\"{}\"", source));
        }
    }

    #[test]
    fn test_certificate_optional_fields_omitted() {
        let cert = SessionCertificate::for_signer("0xabc");
        let json = serde_json::to_string(&cert).unwrap();
        assert_eq!(json, r#"{"signer":"0xabc"}"#);
    }

    #[test]
    fn test_certificate_parses_wallet_payload() {
        let json = r#"{"signer":"0x7567d83b7b8d80addcb281a71d54fc7b3364ffed","domain":"localhost","timestamp":1700000000,"signature":"0xdead"}"#;
        let cert: SessionCertificate = serde_json::from_str(json).unwrap();
        assert_eq!(cert.domain.as_deref(), Some("localhost"));
        assert_eq!(cert.timestamp, Some(1_700_000_000));
    }

    #[test]
    fn test_account_record_serde() {
        let account = AccountRecord {
            address: "0xABC".to_string(),
            source: WalletSource::VeWorld,
        };
        let json = serde_json::to_string(&account).unwrap();
        assert!(json.contains(r#""source":"veworld""#));
        let parsed: AccountRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, account);
    }
}
