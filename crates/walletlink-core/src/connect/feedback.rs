//! Visible state of the connect dialog derived from [`ConnectionStatus`].

use super::status::ConnectionStatus;

pub const CONNECT_LABEL: &str = "Connect";
pub const CONNECTING_LABEL: &str = "Connecting...";
pub const APPROVE_PROMPT: &str = "Approve the request in the wallet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Wallet,
    Link,
    Spinner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    /// Neutral notice while waiting on the wallet.
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

/// Everything the dialog footer shows: primary action plus optional banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub label: &'static str,
    pub action_enabled: bool,
    pub icon: Icon,
    pub banner: Option<Banner>,
}

impl Feedback {
    pub fn from_status(status: &ConnectionStatus) -> Self {
        match status {
            ConnectionStatus::Idle => Self {
                label: CONNECT_LABEL,
                action_enabled: true,
                icon: Icon::Link,
                banner: None,
            },
            ConnectionStatus::Pending => Self {
                label: CONNECTING_LABEL,
                action_enabled: false,
                icon: Icon::Spinner,
                banner: Some(Banner {
                    kind: BannerKind::Info,
                    text: APPROVE_PROMPT.to_string(),
                }),
            },
            ConnectionStatus::Failed(message) => Self {
                label: CONNECT_LABEL,
                action_enabled: true,
                icon: Icon::Link,
                banner: Some(Banner {
                    kind: BannerKind::Error,
                    text: message.clone(),
                }),
            },
        }
    }
}

impl From<&ConnectionStatus> for Feedback {
    fn from(status: &ConnectionStatus) -> Self {
        Feedback::from_status(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_feedback() {
        let feedback = Feedback::from_status(&ConnectionStatus::Idle);
        assert_eq!(feedback.label, "Connect");
        assert!(feedback.action_enabled);
        assert_eq!(feedback.icon, Icon::Link);
        assert!(feedback.banner.is_none());
    }

    #[test]
    fn test_pending_feedback() {
        let feedback = Feedback::from_status(&ConnectionStatus::Pending);
        assert_eq!(feedback.label, "Connecting...");
        assert!(!feedback.action_enabled);
        assert_eq!(feedback.icon, Icon::Spinner);
        assert_eq!(
            feedback.banner,
            Some(Banner {
                kind: BannerKind::Info,
                text: "Approve the request in the wallet".to_string(),
            })
        );
    }

    #[test]
    fn test_failed_feedback_allows_retry() {
        let feedback = Feedback::from_status(&ConnectionStatus::failed("User rejected"));
        assert_eq!(feedback.label, "Connect");
        assert!(feedback.action_enabled);
        assert_eq!(feedback.icon, Icon::Link);
        let banner = feedback.banner.unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.text, "User rejected");
    }

    #[test]
    fn test_mapping_is_deterministic() {
        for status in [
            ConnectionStatus::Idle,
            ConnectionStatus::Pending,
            ConnectionStatus::failed("Network mismatch"),
        ] {
            assert_eq!(Feedback::from_status(&status), Feedback::from(&status));
            assert_eq!(
                Feedback::from_status(&status),
                Feedback::from_status(&status.clone())
            );
        }
    }
}
