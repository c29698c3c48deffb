//! The "Connect Wallet" dialog.
//!
//! Combines the selection, the attempt controller, and the shell. The parent
//! owns visibility: it calls [`ConnectDialog::render`] with its current
//! `is_open` value and closes the dialog when the close callback fires.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use walletlink_config::WalletlinkConfig;
use walletlink_protocol::{Network, WalletSource};

use super::shell::{CloseHandle, DialogFrame, DialogHeader, DialogProps, DialogShell};
use crate::connect::{
    AttemptOutcome, Choice, ConnectController, ConnectionStatus, ControllerOptions, Feedback,
    Icon, SelectionState, WalletProvider,
};
use crate::state::SharedSession;

pub const CONNECT_DIALOG_TITLE: &str = "Connect Wallet";

/// Content of an open connect dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectBody {
    pub network_options: Vec<Choice<Network>>,
    pub source_options: Vec<Choice<WalletSource>>,
    pub feedback: Feedback,
}

pub struct ConnectDialog {
    selection: Mutex<SelectionState>,
    defaults: SelectionState,
    remember_selection: bool,
    controller: ConnectController,
    on_close: CloseHandle,
    open: AtomicBool,
}

impl ConnectDialog {
    pub fn new(
        config: &WalletlinkConfig,
        provider: Arc<dyn WalletProvider>,
        session: SharedSession,
        on_close: CloseHandle,
    ) -> Self {
        let defaults = SelectionState::from_config(&config.connect);
        let controller = ConnectController::new(
            provider,
            Arc::new(session),
            on_close.clone(),
            ControllerOptions::from_config(config),
        );
        Self {
            selection: Mutex::new(defaults),
            defaults,
            remember_selection: config.dialog.remember_selection(),
            controller,
            on_close,
            open: AtomicBool::new(false),
        }
    }

    fn lock_selection(&self) -> MutexGuard<'_, SelectionState> {
        self.selection.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn selection(&self) -> SelectionState {
        *self.lock_selection()
    }

    pub fn set_network(&self, network: Network) {
        tracing::debug!(event = "core.dialog.network_selected", network = %network);
        self.lock_selection().set_network(network);
    }

    pub fn set_source(&self, source: WalletSource) {
        tracing::debug!(event = "core.dialog.source_selected", source = %source);
        self.lock_selection().set_source(source);
    }

    pub fn status(&self) -> ConnectionStatus {
        self.controller.status()
    }

    pub fn feedback(&self) -> Feedback {
        Feedback::from_status(&self.controller.status())
    }

    pub fn controller(&self) -> &ConnectController {
        &self.controller
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Connect with the current selection.
    pub async fn connect(&self) -> AttemptOutcome {
        let selection = self.selection();
        self.controller
            .attempt_connect(selection.source(), selection.network())
            .await
    }

    /// Apply the parent's `is_open` value.
    ///
    /// Opening resets the selection to the configured defaults unless
    /// `remember_selection` is set. Closing returns the status to `Idle` and
    /// detaches any pending attempt.
    pub fn sync_open(&self, is_open: bool) {
        let was_open = self.open.swap(is_open, Ordering::SeqCst);
        match (was_open, is_open) {
            (false, true) => {
                tracing::info!(event = "core.dialog.opened");
                if !self.remember_selection {
                    self.lock_selection().reset(self.defaults);
                }
            }
            (true, false) => {
                tracing::info!(event = "core.dialog.closed");
                self.controller.dismiss();
            }
            _ => {}
        }
    }

    pub fn header() -> DialogHeader {
        DialogHeader::new(CONNECT_DIALOG_TITLE, Icon::Wallet)
    }

    /// Render the dialog for the parent's current `is_open` value.
    pub fn render(&self, is_open: bool) -> Option<DialogFrame<ConnectBody>> {
        self.sync_open(is_open);
        let props = DialogProps {
            is_open,
            on_close: self.on_close.clone(),
        };
        DialogShell::render(&props, Self::header(), |_| {
            let selection = self.selection();
            ConnectBody {
                network_options: selection.network_options(),
                source_options: selection.source_options(),
                feedback: self.feedback(),
            }
        })
    }
}

impl std::fmt::Debug for ConnectDialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectDialog")
            .field("open", &self.is_open())
            .field("selection", &self.selection())
            .field("controller", &self.controller)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connect::{ProviderError, provider_fn};
    use walletlink_protocol::SessionCertificate;

    fn dialog_with(config: &WalletlinkConfig) -> ConnectDialog {
        let provider = provider_fn(|_, _| async {
            Ok::<_, ProviderError>(SessionCertificate::for_signer("0xABC"))
        });
        ConnectDialog::new(
            config,
            Arc::new(provider),
            SharedSession::default(),
            CloseHandle::noop(),
        )
    }

    #[test]
    fn test_closed_dialog_renders_nothing() {
        let dialog = dialog_with(&WalletlinkConfig::default());
        assert!(dialog.render(false).is_none());
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_open_dialog_shows_header_options_and_idle_feedback() {
        let dialog = dialog_with(&WalletlinkConfig::default());
        let frame = dialog.render(true).unwrap();

        assert_eq!(frame.header.title, "Connect Wallet");
        assert_eq!(frame.header.icon, Icon::Wallet);
        assert_eq!(frame.body.network_options.len(), Network::ALL.len());
        assert!(
            frame
                .body
                .network_options
                .iter()
                .any(|c| c.selected && c.value == Network::Main)
        );
        assert_eq!(frame.body.feedback, Feedback::from_status(&ConnectionStatus::Idle));
    }

    #[test]
    fn test_reopen_resets_selection_by_default() {
        let dialog = dialog_with(&WalletlinkConfig::default());
        dialog.render(true);
        dialog.set_network(Network::Solo);
        dialog.set_source(WalletSource::VeWorld);

        dialog.render(false);
        dialog.render(true);

        assert_eq!(dialog.selection(), SelectionState::default());
    }

    #[test]
    fn test_reopen_keeps_selection_when_remembered() {
        let mut config = WalletlinkConfig::default();
        config.dialog.remember_selection = Some(true);
        let dialog = dialog_with(&config);
        dialog.render(true);
        dialog.set_network(Network::Test);

        dialog.render(false);
        dialog.render(true);

        assert_eq!(dialog.selection().network(), Network::Test);
    }

    #[test]
    fn test_rerender_while_open_keeps_selection() {
        let dialog = dialog_with(&WalletlinkConfig::default());
        dialog.render(true);
        dialog.set_source(WalletSource::Sync);
        dialog.render(true);
        assert_eq!(dialog.selection().source(), WalletSource::Sync);
    }

    #[test]
    fn test_configured_defaults_preselected() {
        let mut config = WalletlinkConfig::default();
        config.connect.default_network = Some("test".to_string());
        config.connect.default_source = Some("wallet-connect".to_string());
        let dialog = dialog_with(&config);

        let frame = dialog.render(true).unwrap();
        assert!(
            frame
                .body
                .source_options
                .iter()
                .any(|c| c.selected && c.value == WalletSource::WalletConnect)
        );
        assert_eq!(dialog.selection().network(), Network::Test);
    }

    #[test]
    fn test_connect_uses_current_selection() {
        let dialog = dialog_with(&WalletlinkConfig::default());
        dialog.render(true);
        dialog.set_source(WalletSource::VeWorld);

        let outcome = smol::block_on(dialog.connect());
        match outcome {
            AttemptOutcome::Connected(account) => {
                assert_eq!(account.source, WalletSource::VeWorld);
                assert_eq!(account.address, "0xABC");
            }
            other => panic!("expected Connected, got {:?}", other),
        }
    }
}
