//! Connect attempt controller.
//!
//! Owns [`ConnectionStatus`] and runs one wallet handshake at a time:
//! `Idle`/`Failed` -> `Pending` -> `Idle` (committed) or `Failed(message)`.
//!
//! Every attempt holds a [`PendingGuard`] while it awaits the wallet. The
//! guard resets `Pending` when the attempt ends without settling (provider
//! panic, future dropped mid-flight), so the status can never stay stuck.

use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use futures::FutureExt;
use futures::future::{self, Either};
use tracing::{debug, error, info, warn};
use walletlink_config::WalletlinkConfig;
use walletlink_protocol::{AccountRecord, Network, SessionCertificate, WalletSource};

use super::errors::{ConnectionFailure, format_error, format_panic};
use super::provider::WalletProvider;
use super::status::ConnectionStatus;
use crate::dialog::CloseHandle;
use crate::state::SessionCommit;

/// Tunables read from `[connect]` and `[dialog]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Fail the attempt if the wallet has not answered by then.
    pub timeout: Option<Duration>,
    /// Commit a certificate that arrives after the dialog was dismissed.
    pub commit_late_results: bool,
}

impl ControllerOptions {
    pub fn from_config(config: &WalletlinkConfig) -> Self {
        Self {
            timeout: config.connect.timeout(),
            commit_late_results: config.dialog.commit_late_results(),
        }
    }
}

/// How a call to [`ConnectController::attempt_connect`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Session committed and the dialog asked to close.
    Connected(AccountRecord),
    /// Attempt failed; the status now carries the message.
    Failed(ConnectionFailure),
    /// Another attempt was already pending. Nothing happened.
    Ignored,
    /// The dialog was dismissed before the wallet answered; result dropped.
    Discarded,
}

#[derive(Debug, Default)]
struct AttemptState {
    status: ConnectionStatus,
    /// Id of the attempt currently allowed to settle the status.
    active: Option<u64>,
    last_id: u64,
}

fn lock(state: &Mutex<AttemptState>) -> MutexGuard<'_, AttemptState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Resets `Pending` if its attempt is still active when dropped.
struct PendingGuard<'a> {
    state: &'a Mutex<AttemptState>,
    attempt_id: u64,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        let mut state = lock(self.state);
        if state.active == Some(self.attempt_id) {
            warn!(
                event = "core.connect.attempt_abandoned",
                attempt_id = self.attempt_id,
                "Attempt ended before settling, resetting status"
            );
            state.active = None;
            state.status = ConnectionStatus::Idle;
        }
    }
}

pub struct ConnectController {
    state: Mutex<AttemptState>,
    provider: Arc<dyn WalletProvider>,
    session: Arc<dyn SessionCommit>,
    on_close: CloseHandle,
    options: ControllerOptions,
}

impl ConnectController {
    pub fn new(
        provider: Arc<dyn WalletProvider>,
        session: Arc<dyn SessionCommit>,
        on_close: CloseHandle,
        options: ControllerOptions,
    ) -> Self {
        Self {
            state: Mutex::new(AttemptState::default()),
            provider,
            session,
            on_close,
            options,
        }
    }

    pub fn status(&self) -> ConnectionStatus {
        lock(&self.state).status.clone()
    }

    pub fn is_pending(&self) -> bool {
        lock(&self.state).status.is_pending()
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    /// Forget the current attempt and return to `Idle`.
    ///
    /// Called when the dialog is dismissed. A pending handshake keeps running
    /// but its result no longer touches the status.
    pub fn dismiss(&self) {
        let mut state = lock(&self.state);
        if let Some(attempt_id) = state.active.take() {
            info!(event = "core.connect.attempt_detached", attempt_id);
        }
        state.status = ConnectionStatus::Idle;
    }

    /// Run one connect attempt with the given selection.
    ///
    /// Ignored while another attempt is pending. On success the session is
    /// committed, the status returns to `Idle`, and the close callback fires
    /// once. On failure the status becomes `Failed` and the dialog stays open.
    pub async fn attempt_connect(
        &self,
        source: WalletSource,
        network: Network,
    ) -> AttemptOutcome {
        let Some(attempt_id) = self.begin() else {
            debug!(
                event = "core.connect.attempt_ignored",
                reason = "already_pending"
            );
            return AttemptOutcome::Ignored;
        };
        let guard = PendingGuard {
            state: &self.state,
            attempt_id,
        };

        info!(
            event = "core.connect.attempt_started",
            attempt_id,
            source = %source,
            network = %network
        );

        let result = self.handshake(source, network).await;
        let outcome = self.settle(attempt_id, source, network, result);

        drop(guard);
        outcome
    }

    fn begin(&self) -> Option<u64> {
        let mut state = lock(&self.state);
        if state.status.is_pending() {
            return None;
        }
        state.last_id += 1;
        let attempt_id = state.last_id;
        state.active = Some(attempt_id);
        // Clears any previous failure message.
        state.status = ConnectionStatus::Pending;
        Some(attempt_id)
    }

    async fn handshake(
        &self,
        source: WalletSource,
        network: Network,
    ) -> Result<SessionCertificate, ConnectionFailure> {
        // A provider may panic before handing back a future.
        let call = std::panic::catch_unwind(AssertUnwindSafe(|| {
            self.provider.connect(source, network)
        }))
        .map_err(|payload| ConnectionFailure::Panicked {
            message: format_panic(payload.as_ref()),
        })?;

        let call = AssertUnwindSafe(call).catch_unwind();
        let settled = match self.options.timeout {
            None => call.await,
            Some(limit) => match future::select(call, smol::Timer::after(limit)).await {
                Either::Left((settled, _)) => settled,
                Either::Right(_) => {
                    return Err(ConnectionFailure::TimedOut { after: limit });
                }
            },
        };

        match settled {
            Ok(Ok(certificate)) => Ok(certificate),
            Ok(Err(e)) => Err(ConnectionFailure::Rejected {
                message: format_error(&*e),
            }),
            Err(payload) => Err(ConnectionFailure::Panicked {
                message: format_panic(payload.as_ref()),
            }),
        }
    }

    fn settle(
        &self,
        attempt_id: u64,
        source: WalletSource,
        network: Network,
        result: Result<SessionCertificate, ConnectionFailure>,
    ) -> AttemptOutcome {
        let detached = lock(&self.state).active != Some(attempt_id);

        match result {
            Ok(certificate) => {
                if detached && !self.options.commit_late_results {
                    info!(
                        event = "core.connect.attempt_discarded",
                        attempt_id,
                        reason = "dialog_dismissed"
                    );
                    return AttemptOutcome::Discarded;
                }

                match self.commit(source, network, certificate) {
                    Ok(account) => {
                        self.finish(attempt_id, ConnectionStatus::Idle);
                        info!(
                            event = "core.connect.attempt_completed",
                            attempt_id,
                            address = %account.address,
                            source = %source,
                            network = %network
                        );
                        // Lock is released; the parent may re-enter on close.
                        if !detached {
                            self.on_close.request_close();
                        }
                        AttemptOutcome::Connected(account)
                    }
                    Err(failure) => self.fail(attempt_id, failure),
                }
            }
            Err(failure) => {
                if detached {
                    info!(
                        event = "core.connect.attempt_discarded",
                        attempt_id,
                        error = %failure,
                        reason = "dialog_dismissed"
                    );
                    return AttemptOutcome::Discarded;
                }
                self.fail(attempt_id, failure)
            }
        }
    }

    fn commit(
        &self,
        source: WalletSource,
        network: Network,
        certificate: SessionCertificate,
    ) -> Result<AccountRecord, ConnectionFailure> {
        if certificate.signer.trim().is_empty() {
            return Err(ConnectionFailure::MalformedCertificate);
        }

        let account = AccountRecord {
            address: certificate.signer,
            source,
        };
        self.session
            .commit_session(network, account.clone())
            .map_err(|e| {
                error!(event = "core.connect.commit_failed", error = %e);
                ConnectionFailure::CommitFailed {
                    message: e.to_string(),
                }
            })?;
        Ok(account)
    }

    fn fail(&self, attempt_id: u64, failure: ConnectionFailure) -> AttemptOutcome {
        warn!(
            event = "core.connect.attempt_failed",
            attempt_id,
            error = %failure
        );
        self.finish(attempt_id, ConnectionStatus::failed(failure.to_string()));
        AttemptOutcome::Failed(failure)
    }

    fn finish(&self, attempt_id: u64, status: ConnectionStatus) {
        let mut state = lock(&self.state);
        if state.active == Some(attempt_id) {
            state.active = None;
            state.status = status;
        }
    }
}

impl std::fmt::Debug for ConnectController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectController")
            .field("status", &self.status())
            .field("options", &self.options)
            .finish()
    }
}
