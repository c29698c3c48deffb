use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use serde::Serialize;
use tracing::{debug, info, warn};
use walletlink_protocol::{AccountRecord, Network};

use super::errors::DispatchError;
use super::events::Event;
use super::store::{SessionCommit, Store};
use super::types::Command;

/// Point-in-time view of the shared session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub network: Network,
    pub account: Option<AccountRecord>,
    /// When the current account was committed. `None` while disconnected.
    pub committed_at: Option<DateTime<Utc>>,
    /// Number of commands applied so far.
    pub revision: u64,
}

impl SessionSnapshot {
    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }
}

/// Owner of the current network and account.
///
/// All writes go through [`Store::dispatch`]. Subscribers receive every
/// event in dispatch order.
pub struct SessionStore {
    current: SessionSnapshot,
    subscribers: Vec<UnboundedSender<Event>>,
}

impl SessionStore {
    pub fn new(network: Network) -> Self {
        Self {
            current: SessionSnapshot {
                network,
                account: None,
                committed_at: None,
                revision: 0,
            },
            subscribers: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> &SessionSnapshot {
        &self.current
    }

    pub fn subscribe(&mut self) -> UnboundedReceiver<Event> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    fn publish(&mut self, events: &[Event]) {
        for event in events {
            self.subscribers
                .retain(|tx| tx.unbounded_send(event.clone()).is_ok());
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Network::default())
    }
}

impl Store for SessionStore {
    type Error = DispatchError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        debug!(event = "core.session.dispatch_started", command = ?cmd);

        let result = match cmd {
            Command::SetAll { network, account } => {
                if account.address.trim().is_empty() {
                    Err(DispatchError::InvalidAccount {
                        reason: "address is empty".to_string(),
                    })
                } else {
                    // Single assignment: network and account change together.
                    self.current = SessionSnapshot {
                        network,
                        account: Some(account.clone()),
                        committed_at: Some(Utc::now()),
                        revision: self.current.revision + 1,
                    };
                    Ok(vec![Event::SessionCommitted { network, account }])
                }
            }
            Command::Disconnect => {
                if self.current.account.is_none() {
                    Err(DispatchError::NoActiveSession)
                } else {
                    let network = self.current.network;
                    self.current = SessionSnapshot {
                        network,
                        account: None,
                        committed_at: None,
                        revision: self.current.revision + 1,
                    };
                    Ok(vec![Event::SessionCleared { network }])
                }
            }
        };

        match &result {
            Ok(events) => {
                info!(
                    event = "core.session.dispatch_completed",
                    event_count = events.len(),
                    revision = self.current.revision
                );
                self.publish(events);
            }
            Err(e) => warn!(event = "core.session.dispatch_failed", error = %e),
        }

        result
    }
}

/// Cloneable handle to the process-wide [`SessionStore`].
#[derive(Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<SessionStore>>,
}

impl SharedSession {
    pub fn new(network: Network) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionStore::new(network))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn dispatch(&self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        self.lock().dispatch(cmd)
    }

    /// Make `network` + `account` the current session in one step.
    pub fn commit_session(
        &self,
        network: Network,
        account: AccountRecord,
    ) -> Result<Vec<Event>, DispatchError> {
        self.dispatch(Command::SetAll { network, account })
    }

    pub fn disconnect(&self) -> Result<Vec<Event>, DispatchError> {
        self.dispatch(Command::Disconnect)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot().clone()
    }

    pub fn current_network(&self) -> Network {
        self.lock().snapshot().network
    }

    pub fn current_account(&self) -> Option<AccountRecord> {
        self.lock().snapshot().account.clone()
    }

    pub fn subscribe(&self) -> UnboundedReceiver<Event> {
        self.lock().subscribe()
    }
}

impl SessionCommit for SharedSession {
    fn commit_session(
        &self,
        network: Network,
        account: AccountRecord,
    ) -> Result<Vec<Event>, DispatchError> {
        SharedSession::commit_session(self, network, account)
    }
}

impl std::fmt::Debug for SharedSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSession")
            .field("current", &self.snapshot())
            .finish()
    }
}
