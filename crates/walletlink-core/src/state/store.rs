use std::sync::{Mutex, PoisonError};

use walletlink_protocol::{AccountRecord, Network};

use super::errors::DispatchError;
use super::events::Event;
use super::types::Command;

/// Applies session commands.
///
/// Commands run in the order received, each one completely or not at all.
/// A successful dispatch returns the events describing what changed.
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}

/// Write path the connect controller commits a wallet session through.
pub trait SessionCommit: Send + Sync {
    fn commit_session(
        &self,
        network: Network,
        account: AccountRecord,
    ) -> Result<Vec<Event>, DispatchError>;
}

/// Any store behind a mutex can take commits.
impl<S> SessionCommit for Mutex<S>
where
    S: Store<Error = DispatchError> + Send,
{
    fn commit_session(
        &self,
        network: Network,
        account: AccountRecord,
    ) -> Result<Vec<Event>, DispatchError> {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .dispatch(Command::SetAll { network, account })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SessionStore;
    use walletlink_protocol::WalletSource;

    fn account(address: &str) -> AccountRecord {
        AccountRecord {
            address: address.to_string(),
            source: WalletSource::Sync,
        }
    }

    #[test]
    fn test_commits_apply_in_dispatch_order() {
        let store = Mutex::new(SessionStore::default());
        store.commit_session(Network::Test, account("0x1")).unwrap();
        store.commit_session(Network::Solo, account("0x2")).unwrap();

        let store = store.into_inner().unwrap();
        let snapshot = store.snapshot();
        assert_eq!(snapshot.network, Network::Solo);
        assert_eq!(snapshot.account, Some(account("0x2")));
        assert_eq!(snapshot.revision, 2);
    }

    #[test]
    fn test_rejected_commit_leaves_previous_pair_intact() {
        let store = Mutex::new(SessionStore::default());
        store.commit_session(Network::Test, account("0x1")).unwrap();

        let err = store
            .commit_session(Network::Solo, account(""))
            .unwrap_err();
        assert!(matches!(err, DispatchError::InvalidAccount { .. }));

        let store = store.into_inner().unwrap();
        let snapshot = store.snapshot();
        assert_eq!(snapshot.network, Network::Test);
        assert_eq!(snapshot.account, Some(account("0x1")));
        assert_eq!(snapshot.revision, 1);
    }

    #[test]
    fn test_commit_returns_committed_event() {
        let store = Mutex::new(SessionStore::new(Network::Main));
        let events = store.commit_session(Network::Main, account("0xABC")).unwrap();
        assert_eq!(
            events,
            vec![Event::SessionCommitted {
                network: Network::Main,
                account: account("0xABC"),
            }]
        );
    }
}
