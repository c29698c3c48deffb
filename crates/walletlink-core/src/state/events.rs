use serde::{Deserialize, Serialize};
use walletlink_protocol::{AccountRecord, Network};

/// Session changes produced by a successful dispatch.
///
/// Each variant describes _what happened_. Failed dispatches use the
/// `Result` error channel, never the event stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// A new network/account pair became the current session.
    SessionCommitted {
        network: Network,
        account: AccountRecord,
    },
    /// The connected account was cleared.
    SessionCleared { network: Network },
}
