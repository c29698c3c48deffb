use serde::{Deserialize, Serialize};
use walletlink_protocol::{AccountRecord, Network};

/// All session operations that can be dispatched through the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Replace the current network and account together.
    SetAll {
        network: Network,
        account: AccountRecord,
    },
    /// Forget the connected account. The network is kept.
    Disconnect,
}
