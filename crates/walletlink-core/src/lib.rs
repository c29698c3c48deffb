//! walletlink-core: wallet connect dialog workflow
//!
//! Drives a single "connect wallet" attempt: the user picks a network and a
//! wallet source, the wallet provider performs the handshake, and the
//! resulting account becomes the shared application session.
//!
//! # Main Entry Points
//!
//! - [`dialog::ConnectDialog`] - The connect dialog: selection, attempt, open/close
//! - [`connect`] - Attempt controller, status, feedback, and wallet provider seam
//! - [`state`] - Shared session store (single writer, many readers)

pub mod connect;
pub mod dialog;
pub mod errors;
pub mod logging;
pub mod state;

pub use walletlink_config::{ConfigError, WalletlinkConfig};
pub use walletlink_protocol::{AccountRecord, Network, SessionCertificate, WalletSource};

pub use connect::{
    AttemptOutcome, Banner, BannerKind, Choice, ConnectController, ConnectionFailure,
    ConnectionStatus, ControllerOptions, Feedback, Icon, ProviderError, SelectionState,
    WalletProvider, format_error, format_panic, provider_fn,
};
pub use dialog::{
    CloseHandle, ConnectBody, ConnectDialog, DialogFrame, DialogHeader, DialogProps, DialogShell,
};
pub use errors::{WalletlinkError, WalletlinkResult};
pub use state::{
    Command, DispatchError, Event, SessionCommit, SessionSnapshot, SessionStore, SharedSession,
    Store,
};

pub use logging::init_logging;
