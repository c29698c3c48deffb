//! Shared domain types for walletlink.
//!
//! Value types passed between the connect dialog, the wallet provider and the
//! session store. Kept free of any runtime or UI dependency.

pub mod types;

pub use types::{AccountRecord, Network, ParseChoiceError, SessionCertificate, WalletSource};
