//! Shared session state.
//!
//! The session (current network + connected account) has exactly one write
//! path: [`Store::dispatch`] with a [`Command`]. UI surfaces read snapshots or
//! subscribe to the [`Event`] stream.

pub mod errors;
pub mod events;
pub mod session;
pub mod store;
pub mod types;

pub use errors::DispatchError;
pub use events::Event;
pub use session::{SessionSnapshot, SessionStore, SharedSession};
pub use store::{SessionCommit, Store};
pub use types::Command;
