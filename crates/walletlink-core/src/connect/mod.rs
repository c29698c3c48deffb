//! Connect workflow: selection, attempt controller, and presentation feedback.

pub mod controller;
pub mod errors;
pub mod feedback;
pub mod provider;
pub mod selection;
pub mod status;

pub use controller::{AttemptOutcome, ConnectController, ControllerOptions};
pub use errors::{ConnectionFailure, UNKNOWN_ERROR, format_error, format_panic};
pub use feedback::{Banner, BannerKind, Feedback, Icon};
pub use provider::{ProviderError, WalletProvider, provider_fn};
pub use selection::{Choice, SelectionState};
pub use status::ConnectionStatus;
