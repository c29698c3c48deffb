//! # walletlink-config
//!
//! TOML configuration types, loading, and validation for walletlink.
//!
//! Single source of truth for `WalletlinkConfig` and the `~/.walletlink/`
//! path layout. Depends only on `walletlink-protocol`.

mod loading;
mod validation;

pub mod errors;
pub mod paths;
pub mod types;

// Public API re-exports
pub use errors::ConfigError;
pub use loading::{load_hierarchy, load_hierarchy_from, merge_configs};
pub use paths::{PathError, WalletlinkPaths};
pub use types::{ConnectConfig, DialogConfig, WalletlinkConfig};
pub use validation::validate_config;

impl WalletlinkConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
