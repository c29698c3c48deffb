//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.walletlink/config.toml`
//! 3. **Project config** - `./.walletlink/config.toml`

use std::fs;
use std::path::Path;

use crate::errors::ConfigError;
use crate::paths::WalletlinkPaths;
use crate::types::{ConnectConfig, DialogConfig, WalletlinkConfig};
use crate::validation::validate_config;

/// Load configuration from the user and project config files.
///
/// # Errors
///
/// Returns an error if a file exists but cannot be parsed, or if validation
/// fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<WalletlinkConfig, ConfigError> {
    let paths = WalletlinkPaths::resolve()?;
    let project_root = std::env::current_dir()?;
    load_hierarchy_from(&paths, &project_root)
}

/// Load the hierarchy from explicit locations.
pub fn load_hierarchy_from(
    paths: &WalletlinkPaths,
    project_root: &Path,
) -> Result<WalletlinkConfig, ConfigError> {
    let mut config = WalletlinkConfig::default();

    for path in [
        paths.user_config(),
        WalletlinkPaths::project_config(project_root),
    ] {
        match load_config_file(&path) {
            Ok(file_config) => {
                tracing::debug!(event = "config.file_loaded", path = %path.display());
                config = merge_configs(config, file_config);
            }
            Err(e) if e.is_file_not_found() => {}
            Err(e) => return Err(e),
        }
    }

    validate_config(&config)?;

    Ok(config)
}

fn load_config_file(path: &Path) -> Result<WalletlinkConfig, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|e| std::io::Error::new(e.kind(), format!("'{}': {}", path.display(), e)))?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}

/// Merge two configurations, with `override_config` taking precedence for
/// every field it sets.
pub fn merge_configs(
    base: WalletlinkConfig,
    override_config: WalletlinkConfig,
) -> WalletlinkConfig {
    WalletlinkConfig {
        connect: ConnectConfig::merge(&base.connect, &override_config.connect),
        dialog: DialogConfig::merge(&base.dialog, &override_config.dialog),
    }
}
