//! Application configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields the stock front-end behaviour: Stellar testnet, Freighter as the
//! preselected wallet, all wallet modules enabled, 500 ms login delay.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::wallet::WalletKitConfig;
use crate::{InheritxError, Result};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InheritxConfig {
    /// Wallet kit construction parameters.
    #[serde(default)]
    pub wallet: WalletKitConfig,

    /// Admin login behaviour.
    #[serde(default)]
    pub admin: AdminConfig,
}

/// Admin login configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Artificial delay before the demo authenticator accepts a login.
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
}

fn default_login_delay_ms() -> u64 {
    500
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: default_login_delay_ms(),
        }
    }
}

impl AdminConfig {
    /// The login delay as a [`Duration`].
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    /// Set the login delay.
    pub fn with_login_delay_ms(mut self, ms: u64) -> Self {
        self.login_delay_ms = ms;
        self
    }
}

impl InheritxConfig {
    /// Parse configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| InheritxError::Config(format!("invalid configuration: {}", e)))
    }

    /// Load configuration from a JSON file, falling back to defaults when
    /// the file does not exist.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| {
            InheritxError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&contents)
    }

    /// Set the wallet kit configuration.
    pub fn with_wallet(mut self, wallet: WalletKitConfig) -> Self {
        self.wallet = wallet;
        self
    }

    /// Set the admin configuration.
    pub fn with_admin(mut self, admin: AdminConfig) -> Self {
        self.admin = admin;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::{ModuleSelection, WalletNetwork};

    #[test]
    fn test_defaults() {
        let config = InheritxConfig::default();
        assert_eq!(config.admin.login_delay(), Duration::from_millis(500));
        assert_eq!(config.wallet.network, WalletNetwork::Testnet);
        assert_eq!(config.wallet.selected_wallet_id, "freighter");
        assert_eq!(config.wallet.modules, ModuleSelection::AllowAll);
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = InheritxConfig::from_json_str("{}").unwrap();
        assert_eq!(config, InheritxConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = InheritxConfig::from_json_str(
            r#"{"wallet": {"network": "PUBLIC", "selected_wallet_id": "albedo"}, "admin": {"login_delay_ms": 0}}"#,
        )
        .unwrap();
        assert_eq!(config.wallet.network, WalletNetwork::Public);
        assert_eq!(config.wallet.selected_wallet_id, "albedo");
        assert_eq!(config.wallet.modules, ModuleSelection::AllowAll);
        assert_eq!(config.admin.login_delay_ms, 0);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = InheritxConfig::from_json_str("[1, 2").unwrap_err();
        assert_eq!(err.code(), crate::InheritxErrorCode::Config);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = InheritxConfig::load(temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, InheritxConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"admin": {"login_delay_ms": 25}}"#).unwrap();

        let config = InheritxConfig::load(&path).unwrap();
        assert_eq!(config.admin.login_delay_ms, 25);
    }
}
