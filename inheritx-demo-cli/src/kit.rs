//! Wallet kit for the terminal.
//!
//! There are no browser extensions here, so "connecting" means the user
//! types (or passes) the account address the wallet would have returned.

use std::cell::RefCell;

use async_trait::async_trait;
use inheritx_core::wallet::{find_connector, WalletKit, WalletKitConfig, WalletKitError};

use crate::ui;

/// Length of a Stellar account id (`G...`).
const STELLAR_ADDRESS_LEN: usize = 56;

/// Answers address requests from a preset value or an interactive prompt.
///
/// Honors the configured module set the way the browser kit does: a
/// connector outside it cannot be activated.
pub struct TerminalWalletKit {
    config: WalletKitConfig,
    preset_address: Option<String>,
    active: RefCell<Option<String>>,
}

impl TerminalWalletKit {
    pub fn new(config: &WalletKitConfig, preset_address: Option<String>) -> Self {
        Self {
            active: RefCell::new(Some(config.selected_wallet_id.clone())),
            config: config.clone(),
            preset_address,
        }
    }

    fn prompt(&self) -> Result<String, WalletKitError> {
        let name = self
            .active
            .borrow()
            .as_deref()
            .and_then(find_connector)
            .map(|c| c.display_name)
            .unwrap_or("wallet");
        ui::input(&format!("{} account address (empty to decline)", name))
            .map_err(|e| WalletKitError::new(e.to_string()))
    }
}

/// Accept only strings shaped like a Stellar public key.
pub fn check_address(address: &str) -> Result<(), WalletKitError> {
    let shaped = address.len() == STELLAR_ADDRESS_LEN
        && address.starts_with('G')
        && address
            .chars()
            .all(|c| c.is_ascii_uppercase() || ('2'..='7').contains(&c));
    if shaped {
        Ok(())
    } else {
        Err(WalletKitError::new(format!(
            "'{}' is not a Stellar account address",
            address
        )))
    }
}

#[async_trait(?Send)]
impl WalletKit for TerminalWalletKit {
    fn set_active_connector(&self, connector_id: &str) -> Result<(), WalletKitError> {
        if !self.config.modules.includes(connector_id) {
            return Err(WalletKitError::new(format!(
                "wallet module '{}' is not enabled",
                connector_id
            )));
        }
        self.active.replace(Some(connector_id.to_string()));
        Ok(())
    }

    async fn request_address(&self) -> Result<String, WalletKitError> {
        let address = match &self.preset_address {
            Some(address) => address.clone(),
            None => self.prompt()?,
        };
        let address = address.trim().to_string();
        if address.is_empty() {
            return Err(WalletKitError::new("User declined access"));
        }
        check_address(&address)?;
        Ok(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inheritx_core::test_utils::TestFixtures;
    use inheritx_core::wallet::ModuleSelection;

    fn kit(preset: Option<String>) -> TerminalWalletKit {
        TerminalWalletKit::new(&WalletKitConfig::default(), preset)
    }

    #[tokio::test]
    async fn test_preset_address() {
        let kit = kit(Some(format!(" {} ", TestFixtures::OTHER_ADDRESS)));
        kit.set_active_connector("freighter").unwrap();
        assert_eq!(
            kit.request_address().await.unwrap(),
            TestFixtures::OTHER_ADDRESS
        );
    }

    #[tokio::test]
    async fn test_empty_preset_declines() {
        let kit = kit(Some(String::new()));
        let err = kit.request_address().await.unwrap_err();
        assert_eq!(err.message, "User declined access");
    }

    #[test]
    fn test_disabled_module_is_rejected() {
        let config = WalletKitConfig::default()
            .with_modules(ModuleSelection::Only(vec!["freighter".to_string()]));
        let kit = TerminalWalletKit::new(&config, None);

        assert!(kit.set_active_connector("freighter").is_ok());
        let err = kit.set_active_connector("albedo").unwrap_err();
        assert!(err.message.contains("albedo"));
        assert_eq!(kit.active.borrow().as_deref(), Some("freighter"));
    }

    #[test]
    fn test_check_address() {
        assert!(check_address(TestFixtures::OTHER_ADDRESS).is_ok());
        assert!(check_address("GABC").is_err());
        assert!(check_address(&TestFixtures::OTHER_ADDRESS.to_lowercase()).is_err());
    }
}
