//! Wallet commands - connect, status and disconnect

use std::path::Path;
use std::rc::Rc;

use anyhow::Result;
use colored::Colorize;
use inheritx_core::wallet::{
    find_connector, WalletKitConfig, WalletModal, WalletSession, SUPPORTED_WALLETS,
};

use crate::kit::TerminalWalletKit;
use crate::navigator::TerminalNavigator;
use crate::ui;

fn open_session(
    storage_dir: &Path,
    config: &WalletKitConfig,
    preset_address: Option<String>,
) -> Rc<WalletSession> {
    Rc::new(WalletSession::new(
        super::open_store(storage_dir),
        Rc::new(TerminalWalletKit::new(config, preset_address)),
        Rc::new(TerminalNavigator::new()),
    ))
}

fn open_configured(storage_dir: &Path, preset_address: Option<String>) -> Result<Rc<WalletSession>> {
    let config = super::load_config(storage_dir)?;
    Ok(open_session(storage_dir, &config.wallet, preset_address))
}

pub fn list() {
    ui::header("Supported Wallets");
    for connector in SUPPORTED_WALLETS.iter() {
        println!(
            "  {:<10} {}",
            connector.id.bold(),
            connector.display_name
        );
    }
}

pub async fn connect(storage_dir: &Path, wallet_id: &str, address: Option<String>) -> Result<()> {
    let config = super::load_config(storage_dir)?;
    let session = open_session(storage_dir, &config.wallet, address);
    let modal = WalletModal::new(Rc::clone(&session));

    modal.open();
    modal.select(wallet_id)?;

    let name = find_connector(wallet_id)
        .map(|c| c.display_name)
        .unwrap_or(wallet_id);
    ui::info(&format!(
        "Connecting with {} on {:?}...",
        name, config.wallet.network
    ));

    match modal.confirm().await {
        Ok(address) => {
            ui::success(&format!("Connected {}", session.display_address()));
            ui::key_value("Address", &address);
            Ok(())
        }
        Err(e) => {
            ui::error(&format!("Connection failed: {}", e));
            Err(e.into())
        }
    }
}

pub fn status(storage_dir: &Path, json: bool) -> Result<()> {
    let session = open_configured(storage_dir, None)?;

    if json {
        ui::json(&serde_json::to_value(session.state())?);
        return Ok(());
    }

    ui::header("Wallet");
    let Some(address) = session.address() else {
        ui::info("No wallet connected");
        ui::info("Run 'inheritx-demo wallet connect <wallet>' to connect one");
        return Ok(());
    };

    let wallet = session.selected_connector_id().unwrap_or_default();
    let wallet_name = find_connector(&wallet)
        .map(|c| c.display_name.to_string())
        .unwrap_or(wallet);
    ui::key_value("Wallet", &wallet_name);
    ui::key_value("Address", &address);
    ui::key_value("Short", &session.display_address());
    if !session.is_verified() {
        ui::warning("Restored from storage; the wallet has not re-confirmed this address");
    }
    Ok(())
}

pub fn disconnect(storage_dir: &Path) -> Result<()> {
    let session = open_configured(storage_dir, None)?;
    let was_connected = session.is_connected();
    session.disconnect();
    if was_connected {
        ui::success("Wallet disconnected");
    } else {
        ui::info("No wallet was connected");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use inheritx_core::test_utils::TestFixtures;
    use inheritx_core::{KeyValueStore, WALLET_ADDRESS_KEY, WALLET_ID_KEY};

    #[tokio::test]
    async fn test_connect_status_disconnect() {
        let dir = tempfile::tempdir().unwrap();
        connect(dir.path(), "xbull", Some(TestFixtures::OTHER_ADDRESS.to_string()))
            .await
            .unwrap();

        let store = crate::commands::open_store(dir.path());
        assert_eq!(
            store.get(WALLET_ADDRESS_KEY).unwrap().as_deref(),
            Some(TestFixtures::OTHER_ADDRESS)
        );
        assert_eq!(store.get(WALLET_ID_KEY).unwrap().as_deref(), Some("xbull"));

        let session = open_configured(dir.path(), None).unwrap();
        assert!(session.is_connected());
        assert!(!session.is_verified());
        status(dir.path(), false).unwrap();

        disconnect(dir.path()).unwrap();
        assert_eq!(store.get(WALLET_ADDRESS_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_connect_unknown_wallet() {
        let dir = tempfile::tempdir().unwrap();
        let err = connect(dir.path(), "metamask", Some(TestFixtures::OTHER_ADDRESS.into()))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("metamask"));
    }

    #[tokio::test]
    async fn test_connect_bad_address_persists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(connect(dir.path(), "albedo", Some("not-an-address".into()))
            .await
            .is_err());
        assert!(!open_configured(dir.path(), None).unwrap().is_connected());
    }

    #[tokio::test]
    async fn test_connect_respects_configured_modules() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(crate::commands::CONFIG_FILE),
            r#"{"wallet": {"modules": {"only": ["freighter"]}}}"#,
        )
        .unwrap();

        let err = connect(dir.path(), "albedo", Some(TestFixtures::OTHER_ADDRESS.into()))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not enabled"));
        assert!(!open_configured(dir.path(), None).unwrap().is_connected());

        connect(dir.path(), "freighter", Some(TestFixtures::OTHER_ADDRESS.into()))
            .await
            .unwrap();
        let session = open_configured(dir.path(), None).unwrap();
        assert_eq!(session.selected_connector_id().as_deref(), Some("freighter"));
    }
}
