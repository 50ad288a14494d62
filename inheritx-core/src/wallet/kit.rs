//! Seam to the external wallet connector library.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Stellar network the wallet kit talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WalletNetwork {
    /// Stellar public network.
    Public,
    /// SDF test network.
    #[default]
    Testnet,
    /// SDF futurenet.
    Futurenet,
    /// Local sandbox.
    Sandbox,
    /// Standalone network.
    Standalone,
}

impl WalletNetwork {
    /// Network passphrase, which is also the kit's wire value for the network.
    pub fn passphrase(&self) -> &'static str {
        match self {
            Self::Public => "Public Global Stellar Network ; September 2015",
            Self::Testnet => "Test SDF Network ; September 2015",
            Self::Futurenet => "Test SDF Future Network ; October 2022",
            Self::Sandbox => "Local Sandbox Stellar Network ; September 2022",
            Self::Standalone => "Standalone Network ; February 2017",
        }
    }
}

/// Which wallet modules the kit should load.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleSelection {
    /// Every module the kit ships.
    #[default]
    AllowAll,
    /// Only the listed module ids.
    Only(Vec<String>),
}

impl ModuleSelection {
    /// Whether the module `id` is enabled.
    pub fn includes(&self, id: &str) -> bool {
        match self {
            Self::AllowAll => true,
            Self::Only(ids) => ids.iter().any(|m| m == id),
        }
    }
}

/// Construction parameters for a wallet kit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletKitConfig {
    /// Network to connect to.
    #[serde(default)]
    pub network: WalletNetwork,

    /// Connector preselected when the kit is created.
    #[serde(default = "default_selected_wallet_id")]
    pub selected_wallet_id: String,

    /// Enabled wallet modules.
    #[serde(default)]
    pub modules: ModuleSelection,
}

fn default_selected_wallet_id() -> String {
    "freighter".to_string()
}

impl Default for WalletKitConfig {
    fn default() -> Self {
        Self {
            network: WalletNetwork::default(),
            selected_wallet_id: default_selected_wallet_id(),
            modules: ModuleSelection::default(),
        }
    }
}

impl WalletKitConfig {
    /// Set the network.
    pub fn with_network(mut self, network: WalletNetwork) -> Self {
        self.network = network;
        self
    }

    /// Set the preselected connector.
    pub fn with_selected_wallet(mut self, id: impl Into<String>) -> Self {
        self.selected_wallet_id = id.into();
        self
    }

    /// Restrict the enabled modules.
    pub fn with_modules(mut self, modules: ModuleSelection) -> Self {
        self.modules = modules;
        self
    }
}

/// Error reported by the wallet kit (user rejection, missing extension, ...).
///
/// Passed through to callers untouched; no classification is attempted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletKitError {
    /// Kit-specific numeric code, when the kit provides one.
    pub code: Option<i32>,
    /// Message from the kit.
    pub message: String,
}

impl WalletKitError {
    /// Create an error without a code.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    /// Create an error with a kit code.
    pub fn with_code(code: i32, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }
}

impl fmt::Display for WalletKitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for WalletKitError {}

/// The external wallet connector library.
///
/// `request_address` may wait indefinitely for the user to answer a
/// browser-extension popup; no timeout is applied by callers.
#[async_trait(?Send)]
pub trait WalletKit {
    /// Make `connector_id` the active wallet module.
    fn set_active_connector(&self, connector_id: &str) -> Result<(), WalletKitError>;

    /// Ask the active wallet for the user's account address.
    async fn request_address(&self) -> Result<String, WalletKitError>;
}
