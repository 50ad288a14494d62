//! Wallet connection.
//!
//! The heavy lifting (key custody, signing, network transport) belongs to
//! the external wallet kit. This module only tracks which connector was
//! chosen, the address it returned and whether the selection modal is
//! visible.

mod connector;
mod kit;
mod modal;
mod session;

pub use connector::{find_connector, is_supported, WalletConnector, SUPPORTED_WALLETS};
pub use kit::{ModuleSelection, WalletKit, WalletKitConfig, WalletKitError, WalletNetwork};
pub use modal::{ModalState, WalletModal};
pub use session::{ConnectionOrigin, WalletSession, WalletSessionState};
