//! Wallet selection modal.
//!
//! The modal is a radio list of connectors plus a "Connect Wallet" button:
//! the user picks a wallet, then confirms. Visibility is owned by the
//! [`WalletSession`]; the pending selection is owned here.

use std::cell::RefCell;
use std::rc::Rc;

use super::connector::find_connector;
use super::session::WalletSession;
use crate::{InheritxError, Result};

/// Observable modal state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalState {
    /// Not visible.
    Closed,
    /// Visible, with the radio selection if any.
    Open {
        /// Connector id the user picked.
        selection: Option<String>,
    },
}

/// Presentation state machine for picking and confirming a connector.
///
/// `Closed → Open{None} → Open{Some(id)}* → Closed`
pub struct WalletModal {
    session: Rc<WalletSession>,
    selection: RefCell<Option<String>>,
}

impl WalletModal {
    /// Create a modal bound to `session`.
    pub fn new(session: Rc<WalletSession>) -> Self {
        Self {
            session,
            selection: RefCell::new(None),
        }
    }

    /// Current state. Reports `Closed` whenever the session modal flag is off,
    /// including when someone else closed it.
    pub fn state(&self) -> ModalState {
        if self.session.is_modal_open() {
            ModalState::Open {
                selection: self.selection.borrow().clone(),
            }
        } else {
            ModalState::Closed
        }
    }

    /// Pending selection while open.
    pub fn selection(&self) -> Option<String> {
        match self.state() {
            ModalState::Open { selection } => selection,
            ModalState::Closed => None,
        }
    }

    /// Open the modal with no selection.
    pub fn open(&self) {
        self.selection.replace(None);
        self.session.open_modal();
    }

    /// Pick a connector.
    pub fn select(&self, connector_id: &str) -> Result<()> {
        if !self.session.is_modal_open() {
            return Err(InheritxError::invalid_state("wallet modal is closed"));
        }
        if find_connector(connector_id).is_none() {
            return Err(InheritxError::UnknownConnector(connector_id.to_string()));
        }
        self.selection.replace(Some(connector_id.to_string()));
        Ok(())
    }

    /// Whether the connect button is enabled.
    pub fn can_confirm(&self) -> bool {
        self.selection().is_some() && !self.session.is_connecting()
    }

    /// Connect with the selected wallet.
    ///
    /// On success the session closes the modal and the selection is cleared.
    /// On failure the modal stays open with the selection intact.
    pub async fn confirm(&self) -> Result<String> {
        if !self.can_confirm() {
            return Err(InheritxError::invalid_state(
                "select a wallet before connecting",
            ));
        }
        let connector_id = self.selection().unwrap_or_default();

        let address = self.session.connect(&connector_id).await?;
        self.selection.replace(None);
        Ok(address)
    }

    /// Close the modal and drop the selection.
    pub fn close(&self) {
        self.selection.replace(None);
        self.session.close_modal();
    }

    /// Backdrop click; same as [`WalletModal::close`].
    pub fn dismiss(&self) {
        self.close();
    }
}
