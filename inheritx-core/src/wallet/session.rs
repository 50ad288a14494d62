//! Wallet session manager.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use super::connector::{find_connector, WalletConnector, SUPPORTED_WALLETS};
use super::kit::WalletKit;
use crate::observe::{Listeners, SubscriptionId};
use crate::routing::{Navigator, Route};
use crate::storage::{KeyValueStore, StorageResult};
use crate::{format_address, InheritxError, Result, WALLET_ADDRESS_KEY, WALLET_ID_KEY};

/// Where the current address came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionOrigin {
    /// Returned by the wallet kit during this session.
    Live,
    /// Read back from storage at startup; the connector was not re-checked.
    Restored,
}

/// Snapshot of the wallet session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WalletSessionState {
    /// Connected account address.
    pub account_address: Option<String>,
    /// Connector that produced the address.
    pub selected_connector_id: Option<String>,
    /// A connect call is awaiting the wallet kit.
    pub connecting: bool,
    /// The selection modal is visible.
    pub modal_open: bool,
    /// Set exactly when `account_address` is set.
    pub origin: Option<ConnectionOrigin>,
}

/// Process-wide wallet state, owned by the UI root and shared through `Rc`.
///
/// Persists `inheritx_wallet_address` / `inheritx_wallet_id` on every
/// successful connect and clears them on disconnect.
pub struct WalletSession {
    store: Rc<dyn KeyValueStore>,
    kit: Rc<dyn WalletKit>,
    navigator: Rc<dyn Navigator>,
    state: RefCell<WalletSessionState>,
    listeners: Listeners<WalletSessionState>,
}

impl WalletSession {
    /// Create a session and eagerly restore a saved address/connector pair.
    ///
    /// The restored address is not re-verified against the wallet kit, so it
    /// may be stale; [`WalletSession::is_verified`] reports `false` until a
    /// live connect replaces it.
    pub fn new(
        store: Rc<dyn KeyValueStore>,
        kit: Rc<dyn WalletKit>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        let session = Self {
            store,
            kit,
            navigator,
            state: RefCell::new(WalletSessionState::default()),
            listeners: Listeners::new(),
        };
        session.restore();
        session
    }

    fn restore(&self) {
        let saved = self
            .store
            .get(WALLET_ADDRESS_KEY)
            .and_then(|address| Ok((address, self.store.get(WALLET_ID_KEY)?)));

        match saved {
            Ok((Some(address), Some(connector_id))) => {
                tracing::debug!(connector = %connector_id, "restored wallet session from storage");
                let mut state = self.state.borrow_mut();
                state.account_address = Some(address);
                state.selected_connector_id = Some(connector_id);
                state.origin = Some(ConnectionOrigin::Restored);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "failed to restore wallet session");
            }
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> WalletSessionState {
        self.state.borrow().clone()
    }

    /// Connected address, if any.
    pub fn address(&self) -> Option<String> {
        self.state.borrow().account_address.clone()
    }

    /// Address shortened for display (`GABC...WXYZ`), empty when disconnected.
    pub fn display_address(&self) -> String {
        self.state
            .borrow()
            .account_address
            .as_deref()
            .map(format_address)
            .unwrap_or_default()
    }

    /// Connector id of the current connection, if any.
    pub fn selected_connector_id(&self) -> Option<String> {
        self.state.borrow().selected_connector_id.clone()
    }

    /// Whether an address is present.
    pub fn is_connected(&self) -> bool {
        self.state.borrow().account_address.is_some()
    }

    /// Whether a connect call is in flight.
    pub fn is_connecting(&self) -> bool {
        self.state.borrow().connecting
    }

    /// Whether the selection modal is visible.
    pub fn is_modal_open(&self) -> bool {
        self.state.borrow().modal_open
    }

    /// Whether the current address came from a live connect.
    pub fn is_verified(&self) -> bool {
        self.state.borrow().origin == Some(ConnectionOrigin::Live)
    }

    /// Connectors the user can choose from.
    pub fn supported_wallets(&self) -> &'static [WalletConnector] {
        &SUPPORTED_WALLETS
    }

    /// Register a state listener.
    pub fn subscribe(&self, listener: impl Fn(&WalletSessionState) + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    /// Remove a state listener.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn update(&self, mutate: impl FnOnce(&mut WalletSessionState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            mutate(&mut state);
            state.clone()
        };
        self.listeners.notify(&snapshot);
    }

    /// Show the selection modal.
    pub fn open_modal(&self) {
        self.update(|s| s.modal_open = true);
    }

    /// Hide the selection modal.
    pub fn close_modal(&self) {
        self.update(|s| s.modal_open = false);
    }

    /// Connect through `connector_id` and return the account address.
    ///
    /// On success the address and connector id are persisted, the modal is
    /// closed and the UI navigates to `/asset-owner`. Wallet kit failures are
    /// returned as [`InheritxError::WalletKit`] without retrying; the session
    /// stays as it was. A failed write clears the stored pair and leaves the
    /// session disconnected, so memory and storage agree after a reload.
    #[tracing::instrument(skip(self))]
    pub async fn connect(&self, connector_id: &str) -> Result<String> {
        if find_connector(connector_id).is_none() {
            return Err(InheritxError::UnknownConnector(connector_id.to_string()));
        }
        if self.is_connecting() {
            return Err(InheritxError::invalid_state(
                "a wallet connection is already in progress",
            ));
        }

        self.update(|s| s.connecting = true);

        match self.request_and_persist(connector_id).await {
            Ok(address) => {
                self.update(|s| {
                    s.account_address = Some(address.clone());
                    s.selected_connector_id = Some(connector_id.to_string());
                    s.origin = Some(ConnectionOrigin::Live);
                    s.connecting = false;
                    s.modal_open = false;
                });
                tracing::info!(address = %format_address(&address), "wallet connected");
                self.navigator.navigate(Route::AssetOwner);
                Ok(address)
            }
            Err(e) => {
                tracing::error!(error = %e, "connection failed");
                // A failed write already cleared the stored pair.
                let cleared = matches!(e, InheritxError::Storage(_));
                self.update(|s| {
                    s.connecting = false;
                    if cleared {
                        forget_connection(s);
                    }
                });
                Err(e)
            }
        }
    }

    async fn request_and_persist(&self, connector_id: &str) -> Result<String> {
        self.kit.set_active_connector(connector_id)?;
        let address = self.kit.request_address().await?;

        let persisted = self
            .store
            .set(WALLET_ADDRESS_KEY, &address)
            .and_then(|_| self.store.set(WALLET_ID_KEY, connector_id));
        if let Err(e) = persisted {
            self.clear_persisted();
            return Err(e.into());
        }
        Ok(address)
    }

    /// Forget the connection. Never fails; calling it twice is harmless.
    pub fn disconnect(&self) {
        self.clear_persisted();
        self.update(forget_connection);
        tracing::info!("wallet disconnected");
    }

    fn clear_persisted(&self) {
        let removed: StorageResult<()> = self
            .store
            .remove(WALLET_ADDRESS_KEY)
            .and_then(|_| self.store.remove(WALLET_ID_KEY));
        if let Err(e) = removed {
            tracing::warn!(error = %e, "failed to clear persisted wallet session");
        }
    }
}

fn forget_connection(state: &mut WalletSessionState) {
    state.account_address = None;
    state.selected_connector_id = None;
    state.origin = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::test_utils::{FailingStore, MockWalletKit, ReadOnlyStore};
    use crate::MemoryNavigator;

    const ADDRESS: &str = "GABCDEFGHIJKLMNOPQRSTUVWXYZ234567ABCDEFGHIJKLMNOPQRSWXYZ";

    fn session_with(
        store: Rc<dyn KeyValueStore>,
        kit: Rc<MockWalletKit>,
    ) -> (WalletSession, Rc<MemoryNavigator>) {
        let nav = Rc::new(MemoryNavigator::new());
        let session = WalletSession::new(store, kit, nav.clone());
        (session, nav)
    }

    #[test]
    fn test_starts_disconnected() {
        let (session, nav) = session_with(
            Rc::new(MemoryStore::new()),
            Rc::new(MockWalletKit::resolving(ADDRESS)),
        );
        assert_eq!(session.state(), WalletSessionState::default());
        assert!(!session.is_connected());
        assert_eq!(session.display_address(), "");
        assert!(nav.history().is_empty());
    }

    #[test]
    fn test_restores_saved_pair_unverified() {
        let store = Rc::new(MemoryStore::with_entries([
            (WALLET_ADDRESS_KEY, ADDRESS),
            (WALLET_ID_KEY, "albedo"),
        ]));
        let (session, nav) = session_with(store, Rc::new(MockWalletKit::resolving(ADDRESS)));

        assert_eq!(session.address().as_deref(), Some(ADDRESS));
        assert_eq!(session.selected_connector_id().as_deref(), Some("albedo"));
        assert_eq!(session.state().origin, Some(ConnectionOrigin::Restored));
        assert!(session.is_connected());
        assert!(!session.is_verified());
        // Restoring does not navigate.
        assert!(nav.history().is_empty());
    }

    #[test]
    fn test_partial_pair_is_ignored() {
        let store = Rc::new(MemoryStore::with_entries([(WALLET_ADDRESS_KEY, ADDRESS)]));
        let (session, _) = session_with(store, Rc::new(MockWalletKit::resolving(ADDRESS)));
        assert!(!session.is_connected());
    }

    #[test]
    fn test_storage_read_error_starts_disconnected() {
        let (session, _) = session_with(
            Rc::new(FailingStore::new()),
            Rc::new(MockWalletKit::resolving(ADDRESS)),
        );
        assert!(!session.is_connected());
    }

    #[test]
    fn test_modal_toggle_notifies() {
        let (session, _) = session_with(
            Rc::new(MemoryStore::new()),
            Rc::new(MockWalletKit::resolving(ADDRESS)),
        );
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        session.subscribe(move |s| sink.borrow_mut().push(s.modal_open));

        session.open_modal();
        assert!(session.is_modal_open());
        session.close_modal();
        assert!(!session.is_modal_open());

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_unknown_connector_is_rejected_before_kit() {
        let kit = Rc::new(MockWalletKit::resolving(ADDRESS));
        let (session, _) = session_with(Rc::new(MemoryStore::new()), kit.clone());

        let err = session.connect("metamask").await.unwrap_err();
        assert!(matches!(err, InheritxError::UnknownConnector(ref id) if id == "metamask"));
        assert_eq!(kit.request_count(), 0);
        assert!(!session.is_connecting());
    }

    #[tokio::test]
    async fn test_connect_write_failure_leaves_disconnected() {
        let kit = Rc::new(MockWalletKit::resolving(ADDRESS));
        let store = Rc::new(FailingStore::new().fail_writes_only());
        let (session, nav) = session_with(store, kit);
        session.open_modal();

        let err = session.connect("freighter").await.unwrap_err();
        assert!(matches!(err, InheritxError::Storage(_)));
        assert!(!session.is_connected());
        assert!(!session.is_connecting());
        assert!(session.is_modal_open());
        assert!(nav.history().is_empty());
    }

    #[tokio::test]
    async fn test_write_failure_drops_restored_connection() {
        let store = Rc::new(ReadOnlyStore::with_entries([
            (WALLET_ADDRESS_KEY, "GOLDADDRESS"),
            (WALLET_ID_KEY, "rabet"),
        ]));
        let (session, nav) = session_with(store.clone(), Rc::new(MockWalletKit::resolving(ADDRESS)));
        assert_eq!(session.address().as_deref(), Some("GOLDADDRESS"));

        let err = session.connect("freighter").await.unwrap_err();
        assert!(matches!(err, InheritxError::Storage(_)));

        assert_eq!(store.get(WALLET_ADDRESS_KEY).unwrap(), None);
        assert_eq!(store.get(WALLET_ID_KEY).unwrap(), None);
        assert!(!session.is_connected());
        assert_eq!(session.selected_connector_id(), None);
        assert_eq!(session.state().origin, None);
        assert!(nav.history().is_empty());

        // A fresh session over the same store agrees.
        let (reloaded, _) = session_with(store, Rc::new(MockWalletKit::resolving(ADDRESS)));
        assert_eq!(reloaded.state(), WalletSessionState::default());
    }

    #[tokio::test]
    async fn test_kit_rejection_keeps_restored_connection() {
        let store = Rc::new(MemoryStore::with_entries([
            (WALLET_ADDRESS_KEY, "GOLDADDRESS"),
            (WALLET_ID_KEY, "rabet"),
        ]));
        let (session, _) = session_with(
            store.clone(),
            Rc::new(MockWalletKit::rejecting("User declined access")),
        );

        let err = session.connect("freighter").await.unwrap_err();
        assert!(matches!(err, InheritxError::WalletKit(_)));
        assert_eq!(session.address().as_deref(), Some("GOLDADDRESS"));
        assert_eq!(store.get(WALLET_ID_KEY).unwrap().as_deref(), Some("rabet"));
    }

    #[tokio::test]
    async fn test_live_connect_replaces_restored_address() {
        let store = Rc::new(MemoryStore::with_entries([
            (WALLET_ADDRESS_KEY, "GOLDADDRESS"),
            (WALLET_ID_KEY, "rabet"),
        ]));
        let (session, _) = session_with(store.clone(), Rc::new(MockWalletKit::resolving(ADDRESS)));
        assert!(!session.is_verified());

        session.connect("xbull").await.unwrap();

        assert!(session.is_verified());
        assert_eq!(store.get(WALLET_ID_KEY).unwrap().as_deref(), Some("xbull"));
        assert_eq!(session.display_address(), "GABC...WXYZ");
    }
}
