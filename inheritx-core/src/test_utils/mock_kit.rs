//! Scripted wallet kit.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::wallet::{WalletKit, WalletKitError};

/// A [`WalletKit`] that answers every address request with a fixed result.
pub struct MockWalletKit {
    response: Result<String, WalletKitError>,
    activation_error: Option<WalletKitError>,
    active_connector: RefCell<Option<String>>,
    requests: Cell<usize>,
}

impl MockWalletKit {
    /// Kit that returns `address` for every request.
    pub fn resolving(address: impl Into<String>) -> Self {
        Self::with_response(Ok(address.into()))
    }

    /// Kit whose address request fails with `message`.
    pub fn rejecting(message: impl Into<String>) -> Self {
        Self::with_response(Err(WalletKitError::new(message)))
    }

    fn with_response(response: Result<String, WalletKitError>) -> Self {
        Self {
            response,
            activation_error: None,
            active_connector: RefCell::new(None),
            requests: Cell::new(0),
        }
    }

    /// Make `set_active_connector` fail, as when the extension is missing.
    pub fn failing_activation(mut self, message: impl Into<String>) -> Self {
        self.activation_error = Some(WalletKitError::new(message));
        self
    }

    /// Number of address requests received.
    pub fn request_count(&self) -> usize {
        self.requests.get()
    }

    /// Connector most recently activated.
    pub fn active_connector(&self) -> Option<String> {
        self.active_connector.borrow().clone()
    }
}

#[async_trait(?Send)]
impl WalletKit for MockWalletKit {
    fn set_active_connector(&self, connector_id: &str) -> Result<(), WalletKitError> {
        if let Some(err) = &self.activation_error {
            return Err(err.clone());
        }
        self.active_connector.replace(Some(connector_id.to_string()));
        Ok(())
    }

    async fn request_address(&self) -> Result<String, WalletKitError> {
        self.requests.set(self.requests.get() + 1);
        self.response.clone()
    }
}
