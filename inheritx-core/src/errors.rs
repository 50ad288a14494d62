//! Error types for InheritX session operations.
//!
//! Every failure a session manager can report maps onto one
//! [`InheritxError`] variant, and every variant carries a stable
//! [`InheritxErrorCode`] so the browser bindings can hand a number to
//! JavaScript alongside the message.

use thiserror::Error;

use crate::storage::StorageError;
use crate::wallet::WalletKitError;

/// Error codes for the JavaScript boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum InheritxErrorCode {
    /// Input rejected before any side effect
    Validation = 1000,
    /// Connector id outside the supported set
    UnknownConnector = 2000,
    /// Wallet kit rejected or failed the request
    WalletKit = 2001,
    /// Persisted storage failure
    Storage = 3000,
    /// JSON encode/decode failure
    Serialization = 3001,
    /// Operation not allowed in the current state
    InvalidState = 4000,
    /// Configuration could not be loaded
    Config = 5000,
}

/// Comprehensive error type for InheritX operations.
#[derive(Debug, Error)]
pub enum InheritxError {
    /// Caller input failed validation (e.g. empty login fields).
    #[error("{0}")]
    Validation(String),

    /// The connector id is not one of the supported wallets.
    #[error("unknown wallet connector: {0}")]
    UnknownConnector(String),

    /// The external wallet kit failed; the original error is kept as-is.
    #[error(transparent)]
    WalletKit(#[from] WalletKitError),

    /// A storage write that must succeed did not.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The operation is not valid in the current state.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl InheritxError {
    /// Get the error code for the JavaScript boundary.
    pub fn code(&self) -> InheritxErrorCode {
        match self {
            Self::Validation(_) => InheritxErrorCode::Validation,
            Self::UnknownConnector(_) => InheritxErrorCode::UnknownConnector,
            Self::WalletKit(_) => InheritxErrorCode::WalletKit,
            Self::Storage(_) => InheritxErrorCode::Storage,
            Self::Serialization(_) => InheritxErrorCode::Serialization,
            Self::InvalidState(_) => InheritxErrorCode::InvalidState,
            Self::Config(_) => InheritxErrorCode::Config,
        }
    }

    /// Get the error message as an owned String.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid-state error.
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}

impl From<serde_json::Error> for InheritxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
