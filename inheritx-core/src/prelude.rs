//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use inheritx_core::prelude::*;
//! ```
//!
//! ## What's Included
//!
//! - Error types: `InheritxError`, `InheritxErrorCode`, `Result`
//! - Storage: `KeyValueStore`, `KeyValueStoreExt`, `MemoryStore`
//! - Sessions: `WalletSession`, `WalletModal`, `AdminSession`, `AdminGate`
//! - Plans: `PlanListView`, `PlanTab`, `PlanRecord`

// Error handling
pub use crate::errors::{InheritxError, InheritxErrorCode};
pub use crate::Result;

// Configuration
pub use crate::config::{AdminConfig, InheritxConfig};

// Storage
pub use crate::storage::{KeyValueStore, KeyValueStoreExt, MemoryStore};

// Routing
pub use crate::routing::{Navigator, Route};

// Wallet
pub use crate::wallet::{WalletKit, WalletKitConfig, WalletModal, WalletSession};

// Admin
pub use crate::admin::{AdminAuthenticator, AdminGate, AdminSession, DemoAuthenticator, GateView};

// Plans
pub use crate::plans::{PlanListView, PlanRecord, PlanStatus, PlanTab};

pub use crate::format_address;
pub use crate::timer::Timer;
