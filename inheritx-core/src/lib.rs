//! InheritX session core.
//!
//! The InheritX front-end is a marketing site plus an admin/dashboard shell.
//! Everything stateful behind those pages lives here as explicit session
//! managers that receive their collaborators through constructor injection:
//!
//! - **Wallet session**: connected account, selected connector and the
//!   wallet-selection modal, wrapping an external [`wallet::WalletKit`].
//! - **Admin session**: the local "admin login" stub and the [`admin::AdminGate`]
//!   that keeps unauthenticated visitors out of protected routes.
//! - **Plans**: the static plan list and its tab/search filter.
//!
//! Persistence goes through a [`storage::KeyValueStore`] so the same logic
//! runs against browser `localStorage`, a JSON file or an in-memory fake.
//!
//! # Example
//!
//! ```
//! use inheritx_core::plans::{PlanListView, PlanTab};
//!
//! let mut view = PlanListView::demo();
//! view.set_tab(PlanTab::Active);
//! let names: Vec<_> = view.visible().iter().map(|p| p.name.as_str()).collect();
//! assert_eq!(names, ["Testing something"]);
//! ```

pub mod address;
pub mod admin;
pub mod config;
pub mod errors;
pub mod observe;
pub mod plans;
pub mod prelude;
pub mod routing;
pub mod storage;
pub mod timer;
pub mod wallet;

/// Test utilities for session testing.
///
/// This module is only available with the `test-utils` feature or in test builds.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use address::format_address;
pub use config::{AdminConfig, InheritxConfig};
pub use errors::{InheritxError, InheritxErrorCode};
pub use routing::{MemoryNavigator, Navigator, Route};
pub use storage::{KeyValueStore, KeyValueStoreExt, MemoryStore, StorageError};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;

/// Common result alias for InheritX operations.
pub type Result<T> = std::result::Result<T, InheritxError>;

/// Storage key holding the JSON-encoded admin profile (`{"email": ...}`).
pub const ADMIN_AUTH_KEY: &str = "adminAuth";

/// Storage key holding the raw connected wallet address.
pub const WALLET_ADDRESS_KEY: &str = "inheritx_wallet_address";

/// Storage key holding the selected wallet connector id.
pub const WALLET_ID_KEY: &str = "inheritx_wallet_id";
