//! Test utilities for InheritX sessions.
//!
//! Fakes for the collaborators a session needs, plus shared fixtures:
//!
//! ```rust,ignore
//! use inheritx_core::test_utils::{MockWalletKit, TestFixtures};
//!
//! let kit = MockWalletKit::resolving(TestFixtures::ADDRESS);
//! let kit = MockWalletKit::rejecting("User declined access");
//! ```

mod fixtures;
mod mock_kit;
mod stores;

pub use fixtures::{plan_named, TestFixtures};
pub use mock_kit::MockWalletKit;
pub use stores::{FailingStore, ReadOnlyStore};
