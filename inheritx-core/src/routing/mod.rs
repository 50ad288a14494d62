//! Routes and navigation.
//!
//! Session managers never touch the browser history directly; they ask an
//! injected [`Navigator`] to move to a [`Route`].

use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A navigable page of the front-end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// Public landing page.
    Landing,
    /// Admin login form.
    AdminLogin,
    /// Admin dashboard landing.
    AdminDashboard,
    /// Admin plan listing.
    AdminPlans,
    /// Post-connect landing for asset owners.
    AssetOwner,
}

impl Route {
    /// All known routes.
    pub const ALL: [Route; 5] = [
        Route::Landing,
        Route::AdminLogin,
        Route::AdminDashboard,
        Route::AdminPlans,
        Route::AssetOwner,
    ];

    /// URL path for this route.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::AdminLogin => "/admin/login",
            Self::AdminDashboard => "/admin",
            Self::AdminPlans => "/admin/all-plans",
            Self::AssetOwner => "/asset-owner",
        }
    }

    /// Resolve a path to a route. Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|r| r.path() == normalized)
    }

    /// Whether the route sits behind the admin gate.
    ///
    /// Every `/admin` page is guarded except the login form itself.
    pub fn requires_admin(&self) -> bool {
        matches!(self, Self::AdminDashboard | Self::AdminPlans)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = crate::InheritxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_path(s)
            .ok_or_else(|| crate::InheritxError::validation(format!("unknown route: {}", s)))
    }
}

/// Moves the UI to another route.
pub trait Navigator {
    /// Navigate to `route`.
    fn navigate(&self, route: Route);
}

/// Navigator that records every navigation, for tests and native demos.
#[derive(Default)]
pub struct MemoryNavigator {
    history: RefCell<Vec<Route>>,
}

impl MemoryNavigator {
    /// Create a navigator with empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// All routes navigated to, oldest first.
    pub fn history(&self) -> Vec<Route> {
        self.history.borrow().clone()
    }

    /// The most recent route, if any.
    pub fn current(&self) -> Option<Route> {
        self.history.borrow().last().copied()
    }

    /// Number of navigations to `route`.
    pub fn count(&self, route: Route) -> usize {
        self.history.borrow().iter().filter(|r| **r == route).count()
    }
}

impl Navigator for MemoryNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(path = route.path(), "navigate");
        self.history.borrow_mut().push(route);
    }
}
