//! Admin session manager.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use super::auth::{AdminAuthenticator, AdminProfile};
use crate::observe::{Listeners, SubscriptionId};
use crate::routing::{Navigator, Route};
use crate::storage::{KeyValueStore, KeyValueStoreExt};
use crate::{InheritxError, Result, ADMIN_AUTH_KEY};

/// Snapshot of the admin session.
///
/// `authenticated` is true exactly when `admin_email` is set. While `loading`
/// is true the other two fields are not meaningful yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AdminSessionState {
    /// An admin is logged in.
    pub authenticated: bool,
    /// Email of the logged-in admin.
    pub admin_email: Option<String>,
    /// Persisted state has not been read yet.
    pub loading: bool,
}

impl Default for AdminSessionState {
    fn default() -> Self {
        Self {
            authenticated: false,
            admin_email: None,
            loading: true,
        }
    }
}

/// Process-wide admin login state.
pub struct AdminSession {
    store: Rc<dyn KeyValueStore>,
    authenticator: Rc<dyn AdminAuthenticator>,
    navigator: Rc<dyn Navigator>,
    state: RefCell<AdminSessionState>,
    listeners: Listeners<AdminSessionState>,
}

impl AdminSession {
    /// Create a session in the loading state. Call [`AdminSession::restore`]
    /// once the UI is mounted.
    pub fn new(
        store: Rc<dyn KeyValueStore>,
        authenticator: Rc<dyn AdminAuthenticator>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            store,
            authenticator,
            navigator,
            state: RefCell::new(AdminSessionState::default()),
            listeners: Listeners::new(),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> AdminSessionState {
        self.state.borrow().clone()
    }

    /// Whether an admin is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().authenticated
    }

    /// Whether restore has not completed yet.
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Logged-in admin, if any.
    pub fn admin(&self) -> Option<AdminProfile> {
        self.state
            .borrow()
            .admin_email
            .as_ref()
            .map(|email| AdminProfile::new(email.clone()))
    }

    /// Register a state listener.
    pub fn subscribe(&self, listener: impl Fn(&AdminSessionState) + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    /// Remove a state listener.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn update(&self, mutate: impl FnOnce(&mut AdminSessionState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            mutate(&mut state);
            state.clone()
        };
        self.listeners.notify(&snapshot);
    }

    /// Read `adminAuth` and leave the loading state.
    ///
    /// Unreadable or corrupt data is logged and treated as logged out. Only
    /// the first call has any effect.
    pub fn restore(&self) {
        if !self.is_loading() {
            return;
        }

        let profile = match self.store.get_json::<AdminProfile>(ADMIN_AUTH_KEY) {
            Ok(profile) => profile,
            Err(e) => {
                tracing::error!(error = %e, "failed to restore auth");
                None
            }
        };

        self.update(|s| {
            s.authenticated = profile.is_some();
            s.admin_email = profile.map(|p| p.email);
            s.loading = false;
        });
    }

    /// Log in and navigate to the admin dashboard.
    ///
    /// Empty fields fail with [`InheritxError::Validation`] before anything
    /// else happens.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        if email.is_empty() || password.is_empty() {
            return Err(InheritxError::validation("Email and password are required"));
        }

        let profile = self.authenticator.authenticate(email, password).await?;
        self.store.set_json(ADMIN_AUTH_KEY, &profile)?;

        self.update(|s| {
            s.authenticated = true;
            s.admin_email = Some(profile.email);
            s.loading = false;
        });
        tracing::info!("admin logged in");
        self.navigator.navigate(Route::AdminDashboard);
        Ok(())
    }

    /// Log out and navigate to the public landing page. Never fails.
    pub fn logout(&self) {
        if let Err(e) = self.store.remove(ADMIN_AUTH_KEY) {
            tracing::warn!(error = %e, "failed to clear persisted admin session");
        }
        self.update(|s| {
            s.authenticated = false;
            s.admin_email = None;
        });
        self.navigator.navigate(Route::Landing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::DemoAuthenticator;
    use crate::storage::MemoryStore;
    use crate::test_utils::FailingStore;
    use crate::timer::ImmediateTimer;
    use crate::MemoryNavigator;
    use std::time::Duration;

    fn session_with(store: Rc<dyn KeyValueStore>) -> (AdminSession, Rc<MemoryNavigator>) {
        let nav = Rc::new(MemoryNavigator::new());
        let auth = Rc::new(DemoAuthenticator::new(
            Rc::new(ImmediateTimer),
            Duration::from_millis(500),
        ));
        (AdminSession::new(store, auth, nav.clone()), nav)
    }

    #[test]
    fn test_starts_loading() {
        let (session, _) = session_with(Rc::new(MemoryStore::new()));
        let state = session.state();
        assert!(state.loading);
        assert!(!state.authenticated);
        assert_eq!(session.admin(), None);
    }

    #[test]
    fn test_restore_without_data() {
        let (session, nav) = session_with(Rc::new(MemoryStore::new()));
        session.restore();
        assert!(!session.is_loading());
        assert!(!session.is_authenticated());
        assert!(nav.history().is_empty());
    }

    #[test]
    fn test_restore_corrupt_data_is_logged_out() {
        let store = Rc::new(MemoryStore::with_entries([(ADMIN_AUTH_KEY, "{email")]));
        let (session, _) = session_with(store);
        session.restore();
        assert!(!session.is_loading());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_restore_read_error_is_logged_out() {
        let (session, _) = session_with(Rc::new(FailingStore::new()));
        session.restore();
        assert!(!session.is_loading());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_persist_failure_keeps_state() {
        let (session, nav) = session_with(Rc::new(FailingStore::new().fail_writes_only()));
        session.restore();

        let err = session.login("a@b.com", "pw").await.unwrap_err();
        assert!(matches!(err, InheritxError::Storage(_)));
        assert!(!session.is_authenticated());
        assert!(nav.history().is_empty());
    }

    #[tokio::test]
    async fn test_empty_password_is_validation_error() {
        let (session, _) = session_with(Rc::new(MemoryStore::new()));
        session.restore();
        let err = session.login("a@b.com", "").await.unwrap_err();
        assert_eq!(err.code(), crate::InheritxErrorCode::Validation);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_then_logout() {
        let store = Rc::new(MemoryStore::new());
        let (session, nav) = session_with(store.clone());
        session.restore();

        session.login("a@b.com", "pw").await.unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.admin(), Some(AdminProfile::new("a@b.com")));
        assert_eq!(
            store.get(ADMIN_AUTH_KEY).unwrap().as_deref(),
            Some(r#"{"email":"a@b.com"}"#)
        );
        assert_eq!(nav.current(), Some(Route::AdminDashboard));

        session.logout();
        session.logout();
        assert!(!session.is_authenticated());
        assert!(!store.contains(ADMIN_AUTH_KEY));
        assert_eq!(nav.current(), Some(Route::Landing));
    }

    #[test]
    fn test_logout_with_failing_store_still_logs_out() {
        let (session, nav) = session_with(Rc::new(FailingStore::new()));
        session.restore();
        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(nav.current(), Some(Route::Landing));
    }

    #[test]
    fn test_restore_runs_once() {
        let store = Rc::new(MemoryStore::with_entries([(
            ADMIN_AUTH_KEY,
            r#"{"email":"x@y.z"}"#,
        )]));
        let (session, _) = session_with(store.clone());
        let transitions = Rc::new(std::cell::Cell::new(0));
        let counter = transitions.clone();
        session.subscribe(move |_| counter.set(counter.get() + 1));

        session.restore();
        store.remove(ADMIN_AUTH_KEY).unwrap();
        session.restore();

        assert_eq!(transitions.get(), 1);
        assert_eq!(session.state().admin_email.as_deref(), Some("x@y.z"));
    }
}
