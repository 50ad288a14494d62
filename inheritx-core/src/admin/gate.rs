//! Guard for admin-only routes.

use std::cell::Cell;
use std::rc::Rc;

use super::session::{AdminSession, AdminSessionState};
use crate::observe::SubscriptionId;
use crate::routing::{Navigator, Route};

/// What a guarded route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateView {
    /// Persisted state not read yet; show a spinner.
    Loading,
    /// Not logged in; render nothing while redirecting to the login page.
    Redirecting,
    /// Logged in; render the protected content.
    Authorized,
}

impl GateView {
    /// Derive the view from a session snapshot.
    pub fn from_state(state: &AdminSessionState) -> Self {
        if state.loading {
            Self::Loading
        } else if state.authenticated {
            Self::Authorized
        } else {
            Self::Redirecting
        }
    }

    /// Lowercase name, as handed to JavaScript.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Redirecting => "redirecting",
            Self::Authorized => "authorized",
        }
    }

    /// Whether protected content is shown.
    pub fn renders_children(&self) -> bool {
        matches!(self, Self::Authorized)
    }
}

/// Redirects to `/admin/login` whenever the session settles unauthenticated.
///
/// Protected content is never rendered while loading or unauthenticated.
pub struct AdminGate {
    navigator: Rc<dyn Navigator>,
    view: Cell<Option<GateView>>,
}

impl AdminGate {
    /// Create a gate that has not evaluated any state yet.
    pub fn new(navigator: Rc<dyn Navigator>) -> Rc<Self> {
        Rc::new(Self {
            navigator,
            view: Cell::new(None),
        })
    }

    /// Last evaluated view.
    pub fn view(&self) -> Option<GateView> {
        self.view.get()
    }

    /// Forget the last view, e.g. after leaving the guarded area, so the
    /// next unauthenticated evaluation redirects again.
    pub fn reset(&self) {
        self.view.set(None);
    }

    /// Evaluate a session snapshot.
    ///
    /// Navigates only on entering `Redirecting`, so repeated notifications
    /// with the same state do not stack redirects.
    pub fn evaluate(&self, state: &AdminSessionState) -> GateView {
        let next = GateView::from_state(state);
        let previous = self.view.replace(Some(next));
        if next == GateView::Redirecting && previous != Some(GateView::Redirecting) {
            tracing::debug!("admin gate redirecting to login");
            self.navigator.navigate(Route::AdminLogin);
        }
        next
    }

    /// Evaluate the session now and on every later change.
    pub fn attach(self: &Rc<Self>, session: &AdminSession) -> SubscriptionId {
        self.evaluate(&session.state());
        let gate = Rc::clone(self);
        session.subscribe(move |state| {
            gate.evaluate(state);
        })
    }
}
