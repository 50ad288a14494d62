//! Navigation for a terminal: report the page the web app would show.

use std::cell::Cell;

use inheritx_core::{Navigator, Route};

use crate::ui;

/// Prints each navigation and remembers the last route.
#[derive(Debug, Default)]
pub struct TerminalNavigator {
    last: Cell<Option<Route>>,
}

impl TerminalNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent route, if any navigation happened.
    pub fn last(&self) -> Option<Route> {
        self.last.get()
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(%route, "navigate");
        ui::info(&format!("→ {}", route.path()));
        self.last.set(Some(route));
    }
}
