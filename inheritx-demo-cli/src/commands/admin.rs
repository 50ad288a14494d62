//! Admin commands - login, logout, status and guarded page access

use std::path::Path;
use std::rc::Rc;

use anyhow::Result;
use inheritx_core::admin::{AdminGate, AdminSession, DemoAuthenticator, GateView};
use inheritx_core::timer::TokioTimer;
use inheritx_core::{InheritxConfig, Navigator, Route};

use crate::navigator::TerminalNavigator;
use crate::ui;

fn open_session(
    storage_dir: &Path,
    config: &InheritxConfig,
) -> (AdminSession, Rc<TerminalNavigator>) {
    let navigator = Rc::new(TerminalNavigator::new());
    let authenticator = DemoAuthenticator::from_config(Rc::new(TokioTimer), &config.admin);
    let session = AdminSession::new(
        super::open_store(storage_dir),
        Rc::new(authenticator),
        navigator.clone(),
    );
    (session, navigator)
}

pub async fn login(
    storage_dir: &Path,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let config = super::load_config(storage_dir)?;
    let (session, _navigator) = open_session(storage_dir, &config);
    session.restore();

    if let Some(admin) = session.admin() {
        ui::info(&format!("Currently logged in as {}", admin.email));
    }

    let email = match email {
        Some(email) => email,
        None => ui::input("Email")?,
    };
    let password = match password {
        Some(password) => password,
        None => ui::password("Password")?,
    };

    ui::warning("Demo login: any non-empty email and password are accepted");
    let spinner = ui::spinner("Signing in...");
    let result = session.login(&email, &password).await;
    spinner.finish_and_clear();

    match result {
        Ok(()) => {
            ui::success(&format!("Logged in as {}", email));
            Ok(())
        }
        Err(e) => {
            ui::error(&e.to_string());
            Err(e.into())
        }
    }
}

pub fn logout(storage_dir: &Path) -> Result<()> {
    let config = super::load_config(storage_dir)?;
    let (session, _navigator) = open_session(storage_dir, &config);
    session.restore();

    let previous = session.admin();
    session.logout();
    match previous {
        Some(admin) => ui::success(&format!("Logged out {}", admin.email)),
        None => ui::info("No admin was logged in"),
    }
    Ok(())
}

pub fn status(storage_dir: &Path, json: bool) -> Result<()> {
    let config = super::load_config(storage_dir)?;
    let (session, _navigator) = open_session(storage_dir, &config);
    session.restore();

    if json {
        ui::json(&serde_json::to_value(session.state())?);
        return Ok(());
    }

    ui::header("Admin");
    match session.admin() {
        Some(admin) => ui::key_value("Logged in as", &admin.email),
        None => ui::info("Not logged in"),
    }
    Ok(())
}

/// Visit `path` the way the web app would, redirecting to the login page
/// when an admin-only page is opened without a session. Returns the route
/// the user ends up on.
pub fn open(storage_dir: &Path, path: &str) -> Result<Route> {
    let route: Route = path.parse()?;
    let config = super::load_config(storage_dir)?;
    let (session, navigator) = open_session(storage_dir, &config);

    if !route.requires_admin() {
        navigator.navigate(route);
        return Ok(route);
    }

    let gate = AdminGate::new(navigator.clone());
    gate.attach(&session);
    session.restore();

    if gate.view() == Some(GateView::Authorized) {
        navigator.navigate(route);
        if let Some(admin) = session.admin() {
            ui::key_value("Admin", &admin.email);
        }
        if route == Route::AdminPlans {
            super::plans::run("All", "", false)?;
        }
    } else {
        ui::warning("Admin login required");
    }
    Ok(navigator.last().unwrap_or(route))
}
