//! Admin session and route guard.
//!
//! There is no admin backend yet: login is a local stub that accepts any
//! non-empty email/password pair behind [`AdminAuthenticator`]. Do not treat
//! [`DemoAuthenticator`] as a security boundary.

mod auth;
mod gate;
mod session;

pub use auth::{AdminAuthenticator, AdminProfile, DemoAuthenticator};
pub use gate::{AdminGate, GateView};
pub use session::{AdminSession, AdminSessionState};
